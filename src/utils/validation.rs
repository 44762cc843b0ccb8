use crate::utils::error::{FinderError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> FinderError {
    FinderError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// registry 端點：http(s)、有主機名稱；查詢參數由 client 自行組裝，端點本身不可帶
pub fn validate_registry_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(invalid(field_name, endpoint, "Registry endpoint is not set"));
    }

    let url = Url::parse(endpoint).map_err(|e| {
        invalid(field_name, endpoint, format!("Registry endpoint is not a valid URL: {}", e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            endpoint,
            format!("Registry endpoint must use http or https, got '{}'", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, endpoint, "Registry endpoint has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            endpoint,
            "Registry endpoint must not carry a query or fragment; search parameters are added per request",
        ));
    }
    Ok(())
}

/// 每次搜尋最多對每個區域各發一個請求，超過區域數的並行度沒有意義
pub fn validate_concurrency(field_name: &str, value: usize, region_count: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid(
            field_name,
            value,
            "At least one registry request must be allowed at a time",
        ));
    }
    if value > region_count {
        return Err(invalid(
            field_name,
            value,
            format!(
                "A search sends at most {} registry requests, so concurrency above that is not allowed",
                region_count
            ),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FinderError::InvalidCriteria {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
