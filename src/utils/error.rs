use thiserror::Error;

/// 使用者看到的搜尋失敗訊息（整個搜尋失敗，不顯示部分結果）
pub const SEARCH_FAILED_MESSAGE: &str =
    "Wystąpił błąd podczas wyszukiwania terminów. Spróbuj ponownie później.";

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Invalid search criteria: {field} - {reason}")]
    InvalidCriteria { field: String, reason: String },

    #[error("Registry request for province {province} failed with status {status}")]
    RegistryRequestError { province: String, status: u16 },

    #[error("Registry response for province {province} could not be decoded: {source}")]
    RegistryDecodeError {
        province: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP transport error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Search was superseded by a newer search")]
    Superseded,

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Registry,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::InvalidCriteria { .. } => ErrorCategory::Input,
            FinderError::RegistryRequestError { .. } | FinderError::RegistryDecodeError { .. } => {
                ErrorCategory::Registry
            }
            FinderError::HttpError(_) => ErrorCategory::Network,
            FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FinderError::Superseded
            | FinderError::IoError(_)
            | FinderError::SerializationError(_)
            | FinderError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 被新搜尋取代不算失敗
            FinderError::Superseded => ErrorSeverity::Low,
            FinderError::RegistryRequestError { .. } | FinderError::HttpError(_) => {
                ErrorSeverity::Medium
            }
            FinderError::InvalidCriteria { .. }
            | FinderError::RegistryDecodeError { .. }
            | FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FinderError::IoError(_)
            | FinderError::SerializationError(_)
            | FinderError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FinderError::InvalidCriteria { .. } => {
                "Check the specialty name and pick a region from `nfz-finder regions`"
            }
            FinderError::RegistryRequestError { .. } | FinderError::HttpError(_) => {
                "The registry may be temporarily unavailable, try again later"
            }
            FinderError::RegistryDecodeError { .. } => {
                "The registry response format may have changed, check the endpoint setting"
            }
            FinderError::Superseded => "No action needed, the newer search result is used",
            FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            FinderError::IoError(_) => "Check file paths and permissions",
            FinderError::SerializationError(_) | FinderError::CsvError(_) => {
                "Try a different output format"
            }
        }
    }

    /// 給終端使用者的訊息；搜尋相關錯誤一律收斂成同一句
    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::InvalidCriteria { field, .. } if field == "specialty" => {
                "Wpisz lub wybierz nazwę świadczenia".to_string()
            }
            FinderError::InvalidCriteria { field, .. } if field == "region" => {
                "Wybierz województwo".to_string()
            }
            FinderError::InvalidCriteria { reason, .. } => reason.clone(),
            FinderError::RegistryRequestError { .. }
            | FinderError::RegistryDecodeError { .. }
            | FinderError::HttpError(_) => SEARCH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
