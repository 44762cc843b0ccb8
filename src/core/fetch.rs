use crate::domain::model::{AppointmentListing, QueueRecord, RegistryResponse};
use crate::domain::ports::{ConfigProvider, RegistryClient};
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use reqwest::Client;

pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://api.nfz.gov.pl/app-itl-api/queues";

// 只取第一頁；超過 25 筆的區域會被截斷
const PAGE: &str = "1";
const LIMIT: &str = "25";
const CASE: &str = "1";

pub struct HttpRegistryClient {
    client: Client,
    endpoint: String,
}

impl HttpRegistryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.registry_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_first_page(
        &self,
        province_code: &str,
        specialty: &str,
    ) -> Result<Vec<AppointmentListing>> {
        tracing::debug!(
            "📡 Querying registry for province {} ({})",
            province_code,
            specialty
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("page", PAGE),
                ("limit", LIMIT),
                ("case", CASE),
                ("province", province_code),
                ("benefit", specialty),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Registry response status for {}: {}", province_code, status);

        if !status.is_success() {
            return Err(FinderError::RegistryRequestError {
                province: province_code.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let decoded: RegistryResponse =
            serde_json::from_str(&body).map_err(|source| FinderError::RegistryDecodeError {
                province: province_code.to_string(),
                source,
            })?;

        let fetched = decoded.data.len();
        let listings = normalize_records(decoded.data, Local::now().date_naive());
        tracing::debug!(
            "Province {}: {} of {} queues have an upcoming date",
            province_code,
            listings.len(),
            fetched
        );

        Ok(listings)
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn fetch_for_region(
        &self,
        province_code: &str,
        specialty: &str,
    ) -> Result<Vec<AppointmentListing>> {
        let result = self.fetch_first_page(province_code, specialty).await;
        if let Err(e) = &result {
            tracing::error!("❌ Registry fetch for province {} failed: {}", province_code, e);
        }
        result
    }
}

/// 解析 `dates.date`；接受純日期或帶時間的格式，只保留日曆日
pub fn parse_queue_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Local).date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// 過濾並正規化：需 applicable、有日期、且日期不早於今天（當天仍算）
pub fn normalize_records(records: Vec<QueueRecord>, today: NaiveDate) -> Vec<AppointmentListing> {
    records
        .into_iter()
        .filter_map(|record| {
            let dates = &record.attributes.dates;
            if !dates.applicable {
                return None;
            }

            let raw_date = dates.date.as_deref()?;
            let earliest_date = match parse_queue_date(raw_date) {
                Some(date) => date,
                None => {
                    tracing::debug!("Skipping queue {} with unparseable date '{}'", record.id, raw_date);
                    return None;
                }
            };
            if earliest_date < today {
                return None;
            }

            Some(into_listing(record, earliest_date))
        })
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn into_listing(record: QueueRecord, earliest_date: NaiveDate) -> AppointmentListing {
    let attributes = record.attributes;
    AppointmentListing {
        id: record.id,
        provider_name: attributes.provider.clone(),
        address: attributes.address.clone(),
        city: non_blank(&attributes.locality),
        specialty: attributes.benefit.clone(),
        earliest_date,
        contact: non_blank(&attributes.phone),
        raw_attributes: attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn queue(id: &str, applicable: bool, date: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "type": "queues",
            "id": id,
            "attributes": {
                "benefit": "PORADNIA KARDIOLOGICZNA",
                "provider": format!("PROVIDER {}", id),
                "address": "UL. TESTOWA 1",
                "locality": "WARSZAWA",
                "phone": "",
                "dates": {"applicable": applicable, "date": date, "date_situation_as_at": null}
            }
        })
    }

    fn records(values: Vec<serde_json::Value>) -> Vec<QueueRecord> {
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_queue_date_formats() {
        assert_eq!(parse_queue_date("2025-03-01"), Some(date("2025-03-01")));
        assert_eq!(parse_queue_date("2025-03-01T08:30:00"), Some(date("2025-03-01")));
        assert!(parse_queue_date("2025-03-01T12:00:00+00:00").is_some());
        assert_eq!(parse_queue_date("01.03.2025"), None);
        assert_eq!(parse_queue_date(""), None);
    }

    #[test]
    fn test_normalize_filters_ineligible_records() {
        let today = date("2025-03-01");
        let input = records(vec![
            queue("past", true, Some("2025-02-28")),
            queue("today", true, Some("2025-03-01")),
            queue("future", true, Some("2025-04-10")),
            queue("not-applicable", false, Some("2025-04-10")),
            queue("no-date", true, None),
            queue("garbage", true, Some("wkrótce")),
        ]);

        let listings = normalize_records(input, today);
        let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, vec!["today", "future"]);
    }

    #[test]
    fn test_normalize_maps_fields() {
        let listings = normalize_records(
            records(vec![queue("q1", true, Some("2025-03-05"))]),
            date("2025-03-01"),
        );
        let listing = &listings[0];

        assert_eq!(listing.provider_name, "PROVIDER q1");
        assert_eq!(listing.address, "UL. TESTOWA 1");
        assert_eq!(listing.city.as_deref(), Some("WARSZAWA"));
        assert_eq!(listing.specialty, "PORADNIA KARDIOLOGICZNA");
        assert_eq!(listing.earliest_date, date("2025-03-05"));
        // 空字串電話視為沒有
        assert_eq!(listing.contact, None);
        assert_eq!(listing.raw_attributes.dates.date.as_deref(), Some("2025-03-05"));
    }

    #[tokio::test]
    async fn test_fetch_sends_fixed_query_parameters() {
        let server = MockServer::start();
        let upcoming = (Local::now().date_naive() + chrono::Duration::days(3))
            .format("%Y-%m-%d")
            .to_string();

        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/queues")
                .query_param("page", "1")
                .query_param("limit", "25")
                .query_param("case", "1")
                .query_param("province", "07")
                .query_param("benefit", "PORADNIA KARDIOLOGICZNA")
                .query_param("format", "json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "meta": {"count": 1},
                    "links": {},
                    "data": [queue("q1", true, Some(upcoming.as_str()))]
                }));
        });

        let client = HttpRegistryClient::new(server.url("/queues"));
        let listings = client
            .fetch_for_region("07", "PORADNIA KARDIOLOGICZNA")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "q1");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_request_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/queues");
            then.status(500);
        });

        let client = HttpRegistryClient::new(server.url("/queues"));
        let err = client.fetch_for_region("12", "KARDIOLOGIA").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(
            err,
            FinderError::RegistryRequestError { ref province, status: 500 } if province == "12"
        ));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/queues");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"errors": [{"title": "nope"}]}));
        });

        let client = HttpRegistryClient::new(server.url("/queues"));
        let err = client.fetch_for_region("01", "KARDIOLOGIA").await.unwrap_err();

        assert!(matches!(err, FinderError::RegistryDecodeError { ref province, .. } if province == "01"));
    }
}
