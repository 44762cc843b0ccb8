use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// województwo與其相鄰清單（靜態資料）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: &'static str,
    pub display_name: &'static str,
    pub neighbor_ids: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Specialty {
    pub id: &'static str,
    pub name: &'static str,
}

/// 已驗證的搜尋條件；specialty 已轉為大寫
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub specialty: String,
    pub region_id: String,
    pub include_neighbors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryResponse {
    pub data: Vec<QueueRecord>,
    #[serde(default)]
    pub links: Option<serde_json::Value>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueRecord {
    #[serde(default)]
    pub r#type: Option<String>,
    pub id: String,
    pub attributes: QueueAttributes,
}

/// 只有 `id`、`dates.applicable`、`dates.date` 需要嚴格解碼；
/// 其餘欄位僅供顯示，型別不符時退回空值，不影響整批結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueAttributes {
    #[serde(default, deserialize_with = "lenient::text")]
    pub benefit: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub provider: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub locality: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub phone: Option<String>,
    pub dates: QueueDates,
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub statistics: Option<QueueStatistics>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub covid_19: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub toilet: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub ramp: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub car_park: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub elevator: Option<String>,
    /// registry 回傳但未建模的欄位
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueDates {
    pub applicable: bool,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub date_situation_as_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueStatistics {
    #[serde(default)]
    pub provider_data: Option<ProviderData>,
    #[serde(default)]
    pub computed_data: Option<serde_json::Value>,
}

/// 統計值可能帶小數（例如平均等待天數）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderData {
    #[serde(default, deserialize_with = "lenient::number")]
    pub awaiting: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub removed: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub average_period: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub update: Option<String>,
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::{Number, Value};

    fn as_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(as_text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(as_text(Value::deserialize(deserializer)?))
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Number>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => Some(n),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(number(deserializer)?.and_then(|n| n.as_f64()))
    }

    /// 結構不符時視為缺值
    pub fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(serde_json::from_value(value).ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Ramp,
    CarPark,
    Elevator,
    Toilet,
}

impl Accessibility {
    pub fn label(&self) -> &'static str {
        match self {
            Accessibility::Ramp => "Podjazd",
            Accessibility::CarPark => "Parking",
            Accessibility::Elevator => "Winda",
            Accessibility::Toilet => "Toaleta",
        }
    }
}

impl QueueAttributes {
    /// 只有值為 "Y" 的旗標才算可用
    pub fn accessibility(&self) -> Vec<Accessibility> {
        let flags = [
            (Accessibility::Ramp, &self.ramp),
            (Accessibility::CarPark, &self.car_park),
            (Accessibility::Elevator, &self.elevator),
            (Accessibility::Toilet, &self.toilet),
        ];
        flags
            .into_iter()
            .filter(|(_, value)| value.as_deref() == Some("Y"))
            .map(|(flag, _)| flag)
            .collect()
    }

    pub fn provider_data(&self) -> Option<&ProviderData> {
        self.statistics.as_ref()?.provider_data.as_ref()
    }
}

/// 單一機構最早可用日期的正規化結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentListing {
    pub id: String,
    pub provider_name: String,
    pub address: String,
    pub city: Option<String>,
    pub specialty: String,
    pub earliest_date: NaiveDate,
    pub contact: Option<String>,
    pub raw_attributes: QueueAttributes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    /// 尚未實作：需要地理位置來源，排序時維持原順序
    Distance,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "distance" => Ok(SortKey::Distance),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub listings: Vec<AppointmentListing>,
    pub sort_key: SortKey,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_registry_response_keeps_extra_fields() {
        let body = serde_json::json!({
            "meta": {"count": 1, "page": 1, "limit": 25},
            "links": {"first": "x", "prev": null, "self": "x", "next": null, "last": "x"},
            "data": [{
                "type": "queues",
                "id": "abc-1",
                "attributes": {
                    "case": 1,
                    "benefit": "PORADNIA KARDIOLOGICZNA",
                    "provider": "SZPITAL BRÓDNOWSKI",
                    "address": "KONDRATOWICZA 8",
                    "locality": "WARSZAWA",
                    "phone": "22 326 52 00",
                    "dates": {"applicable": true, "date": "2030-01-15", "date_situation_as_at": "2029-12-01"},
                    "statistics": {"provider_data": {"awaiting": 120, "removed": 4, "average_period": 45, "update": "2029-11"}, "computed_data": null},
                    "ramp": "Y",
                    "car_park": "N",
                    "elevator": "Y",
                    "toilet": null
                }
            }]
        });

        let response: RegistryResponse = serde_json::from_value(body).unwrap();
        let attributes = &response.data[0].attributes;

        assert_eq!(attributes.locality.as_deref(), Some("WARSZAWA"));
        assert_eq!(attributes.extra.get("case"), Some(&serde_json::json!(1)));
        assert_eq!(
            attributes.provider_data().and_then(|p| p.awaiting.clone()),
            Some(serde_json::Number::from(120))
        );
        assert_eq!(
            attributes.accessibility(),
            vec![Accessibility::Ramp, Accessibility::Elevator]
        );
    }

    #[test]
    fn test_display_fields_tolerate_nulls_numbers_and_fractions() {
        let record = serde_json::json!({
            "id": "odd-1",
            "attributes": {
                "benefit": "PORADNIA KARDIOLOGICZNA",
                "provider": null,
                "address": null,
                "locality": 44,
                "phone": 223265200u64,
                "dates": {"applicable": true, "date": "2030-01-15", "date_situation_as_at": null},
                "statistics": {"provider_data": {"awaiting": 120, "removed": "4", "average_period": 12.5, "update": null}},
                "latitude": "52.29",
                "longitude": null,
                "ramp": true,
                "toilet": ["Y"]
            }
        });

        let record: QueueRecord = serde_json::from_value(record).unwrap();
        let attributes = &record.attributes;
        let stats = attributes.provider_data().unwrap();

        assert_eq!(attributes.provider, "");
        assert_eq!(attributes.address, "");
        assert_eq!(attributes.locality.as_deref(), Some("44"));
        assert_eq!(attributes.phone.as_deref(), Some("223265200"));
        assert_eq!(stats.average_period.as_ref().and_then(|n| n.as_f64()), Some(12.5));
        assert_eq!(stats.removed, Some(serde_json::Number::from(4)));
        assert_eq!(attributes.latitude, Some(52.29));
        assert_eq!(attributes.toilet, None);
        assert!(attributes.accessibility().is_empty());
    }

    #[test]
    fn test_filter_fields_stay_strict() {
        let missing_applicable = serde_json::json!({
            "id": "x",
            "attributes": {"dates": {"date": "2030-01-15"}}
        });
        let numeric_date = serde_json::json!({
            "id": "x",
            "attributes": {"dates": {"applicable": true, "date": 20300115}}
        });

        assert!(serde_json::from_value::<QueueRecord>(missing_applicable).is_err());
        assert!(serde_json::from_value::<QueueRecord>(numeric_date).is_err());
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("date".parse::<SortKey>(), Ok(SortKey::Date));
        assert_eq!("Distance".parse::<SortKey>(), Ok(SortKey::Distance));
        assert!("price".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default(), SortKey::Date);
    }
}
