use crate::domain::model::AppointmentListing;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn registry_endpoint(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
}

/// 單一省份的查詢；每次呼叫恰好一次對外請求
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn fetch_for_region(
        &self,
        province_code: &str,
        specialty: &str,
    ) -> Result<Vec<AppointmentListing>>;
}
