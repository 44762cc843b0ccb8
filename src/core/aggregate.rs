use crate::core::resolver::plan_fan_out;
use crate::core::session::SearchToken;
use crate::domain::model::{AppointmentListing, ResultSet, SearchCriteria, SortKey};
use crate::domain::ports::RegistryClient;
use crate::utils::error::{FinderError, Result};
use futures::stream::{self, StreamExt, TryStreamExt};

pub const DEFAULT_CONCURRENT_REQUESTS: usize = 4;

/// 依排序鍵就地排序。日期排序為穩定排序；distance 維持原順序。
pub fn sort_listings(listings: &mut [AppointmentListing], key: SortKey) {
    match key {
        SortKey::Date => listings.sort_by_key(|listing| listing.earliest_date),
        SortKey::Distance => {
            tracing::debug!("Distance sort needs a location source, keeping current order");
        }
    }
}

impl ResultSet {
    pub fn resort(&mut self, key: SortKey) {
        sort_listings(&mut self.listings, key);
        self.sort_key = key;
    }
}

/// 不重新查詢，只重新排序既有結果
pub fn resort(mut result_set: ResultSet, key: SortKey) -> ResultSet {
    result_set.resort(key);
    result_set
}

pub struct AppointmentSearch<C: RegistryClient> {
    client: C,
    concurrent_requests: usize,
}

impl<C: RegistryClient> AppointmentSearch<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            concurrent_requests: DEFAULT_CONCURRENT_REQUESTS,
        }
    }

    /// 1 代表逐一查詢
    pub fn with_concurrency(mut self, concurrent_requests: usize) -> Self {
        self.concurrent_requests = concurrent_requests.max(1);
        self
    }

    pub async fn search(&self, criteria: &SearchCriteria) -> Result<ResultSet> {
        self.search_with_token(criteria, &SearchToken::detached()).await
    }

    /// 對每個區域各發一次請求，合併後依日期排序。
    /// 任一區域失敗即整體失敗，已取得的部分結果一併丟棄。
    pub async fn search_with_token(
        &self,
        criteria: &SearchCriteria,
        token: &SearchToken,
    ) -> Result<ResultSet> {
        let targets = plan_fan_out(&criteria.region_id, criteria.include_neighbors);
        tracing::info!(
            "🔍 Searching '{}' in {} province(s) around '{}'",
            criteria.specialty,
            targets.len(),
            criteria.region_id
        );

        // 先取出借用，closure 只綁定單一生命週期，future 才能是 Send
        let client = &self.client;
        let specialty = criteria.specialty.as_str();
        let per_region = stream::iter(targets.into_iter())
            .map(move |target| async move {
                if token.is_cancelled() {
                    return Err(FinderError::Superseded);
                }

                let listings = client
                    .fetch_for_region(target.province_code, specialty)
                    .await?;

                if token.is_cancelled() {
                    return Err(FinderError::Superseded);
                }

                tracing::debug!(
                    "Province {} ({}): {} listing(s)",
                    target.province_code,
                    target.region_id,
                    listings.len()
                );
                Ok::<_, FinderError>(listings)
            })
            // buffered 保留輸入順序，合併順序與完成順序無關
            .buffered(self.concurrent_requests)
            .try_collect::<Vec<Vec<AppointmentListing>>>()
            .await?;

        let mut listings: Vec<AppointmentListing> = per_region.into_iter().flatten().collect();
        sort_listings(&mut listings, SortKey::Date);

        tracing::info!("✅ Found {} upcoming appointment(s)", listings.len());

        Ok(ResultSet {
            listings,
            sort_key: SortKey::Date,
        })
    }
}
