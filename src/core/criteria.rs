use crate::data::regions;
use crate::domain::model::SearchCriteria;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};

impl SearchCriteria {
    /// 建立搜尋條件：specialty 去空白並轉大寫，region 必須存在於目錄中
    pub fn new(specialty: &str, region_id: &str, include_neighbors: bool) -> Result<Self> {
        let criteria = Self {
            specialty: specialty.trim().to_uppercase(),
            region_id: region_id.trim().to_string(),
            include_neighbors,
        };
        criteria.validate()?;
        Ok(criteria)
    }
}

impl Validate for SearchCriteria {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("specialty", &self.specialty)?;
        validate_non_empty_string("region", &self.region_id)?;

        if regions::lookup(&self.region_id).is_none() {
            return Err(FinderError::InvalidCriteria {
                field: "region".to_string(),
                reason: format!("Unknown region: {}", self.region_id),
            });
        }

        Ok(())
    }
}
