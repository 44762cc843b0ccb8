use crate::data::regions;

/// 一次對外請求的目標
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanOutTarget {
    pub region_id: String,
    pub province_code: &'static str,
}

/// 展開要查詢的區域：自身在前，相鄰區域依宣告順序在後。
/// 未知區域不報錯，只回傳自身。
pub fn resolve_regions(region_id: &str, include_neighbors: bool) -> Vec<String> {
    let mut resolved = vec![region_id.to_string()];
    if !include_neighbors {
        return resolved;
    }

    match regions::lookup(region_id) {
        Some(region) => {
            resolved.extend(region.neighbor_ids.iter().map(|id| id.to_string()));
        }
        None => {
            tracing::debug!("Region '{}' not in catalog, searching it alone", region_id);
        }
    }

    resolved
}

/// 將區域轉為 province 代碼；沒有代碼的區域直接略過
pub fn plan_fan_out(region_id: &str, include_neighbors: bool) -> Vec<FanOutTarget> {
    resolve_regions(region_id, include_neighbors)
        .into_iter()
        .filter_map(|id| match regions::province_code(&id) {
            Some(code) => Some(FanOutTarget {
                region_id: id,
                province_code: code,
            }),
            None => {
                tracing::debug!("Region '{}' has no province code, skipping", id);
                None
            }
        })
        .collect()
}
