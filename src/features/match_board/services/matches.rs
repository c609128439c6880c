use crate::core::models::MatchGroup;
use crate::core::services::load_matches_data;

/// Fetch contract consumed by the board: `Ok(Some(..))` is the seller's
/// match list in backend order, `Ok(None)` means the backend has no list
/// recorded for that seller, and `Err` is a real fetch failure.
pub async fn get_seller_matches(seller_id: &str) -> Result<Option<Vec<MatchGroup>>, String> {
    let js_result = match load_matches_data(seller_id).await {
        Ok(js_result) => js_result,
        Err(e) => return Err(format!("Failed to load matches: {}", e)),
    };

    let records: Option<Vec<serde_json::Value>> = match serde_wasm_bindgen::from_value(js_result) {
        Ok(records) => records,
        Err(_) => return Err("Failed to parse matches data".to_string()),
    };

    let records = match records {
        Some(records) => records,
        None => return Ok(None),
    };

    // Malformed records are dropped one by one instead of failing the
    // whole fetch, but never silently
    let total = records.len();
    let matches: Vec<MatchGroup> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<MatchGroup>(record) {
            Ok(group) => Some(group),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Skipping malformed match record: {}", e).into(),
                );
                None
            }
        })
        .collect();

    if matches.len() != total {
        web_sys::console::error_1(
            &format!("Dropped {} malformed match records", total - matches.len()).into(),
        );
    }

    Ok(Some(matches))
}
