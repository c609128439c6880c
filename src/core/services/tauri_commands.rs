use wasm_bindgen::JsValue;

use crate::tauri_bridge::invoke_cmd;

// Typed wrappers for the backend commands the UI consumes. Argument keys
// use the camelCase names Tauri derives from the command parameters.

pub async fn load_session_data() -> Result<JsValue, String> {
    invoke_cmd("load_session_data", serde_json::json!({})).await
}

#[allow(dead_code)] // Write path for the platform login flow and demo seeding
pub async fn save_session_data(session: serde_json::Value) -> Result<JsValue, String> {
    invoke_cmd("save_session_data", serde_json::json!({ "session": session })).await
}

pub async fn load_matches_data(seller_id: &str) -> Result<JsValue, String> {
    invoke_cmd(
        "load_matches_data",
        serde_json::json!({ "sellerId": seller_id }),
    )
    .await
}

#[allow(dead_code)] // Write path for the platform sync process and demo seeding
pub async fn save_matches_data(
    seller_id: &str,
    matches: Vec<serde_json::Value>,
) -> Result<JsValue, String> {
    invoke_cmd(
        "save_matches_data",
        serde_json::json!({
            "sellerId": seller_id,
            "matches": matches
        }),
    )
    .await
}
