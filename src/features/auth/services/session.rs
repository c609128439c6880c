use crate::core::models::AuthUser;
use crate::core::services::load_session_data;

/// Read the stored session. `Ok(None)` means nobody is signed in on this
/// device; the platform writes the session value when the seller logs in.
pub async fn get_session() -> Result<Option<AuthUser>, String> {
    match load_session_data().await {
        Ok(js_result) => match serde_wasm_bindgen::from_value::<Option<AuthUser>>(js_result) {
            Ok(session) => Ok(session),
            Err(_) => Err("Failed to parse stored session".to_string()),
        },
        Err(e) => Err(format!("Failed to load session: {}", e)),
    }
}
