// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

mod store;

use store::{matches_store_file, MATCHES_KEY, SESSION_KEY, SESSION_STORE};

#[tauri::command]
async fn load_session_data(app: tauri::AppHandle) -> Result<Option<serde_json::Value>, String> {
    use tauri_plugin_store::StoreExt;

    let session_store = app.store(SESSION_STORE).map_err(|e| e.to_string())?;
    match session_store.get(SESSION_KEY) {
        Some(session) => Ok(Some(session.clone())),
        None => Ok(None),
    }
}

#[tauri::command]
async fn save_session_data(
    app: tauri::AppHandle,
    session: serde_json::Value,
) -> Result<String, String> {
    use tauri_plugin_store::StoreExt;

    let session_store = app.store(SESSION_STORE).map_err(|e| e.to_string())?;
    session_store.set(SESSION_KEY, session);
    session_store.save().map_err(|e| e.to_string())?;
    Ok("Session saved successfully".to_string())
}

#[tauri::command]
async fn load_matches_data(
    app: tauri::AppHandle,
    seller_id: String,
) -> Result<Option<Vec<serde_json::Value>>, String> {
    let matches_file = matches_store_file(&seller_id);
    println!("Tauri command: load_matches_data reading '{}'", matches_file);

    use tauri_plugin_store::StoreExt;

    let matches_store = app.store(&matches_file).map_err(|e| e.to_string())?;
    match matches_store.get(MATCHES_KEY) {
        Some(serde_json::Value::Array(records)) => Ok(Some(records)),
        // A present non-array value means the store was written badly.
        // That is a real failure, not an empty board.
        Some(_) => Err(format!("Match store for seller {} is corrupted", seller_id)),
        None => Ok(None),
    }
}

#[tauri::command]
async fn save_matches_data(
    app: tauri::AppHandle,
    seller_id: String,
    matches: Vec<serde_json::Value>,
) -> Result<String, String> {
    let matches_file = matches_store_file(&seller_id);
    println!(
        "Tauri command: save_matches_data writing {} records to '{}'",
        matches.len(),
        matches_file
    );

    use tauri_plugin_store::StoreExt;

    let matches_store = app.store(&matches_file).map_err(|e| e.to_string())?;
    matches_store.set(MATCHES_KEY, serde_json::Value::Array(matches));
    matches_store.save().map_err(|e| e.to_string())?;
    Ok("Matches saved successfully".to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            load_session_data,
            save_session_data,
            load_matches_data,
            save_matches_data
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
