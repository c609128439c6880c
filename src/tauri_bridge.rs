use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// The one place the UI crosses into the Tauri runtime. Command rejections
// carry the backend's String error, so they are unwrapped back into plain
// strings here and no caller has to look at raw JS values.
pub async fn invoke_cmd(cmd: &str, args: serde_json::Value) -> Result<JsValue, String> {
    let js_args = match to_value(&args) {
        Ok(js_args) => js_args,
        Err(_) => return Err(format!("Failed to serialize arguments for {} command", cmd)),
    };

    match invoke(cmd, js_args).await {
        Ok(result) => Ok(result),
        Err(rejection) => Err(rejection
            .as_string()
            .unwrap_or_else(|| format!("{} command failed", cmd))),
    }
}
