use crate::modules::client_config::core::payload::ConfigPayload;

pub const BROWSER_GLOBAL: &str = "window.EXCEL_UP_CFG";

pub fn render_json(payload: &ConfigPayload) -> Result<String, serde_json::Error> {
    serde_json::to_string(payload)
}

/// `window.EXCEL_UP_CFG = {...};`
pub fn render_script(payload: &ConfigPayload) -> Result<String, serde_json::Error> {
    Ok(format!("{BROWSER_GLOBAL} = {};", render_json(payload)?))
}
