//! What the board needs from the hosting page: configuration and alerts

use activity_board::{BoardConfig, MessageConfig, Notice};
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` holding the config
pub const CONFIG_ELEMENT_ID: &str = "board-config";

/// Inline page configuration. Unlike [`BoardConfig`], the API base is optional
/// and may be a path relative to the page origin.
#[derive(Debug, Deserialize)]
struct PageConfig {
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    messages: MessageConfig,
}

/// Combine the inline config (if any) with the page origin
pub fn resolve_config(inline: Option<&str>, origin: &str) -> activity_board::Result<BoardConfig> {
    let page: PageConfig = match inline {
        Some(json) => serde_json::from_str(json)?,
        None => PageConfig {
            api_base: None,
            messages: MessageConfig::default(),
        },
    };

    let api_base = match page.api_base {
        Some(path) if path.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), path)
        }
        Some(absolute) => absolute,
        None => origin.to_string(),
    };

    let config = BoardConfig {
        api_base,
        messages: page.messages,
    };
    config.api_base_url()?;
    Ok(config)
}

/// Configuration for the running page, falling back to defaults on error
pub fn board_config() -> BoardConfig {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        match read_page_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default board configuration: {}", e);
                BoardConfig::default()
            }
        }
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        BoardConfig::default()
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn read_page_config() -> Result<BoardConfig, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
    let inline = window
        .document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    resolve_config(inline.as_deref(), &origin).map_err(|e| e.to_string())
}

/// Blocking notification for the student
pub fn alert(notice: &Notice) {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(&notice.message) {
                tracing::warn!("Could not show alert: {:?}", e);
            }
        }
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        tracing::info!("{:?}: {}", notice.kind, notice.message);
    }
}
