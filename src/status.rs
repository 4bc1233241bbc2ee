//! Read side of the persisted configuration blob.
//!
//! A sibling initialization flow fetches `/api/status` and writes the result
//! to localStorage; this module only reads it. The blob may not be there yet
//! on a fresh load, which is why the header polls for the system name.

use leptos::logging;
use serde::Deserialize;

use crate::session::local_storage;

const STATUS_KEY: &str = "status";
const ABOUT_CACHE_KEY: &str = "about";

pub const DEFAULT_SYSTEM_NAME: &str = "Relay Console";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct StatusBlob {
    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub chat_link: String,
    #[serde(default)]
    pub top_up_link: String,
}

pub fn status() -> StatusBlob {
    let raw = local_storage().and_then(|s| s.get_item(STATUS_KEY).ok().flatten());
    match raw {
        Some(raw) => parse_status(&raw),
        None => StatusBlob::default(),
    }
}

/// The operator-assigned display name, `None` until the blob carries one.
pub fn system_name() -> Option<String> {
    let name = status().system_name;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

pub fn system_name_or_default() -> String {
    system_name().unwrap_or_else(|| DEFAULT_SYSTEM_NAME.to_string())
}

pub fn chat_enabled() -> bool {
    !status().chat_link.is_empty()
}

pub fn top_up_link() -> Option<String> {
    let link = status().top_up_link;
    if link.is_empty() {
        None
    } else {
        Some(link)
    }
}

/// Last rendered about content, shown while the fresh copy is in flight.
pub fn cached_about() -> String {
    local_storage()
        .and_then(|s| s.get_item(ABOUT_CACHE_KEY).ok().flatten())
        .unwrap_or_default()
}

pub fn cache_about(content: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ABOUT_CACHE_KEY, content);
    }
}

fn parse_status(raw: &str) -> StatusBlob {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        logging::warn!("ignoring malformed status blob: {}", err);
        StatusBlob::default()
    })
}
