//! Message lookup for user-facing strings
//!
//! Catalogs are flat `key -> text` JSON objects compiled into the crate, one
//! per locale.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_LOCALE: &str = "en";

const EN_CATALOG: &str = include_str!("../locales/en.json");

/// Keys used by the track pages
pub mod keys {
    pub const WEBSITE_TAB_TITLE: &str = "website_tab_title";
    pub const WEBSITE_META: &str = "website_meta";
    pub const GO_HOME_BUTTON_TEXT: &str = "go_home_button_text";
    pub const TRACK_COLLECTION: &str = "track_collection";
    pub const TRACK_NAME: &str = "track_name";
    pub const TRACK_PRICE: &str = "track_price";
    pub const TRACK_GENRE: &str = "track_genre";
    pub const TRACK_NAME_UNAVAILABLE: &str = "track_name_unavailable";
    pub const TRACK_PREVIEW_UNAVAILABLE: &str = "track_preview_unavailable";
    pub const TRACK_VIEW_IN_STORE: &str = "track_view_in_store";
    pub const TRACK_DURATION: &str = "track_duration";
    pub const TRACK_RELEASE_DATE: &str = "track_release_date";
    pub const HOME_HEADING: &str = "home_heading";
    pub const HOME_TRACK_ID_PLACEHOLDER: &str = "home_track_id_placeholder";
    pub const HOME_SUBMIT: &str = "home_submit";
}

#[derive(Debug, Error)]
pub enum IntlError {
    #[error("No message catalog for locale: {0}")]
    UnknownLocale(String),
    #[error("Malformed message catalog for {locale}: {source}")]
    Catalog {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Messages for one locale
#[derive(Clone, Debug, PartialEq)]
pub struct Intl {
    locale: String,
    messages: Arc<HashMap<String, String>>,
}

impl Intl {
    pub fn new(locale: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            messages: Arc::new(messages),
        }
    }

    /// Load the built-in catalog for `locale`
    pub fn load(locale: &str) -> Result<Self, IntlError> {
        let catalog = match locale {
            "en" => EN_CATALOG,
            other => return Err(IntlError::UnknownLocale(other.to_string())),
        };
        Self::from_catalog(locale, catalog)
    }

    /// Parse a JSON catalog
    pub fn from_catalog(locale: &str, json: &str) -> Result<Self, IntlError> {
        let messages: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| IntlError::Catalog {
                locale: locale.to_string(),
                source,
            })?;
        Ok(Self::new(locale, messages))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Text for `id`. Unknown ids render as the id itself.
    pub fn format_message(&self, id: &str) -> String {
        match self.messages.get(id) {
            Some(text) => text.clone(),
            None => {
                warn!("Missing message '{}' for locale '{}'", id, self.locale);
                id.to_string()
            }
        }
    }
}
