use serde::{Deserialize, Serialize};

use crate::constants::{PROFILE_PIC_SIZE, PROFILE_PLACEHOLDER};
use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Absent when the hosting page initializes Firebase on its own.
    #[serde(default)]
    pub firebase: Option<FirebaseOptions>,
    #[serde(default)]
    pub profile: ProfileSettings,
    #[serde(default)]
    pub geolocation: GeolocationSettings,
}

impl AppConfig {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str::<AppConfig>(source)?)
    }
}

/// Passed verbatim to `firebase.initializeApp`, hence the camelCase names.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseOptions {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProfileSettings {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_size")]
    pub size: u32,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            size: default_size(),
        }
    }
}

fn default_placeholder() -> String {
    PROFILE_PLACEHOLDER.to_string()
}

fn default_size() -> u32 {
    PROFILE_PIC_SIZE
}

/// Unset fields leave the browser defaults in place (no local timeout).
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GeolocationSettings {
    #[serde(default)]
    pub high_accuracy: bool,
    pub timeout_ms: Option<u32>,
    pub maximum_age_ms: Option<u32>,
}
