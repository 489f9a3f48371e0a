//! App identity metadata

use serde::{Deserialize, Serialize};

/// Who wrote the app and where to reach them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAuthorInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

/// Fixed identity of an app, declared once at load time.
///
/// The proxy never mutates this; it only queries it and forwards it verbatim
/// to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub id: String,

    pub name: String,

    /// URL-safe form of the name
    pub name_slug: String,

    pub version: String,

    pub description: String,

    /// Lowest host API version the app runs against
    pub required_api_version: String,

    pub author: AppAuthorInfo,
}
