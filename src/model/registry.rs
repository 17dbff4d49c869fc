use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named registry endpoint. The name is the key of the enclosing [`RegistrySet`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryEntry {
    pub registry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
}

impl RegistryEntry {
    pub fn new(registry: impl Into<String>, home: Option<String>) -> Self {
        Self {
            registry: registry.into(),
            home,
        }
    }
}

/// Name -> entry, in file order. Later inserts of an existing name keep its position.
pub type RegistrySet = IndexMap<String, RegistryEntry>;

/// Registry URLs are compared and stored with a trailing slash.
pub fn normalize_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
