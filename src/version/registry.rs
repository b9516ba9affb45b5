//! Registry trait for fetching package metadata

#[cfg(test)]
use mockall::automock;

use std::collections::HashMap;

use serde::Deserialize;

use crate::version::error::RegistryError;

/// Abbreviated package metadata as served by npm-style registries
///
/// Only the fields the reconciler inspects are modeled; the rest of the
/// document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageMetadata {
    /// Published versions keyed by version string. Absent when the registry
    /// does not know the package.
    #[serde(default)]
    pub versions: Option<HashMap<String, serde_json::Value>>,
    /// Distribution tags such as `latest`
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: Option<HashMap<String, String>>,
}

impl PackageMetadata {
    /// The version the registry distributes by default, if tagged
    pub fn latest(&self) -> Option<&str> {
        self.dist_tags.as_ref()?.get("latest").map(String::as_str)
    }
}

/// Trait for fetching package metadata from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches abbreviated metadata for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "lodash", "@types/node")
    ///
    /// # Returns
    /// * `Ok(PackageMetadata)` - Parsed metadata document
    /// * `Err(RegistryError)` - If the lookup fails
    async fn fetch_metadata(&self, package_name: &str) -> Result<PackageMetadata, RegistryError>;
}
