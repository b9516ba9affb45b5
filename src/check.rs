//! End-to-end version check over a text body

use indexmap::{IndexMap, IndexSet};

use crate::scanner::Scanner;
use crate::version::error::RegistryError;
use crate::version::reconcile::reconcile;
use crate::version::registry::Registry;

/// Classification augmented with registry comparison results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    /// Package name -> version number mentioned in the text
    pub found: IndexMap<String, String>,
    /// Packages that should have carried a version number but did not
    pub missing: IndexSet<String>,
    /// Found packages whose version differs from the registry's latest
    /// tag, mapped to that latest version. `None` means the registry had
    /// no `latest` tag to compare against.
    pub outdated: IndexMap<String, Option<String>>,
}

/// Scans `body` for the tracked packages and flags found versions that
/// differ from the registry's latest tag.
///
/// Scanning never fails; any registry lookup failure aborts the whole
/// check.
pub async fn check_versions<R: Registry + ?Sized>(
    registry: &R,
    body: &str,
    optional_packages: &[String],
    required_packages: &[String],
) -> Result<CheckResult, RegistryError> {
    let classification = Scanner::new().classify(body, optional_packages, required_packages);
    let outdated = reconcile(registry, &classification.found).await?;

    Ok(CheckResult {
        found: classification.found,
        missing: classification.missing,
        outdated,
    })
}
