//! Compares found versions against the registry's latest tag

use futures::future::try_join_all;
use indexmap::IndexMap;
use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Looks up every found package and records the ones whose mentioned
/// version differs from the registry's `latest` tag.
///
/// A `None` value means the registry document carried versions but no tags
/// section, so there is no known latest to show. Packages the registry does
/// not know (no versions collection) produce no entry. Lookups run
/// concurrently; each package's outcome only depends on its own response,
/// and the first failed lookup aborts the whole pass.
pub async fn reconcile<R: Registry + ?Sized>(
    registry: &R,
    found: &IndexMap<String, String>,
) -> Result<IndexMap<String, Option<String>>, RegistryError> {
    let lookups = found.iter().map(|(name, version)| async move {
        let metadata = registry.fetch_metadata(name).await?;
        Ok::<_, RegistryError>((name, version, metadata))
    });

    let mut outdated = IndexMap::new();

    for (name, version, metadata) in try_join_all(lookups).await? {
        if metadata.versions.is_none() {
            // Not published under this name; nothing to compare against
            debug!("{} has no versions in the registry, skipping", name);
            continue;
        }

        let latest = metadata.latest();
        if latest != Some(version.as_str()) {
            outdated.insert(name.clone(), latest.map(str::to_string));
        }
    }

    Ok(outdated)
}
