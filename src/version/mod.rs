//! Version reconciliation layer
//!
//! Fetches package metadata from the npm registry and compares each found
//! version against the registry's `latest` distribution tag.
//!
//! # Modules
//!
//! - [`registry`]: Registry trait and the metadata shape it returns
//! - [`npm`]: npm registry API client
//! - [`reconcile`]: found-vs-latest comparison over all found packages
//! - [`error`]: error types for registry operations

pub mod error;
pub mod npm;
pub mod reconcile;
pub mod registry;

pub use error::RegistryError;
pub use npm::NpmRegistry;
pub use reconcile::reconcile;
pub use registry::{PackageMetadata, Registry};
