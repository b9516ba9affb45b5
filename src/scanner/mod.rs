//! Scanner layer
//! - classify.rs: line scanner and version-token normalization
//! - types.rs: classification result types

pub mod classify;
pub mod types;

pub use classify::Scanner;
pub use types::Classification;
