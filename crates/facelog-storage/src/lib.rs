//! Facelog Storage Library
//!
//! Storage abstraction for image artifacts: the `ImageStore` trait and the
//! local-filesystem implementation that persists files under the public
//! static root.
//!
//! # Storage key format
//!
//! Keys are relative to the static root and look like
//! `uploads/{token}_{sanitized-filename}` for originals and
//! `uploads/detected_{token}_{sanitized-filename}` for annotated results.
//! Uniqueness comes from the random token alone; the sanitized fragment is
//! display-only. Keys must not contain `..` or a leading `/`. Key generation
//! is centralized in the `keys` module.

pub mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use keys::{sanitize_filename, ArtifactKeys};
pub use local::LocalImageStore;
pub use traits::{ImageStore, StorageError, StorageResult};
