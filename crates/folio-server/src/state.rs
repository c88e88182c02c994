//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;

use folio_content::ContentStore;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// The site's content collections.
    pub(crate) store: ContentStore,
    /// Directory of static frontend assets.
    pub(crate) public_dir: PathBuf,
    /// Enable verbose output (show render warnings).
    pub(crate) verbose: bool,
    /// Application version for ETag invalidation.
    pub(crate) version: String,
}
