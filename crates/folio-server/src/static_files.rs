//! Static file serving.
//!
//! Serves frontend assets from the configured public directory with an
//! SPA-style fallback to `index.html` for client-side routes.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Create router for static file serving with SPA fallback.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

/// Serve a static asset or fall back to `index.html` for SPA routing.
async fn serve_asset(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Map root to index.html for SPA
    let file_path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = read_asset(&state.public_dir, file_path).await {
        return ([(header::CONTENT_TYPE, mime_for(file_path))], content).into_response();
    }

    // SPA fallback: serve index.html for client-side routing
    let is_spa_route = !path.starts_with("api/") && !path.contains('.');
    if is_spa_route
        && let Some(index) = read_asset(&state.public_dir, "index.html").await
    {
        return (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            index,
        )
            .into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}

/// Read an asset below the public directory.
async fn read_asset(public_dir: &Path, rel: &str) -> Option<Vec<u8>> {
    let full = sanitized_path(public_dir, rel)?;
    tokio::fs::read(full).await.ok()
}

/// Join a request path onto the public directory, rejecting traversal.
///
/// Only plain path components are accepted; `..`, root, and prefix
/// components make the request unresolvable.
fn sanitized_path(public_dir: &Path, rel: &str) -> Option<PathBuf> {
    let rel_path = Path::new(rel);
    if rel_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(public_dir.join(rel_path))
}

/// Guess a MIME type from the file extension.
fn mime_for(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_common_types() {
        assert_eq!(mime_for("index.html"), "text/html; charset=utf-8");
        assert_eq!(mime_for("styles/site.css"), "text/css; charset=utf-8");
        assert_eq!(mime_for("scripts/blog.js"), "text/javascript; charset=utf-8");
        assert_eq!(mime_for("images/Cover.jpg"), "image/jpeg");
    }

    #[test]
    fn test_mime_for_unknown_extension() {
        assert_eq!(mime_for("file.bin"), "application/octet-stream");
        assert_eq!(mime_for("no-extension"), "application/octet-stream");
    }

    #[test]
    fn test_sanitized_path_plain() {
        let path = sanitized_path(Path::new("/srv/public"), "images/profile.jpg");
        assert_eq!(path, Some(PathBuf::from("/srv/public/images/profile.jpg")));
    }

    #[test]
    fn test_sanitized_path_rejects_traversal() {
        assert!(sanitized_path(Path::new("/srv/public"), "../etc/passwd").is_none());
        assert!(sanitized_path(Path::new("/srv/public"), "a/../../b").is_none());
        assert!(sanitized_path(Path::new("/srv/public"), "/etc/passwd").is_none());
    }
}
