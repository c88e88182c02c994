//! Blog API endpoints.
//!
//! The listing endpoint returns post summaries without article bodies. The
//! detail endpoint renders the article body to HTML server-side and
//! supports conditional requests via ETag.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use folio_content::{BlogPost, BlogPostSummary};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/blog.
#[derive(Serialize)]
pub(crate) struct PostsResponse {
    /// Post summaries, in display order.
    posts: Vec<BlogPostSummary>,
}

/// Response for GET /api/blog/{id}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostResponse {
    /// Stable numeric id.
    id: u32,
    /// Post title.
    title: String,
    /// Listing excerpt.
    excerpt: String,
    /// Raw article body.
    content: String,
    /// Article body rendered to HTML.
    content_html: String,
    /// Author display name.
    author: String,
    /// Display date.
    date: String,
    /// Tag labels.
    tags: Vec<String>,
}

impl PostResponse {
    fn new(post: &BlogPost, content_html: String) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            content_html,
            author: post.author.clone(),
            date: post.date.clone(),
            tags: post.tags.clone(),
        }
    }
}

/// Handle GET /api/blog.
pub(crate) async fn get_posts(State(state): State<Arc<AppState>>) -> Json<PostsResponse> {
    Json(PostsResponse {
        posts: state.store.blog_posts(),
    })
}

/// Handle GET /api/blog/{id}.
pub(crate) async fn get_post(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    // Non-numeric ids fall through to the same not-found envelope.
    let post = id
        .parse::<u32>()
        .ok()
        .and_then(|id| state.store.blog_post(id))
        .ok_or(ServerError::PostNotFound)?;

    let rendered = folio_renderer::render(&post.content);

    // Log warnings in verbose mode
    if state.verbose && !rendered.warnings.is_empty() {
        for warning in &rendered.warnings {
            tracing::warn!(post_id = post.id, warning = %warning, "Article render warning");
        }
    }

    // Compute ETag
    let etag = compute_etag(&state.version, &rendered.html);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = PostResponse::new(post, rendered.html);

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_string()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
