//! Summary API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_content::Summary;

use crate::state::AppState;

/// Handle GET /api/summary.
pub(crate) async fn get_summary(State(state): State<Arc<AppState>>) -> Json<Summary> {
    Json(state.store.summary().clone())
}
