//! Timeline API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_content::TimelineEntry;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/timeline.
#[derive(Serialize)]
pub(crate) struct TimelineResponse {
    /// Career timeline entries, newest first.
    timeline: Vec<TimelineEntry>,
}

/// Handle GET /api/timeline.
pub(crate) async fn get_timeline(State(state): State<Arc<AppState>>) -> Json<TimelineResponse> {
    Json(TimelineResponse {
        timeline: state.store.timeline().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_response_serialization() {
        let response = TimelineResponse {
            timeline: vec![TimelineEntry {
                year: "2024".to_owned(),
                milestone: "Led platform modernization.".to_owned(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["timeline"][0]["year"], "2024");
        assert_eq!(json["timeline"][0]["milestone"], "Led platform modernization.");
    }
}
