//! Projects API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_content::Project;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/projects.
#[derive(Serialize)]
pub(crate) struct ProjectsResponse {
    /// All projects, in display order.
    projects: Vec<Project>,
}

/// Handle GET /api/projects.
pub(crate) async fn get_projects(State(state): State<Arc<AppState>>) -> Json<ProjectsResponse> {
    Json(ProjectsResponse {
        projects: state.store.projects().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_response_serialization() {
        let response = ProjectsResponse {
            projects: vec![Project {
                id: 1,
                title: "Realtime Collaboration Suite".to_owned(),
                stack: vec!["TypeScript".to_owned()],
                description: "Whiteboarding with presence indicators.".to_owned(),
                link: Some("https://example.com/collab".to_owned()),
                github: "https://github.com/emulsazib/collab-suite".to_owned(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["projects"][0]["id"], 1);
        assert_eq!(json["projects"][0]["title"], "Realtime Collaboration Suite");
        assert_eq!(json["projects"][0]["stack"][0], "TypeScript");
    }
}
