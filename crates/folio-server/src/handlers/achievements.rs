//! Achievements API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_content::Achievement;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/achievements.
#[derive(Serialize)]
pub(crate) struct AchievementsResponse {
    /// All achievements, in display order.
    achievements: Vec<Achievement>,
}

/// Handle GET /api/achievements.
pub(crate) async fn get_achievements(
    State(state): State<Arc<AppState>>,
) -> Json<AchievementsResponse> {
    Json(AchievementsResponse {
        achievements: state.store.achievements().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievements_response_serialization() {
        let response = AchievementsResponse {
            achievements: vec![Achievement {
                id: 1,
                title: "Hackathon Winner 2024".to_owned(),
                description: "Won first place.".to_owned(),
                image: "/images/Cover.jpg".to_owned(),
                date: "March 2024".to_owned(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["achievements"][0]["id"], 1);
        assert_eq!(json["achievements"][0]["image"], "/images/Cover.jpg");
        assert_eq!(json["achievements"][0]["date"], "March 2024");
    }
}
