//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Field names are camelCase; identifiers are plain numbers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use filmorate_core::{FilmId, GenreId, MpaId, UserId};

// ============================================================================
// User Responses
// ============================================================================

/// User representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
    /// Friend ids in ascending order
    pub friends: Vec<UserId>,
}

// ============================================================================
// Film Responses
// ============================================================================

/// Film representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: FilmId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa: MpaResponse,
    pub genres: Vec<GenreResponse>,
    /// Ids of users who liked the film, ascending
    pub likes: Vec<UserId>,
}

// ============================================================================
// Reference Data Responses
// ============================================================================

/// Genre representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreResponse {
    pub id: GenreId,
    pub name: String,
}

/// MPA rating representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MpaResponse {
    pub id: MpaId,
    pub name: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status of the store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub backend: String,
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(backend: &str, storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                backend: backend.to_string(),
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_response_serialization() {
        let film = FilmResponse {
            id: FilmId::new(1),
            name: "nisi eiusmod".to_string(),
            description: Some("adipisicing".to_string()),
            release_date: NaiveDate::from_ymd_opt(1967, 3, 25).unwrap(),
            duration: 100,
            mpa: MpaResponse {
                id: MpaId::new(1),
                name: "G".to_string(),
            },
            genres: vec![GenreResponse {
                id: GenreId::new(2),
                name: "Drama".to_string(),
            }],
            likes: vec![UserId::new(3)],
        };

        let json = serde_json::to_value(&film).unwrap();
        assert_eq!(json["releaseDate"], "1967-03-25");
        assert_eq!(json["mpa"]["name"], "G");
        assert_eq!(json["genres"][0]["id"], 2);
        assert_eq!(json["likes"], serde_json::json!([3]));
    }

    #[test]
    fn test_user_response_serialization() {
        let user = UserResponse {
            id: UserId::new(1),
            email: "mail@mail.ru".to_string(),
            login: "dolore".to_string(),
            name: "dolore".to_string(),
            birthday: None,
            friends: vec![UserId::new(2)],
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json["birthday"].is_null());
        assert_eq!(json["friends"], serde_json::json!([2]));
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");

        let ready = ReadinessResponse::ready("memory", true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.storage, "healthy");

        let not_ready = ReadinessResponse::ready("postgres", false);
        assert!(!not_ready.is_ready());
    }
}
