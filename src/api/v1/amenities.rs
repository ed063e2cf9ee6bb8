//! Amenity endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::Amenity;
use crate::infrastructure::services::CreateAmenityRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmenityApiRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AmenityResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Amenity> for AmenityResponse {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: amenity.id().to_string(),
            name: amenity.name().to_string(),
            created_at: amenity.created_at().to_rfc3339(),
            updated_at: amenity.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListAmenitiesResponse {
    pub amenities: Vec<AmenityResponse>,
    pub total: usize,
}

/// GET /api/v1/amenities
pub async fn list_amenities(State(state): State<AppState>) -> Json<ListAmenitiesResponse> {
    let amenities: Vec<AmenityResponse> = state
        .facade
        .list_amenities()
        .iter()
        .map(AmenityResponse::from)
        .collect();
    let total = amenities.len();

    Json(ListAmenitiesResponse { amenities, total })
}

/// POST /api/v1/amenities
pub async fn create_amenity(
    State(state): State<AppState>,
    Json(request): Json<CreateAmenityApiRequest>,
) -> Result<(StatusCode, Json<AmenityResponse>), ApiError> {
    debug!(name = %request.name, "Creating amenity");

    let amenity = state
        .facade
        .create_amenity(CreateAmenityRequest { name: request.name })?;

    Ok((StatusCode::CREATED, Json(AmenityResponse::from(&amenity))))
}

/// GET /api/v1/amenities/{amenity_id}
pub async fn get_amenity(
    State(state): State<AppState>,
    Path(amenity_id): Path<String>,
) -> Result<Json<AmenityResponse>, ApiError> {
    let amenity = state.facade.get_amenity(&amenity_id)?;
    Ok(Json(AmenityResponse::from(&amenity)))
}

/// PUT /api/v1/amenities/{amenity_id}
pub async fn update_amenity(
    State(state): State<AppState>,
    Path(amenity_id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<AmenityResponse>, ApiError> {
    debug!(amenity_id = %amenity_id, "Updating amenity");

    let amenity = state.facade.update_amenity(&amenity_id, &patch)?;
    Ok(Json(AmenityResponse::from(&amenity)))
}
