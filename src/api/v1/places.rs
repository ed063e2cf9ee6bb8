//! Place endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::amenities::AmenityResponse;
use super::reviews::{ListReviewsResponse, ReviewResponse};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Place, User};
use crate::infrastructure::services::{CreatePlaceRequest, PlaceDetails};

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaceApiRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenity_ids: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id().to_string(),
            title: place.title().to_string(),
            description: place.description().to_string(),
            price: place.price(),
            latitude: place.latitude(),
            longitude: place.longitude(),
            owner_id: place.owner_id().to_string(),
            amenity_ids: place.amenity_ids().to_vec(),
            created_at: place.created_at().to_rfc3339(),
            updated_at: place.updated_at().to_rfc3339(),
        }
    }
}

/// Owner fields embedded in a place detail
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceDetailResponse {
    #[serde(flatten)]
    pub place: PlaceResponse,
    pub owner: Option<OwnerSummary>,
    pub amenities: Vec<AmenityResponse>,
}

impl From<&PlaceDetails> for PlaceDetailResponse {
    fn from(details: &PlaceDetails) -> Self {
        Self {
            place: PlaceResponse::from(&details.place),
            owner: details.owner.as_ref().map(OwnerSummary::from),
            amenities: details.amenities.iter().map(AmenityResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListPlacesResponse {
    pub places: Vec<PlaceResponse>,
    pub total: usize,
}

/// GET /api/v1/places
pub async fn list_places(State(state): State<AppState>) -> Json<ListPlacesResponse> {
    let places: Vec<PlaceResponse> = state
        .facade
        .list_places()
        .iter()
        .map(PlaceResponse::from)
        .collect();
    let total = places.len();

    Json(ListPlacesResponse { places, total })
}

/// POST /api/v1/places
pub async fn create_place(
    State(state): State<AppState>,
    Json(request): Json<CreatePlaceApiRequest>,
) -> Result<(StatusCode, Json<PlaceResponse>), ApiError> {
    debug!(title = %request.title, owner_id = %request.owner_id, "Creating place");

    let place = state.facade.create_place(CreatePlaceRequest {
        title: request.title,
        description: request.description,
        price: request.price,
        latitude: request.latitude,
        longitude: request.longitude,
        owner_id: request.owner_id,
        amenity_ids: request.amenity_ids,
    })?;

    Ok((StatusCode::CREATED, Json(PlaceResponse::from(&place))))
}

/// GET /api/v1/places/{place_id}
pub async fn get_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<PlaceDetailResponse>, ApiError> {
    debug!(place_id = %place_id, "Getting place");

    let details = state.facade.get_place_details(&place_id)?;
    Ok(Json(PlaceDetailResponse::from(&details)))
}

/// PUT /api/v1/places/{place_id}
pub async fn update_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<PlaceResponse>, ApiError> {
    debug!(place_id = %place_id, "Updating place");

    let place = state.facade.update_place(&place_id, &patch)?;
    Ok(Json(PlaceResponse::from(&place)))
}

/// GET /api/v1/places/{place_id}/reviews
pub async fn list_place_reviews(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<ListReviewsResponse>, ApiError> {
    let reviews: Vec<ReviewResponse> = state
        .facade
        .reviews_for_place(&place_id)?
        .iter()
        .map(ReviewResponse::from)
        .collect();
    let total = reviews.len();

    Ok(Json(ListReviewsResponse { reviews, total }))
}
