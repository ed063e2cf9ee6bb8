//! Review endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::Review;
use crate::infrastructure::services::CreateReviewRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewApiRequest {
    pub text: String,
    pub rating: i64,
    pub user_id: String,
    pub place_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub text: String,
    pub rating: i64,
    pub user_id: String,
    pub place_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id().to_string(),
            text: review.text().to_string(),
            rating: review.rating(),
            user_id: review.user_id().to_string(),
            place_id: review.place_id().to_string(),
            created_at: review.created_at().to_rfc3339(),
            updated_at: review.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
    pub total: usize,
}

/// GET /api/v1/reviews
pub async fn list_reviews(State(state): State<AppState>) -> Json<ListReviewsResponse> {
    let reviews: Vec<ReviewResponse> = state
        .facade
        .list_reviews()
        .iter()
        .map(ReviewResponse::from)
        .collect();
    let total = reviews.len();

    Json(ListReviewsResponse { reviews, total })
}

/// POST /api/v1/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewApiRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    debug!(user_id = %request.user_id, place_id = %request.place_id, "Creating review");

    let review = state.facade.create_review(CreateReviewRequest {
        text: request.text,
        rating: request.rating,
        user_id: request.user_id,
        place_id: request.place_id,
    })?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(&review))))
}

/// GET /api/v1/reviews/{review_id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let review = state.facade.get_review(&review_id)?;
    Ok(Json(ReviewResponse::from(&review)))
}

/// PUT /api/v1/reviews/{review_id}
pub async fn update_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<ReviewResponse>, ApiError> {
    debug!(review_id = %review_id, "Updating review");

    let review = state.facade.update_review(&review_id, &patch)?;
    Ok(Json(ReviewResponse::from(&review)))
}

/// DELETE /api/v1/reviews/{review_id}
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    debug!(review_id = %review_id, "Deleting review");

    state.facade.delete_review(&review_id)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": review_id
    })))
}
