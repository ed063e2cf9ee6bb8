//! v1 resource endpoints

pub mod amenities;
pub mod places;
pub mod reviews;
pub mod users;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user).put(users::update_user),
        )
        // Amenities
        .route(
            "/amenities",
            get(amenities::list_amenities).post(amenities::create_amenity),
        )
        .route(
            "/amenities/{amenity_id}",
            get(amenities::get_amenity).put(amenities::update_amenity),
        )
        // Places
        .route("/places", get(places::list_places).post(places::create_place))
        .route(
            "/places/{place_id}",
            get(places::get_place).put(places::update_place),
        )
        .route(
            "/places/{place_id}/reviews",
            get(places::list_place_reviews),
        )
        // Reviews
        .route(
            "/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/reviews/{review_id}",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
}
