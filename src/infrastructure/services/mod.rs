//! Infrastructure services

mod facade;

pub use facade::{
    CreateAmenityRequest, CreatePlaceRequest, CreateReviewRequest, CreateUserRequest, HbnbFacade,
    PlaceDetails, RepositoryCounts,
};
