//! HBnB facade - business rules on top of one repository per entity kind

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::domain::amenity::validate_amenity_name;
use crate::domain::place::{validate_latitude, validate_longitude, validate_price, validate_title};
use crate::domain::review::{validate_rating, validate_text};
use crate::domain::storage::patch_fields;
use crate::domain::user::{validate_email, validate_first_name, validate_last_name};
use crate::domain::{Amenity, DomainError, Place, Repository, RepositoryExt, Review, User};
use crate::infrastructure::storage::InMemoryRepository;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Request for creating a new amenity
#[derive(Debug, Clone)]
pub struct CreateAmenityRequest {
    pub name: String,
}

/// Request for creating a new place
#[derive(Debug, Clone)]
pub struct CreatePlaceRequest {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenity_ids: Vec<String>,
}

/// Request for creating a new review
#[derive(Debug, Clone)]
pub struct CreateReviewRequest {
    pub text: String,
    pub rating: i64,
    pub user_id: String,
    pub place_id: String,
}

/// A place with its owner and amenities resolved
#[derive(Debug, Clone)]
pub struct PlaceDetails {
    pub place: Place,
    pub owner: Option<User>,
    pub amenities: Vec<Amenity>,
}

/// Number of stored entities per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryCounts {
    pub users: usize,
    pub places: usize,
    pub reviews: usize,
    pub amenities: usize,
}

/// Fields a client patch may never write
const TIMESTAMP_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Service facade used by the HTTP layer
///
/// Check-then-write sequences (email uniqueness, referenced entities) run
/// under one write lock so concurrent requests cannot interleave them.
#[derive(Debug)]
pub struct HbnbFacade {
    users: Arc<dyn Repository<User>>,
    places: Arc<dyn Repository<Place>>,
    reviews: Arc<dyn Repository<Review>>,
    amenities: Arc<dyn Repository<Amenity>>,
    writes: Mutex<()>,
}

impl Default for HbnbFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl HbnbFacade {
    /// Create a facade backed by empty in-memory repositories
    pub fn new() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryRepository::<User>::new()),
            Arc::new(InMemoryRepository::<Place>::new()),
            Arc::new(InMemoryRepository::<Review>::new()),
            Arc::new(InMemoryRepository::<Amenity>::new()),
        )
    }

    pub fn with_repositories(
        users: Arc<dyn Repository<User>>,
        places: Arc<dyn Repository<Place>>,
        reviews: Arc<dyn Repository<Review>>,
        amenities: Arc<dyn Repository<Amenity>>,
    ) -> Self {
        Self {
            users,
            places,
            reviews,
            amenities,
            writes: Mutex::new(()),
        }
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear every repository
    pub fn reset(&self) {
        let _guard = self.lock_writes();
        info!("Resetting all repositories");

        self.reviews.clear();
        self.places.clear();
        self.amenities.clear();
        self.users.clear();
    }

    pub fn counts(&self) -> RepositoryCounts {
        RepositoryCounts {
            users: self.users.count(),
            places: self.places.count(),
            reviews: self.reviews.count(),
            amenities: self.amenities.count(),
        }
    }

    // Users

    pub fn create_user(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        info!(email = %request.email, "Creating user");

        validate_first_name(&request.first_name).map_err(validation)?;
        validate_last_name(&request.last_name).map_err(validation)?;
        validate_email(&request.email).map_err(validation)?;

        let _guard = self.lock_writes();
        self.ensure_email_available(&request.email, None)?;

        let user = User::new(request.first_name, request.last_name, request.email)
            .with_admin(request.is_admin);

        self.users.add(user)
    }

    pub fn get_user(&self, id: &str) -> Result<User, DomainError> {
        self.users.get_or_fail(id)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.list_all()
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.users.find_one("email", &Value::from(email))
    }

    pub fn update_user(&self, id: &str, patch: &Value) -> Result<User, DomainError> {
        info!(id = %id, "Updating user");

        let fields = client_fields(patch, &[])?;
        let _guard = self.lock_writes();
        self.users.get_or_fail(id)?;

        if let Some(first_name) = string_field(&fields, "first_name")? {
            validate_first_name(first_name).map_err(validation)?;
        }

        if let Some(last_name) = string_field(&fields, "last_name")? {
            validate_last_name(last_name).map_err(validation)?;
        }

        if let Some(email) = string_field(&fields, "email")? {
            validate_email(email).map_err(validation)?;
            self.ensure_email_available(email, Some(id))?;
        }

        if let Some(is_admin) = fields.get("is_admin") {
            if !is_admin.is_boolean() {
                return Err(DomainError::validation("'is_admin' must be a boolean"));
            }
        }

        self.users.update(id, &stamped(fields))
    }

    fn ensure_email_available(&self, email: &str, owner: Option<&str>) -> Result<(), DomainError> {
        match self.users.find_one("email", &Value::from(email))? {
            Some(existing) if Some(existing.id()) != owner => Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                email
            ))),
            _ => Ok(()),
        }
    }

    // Amenities

    pub fn create_amenity(&self, request: CreateAmenityRequest) -> Result<Amenity, DomainError> {
        info!(name = %request.name, "Creating amenity");

        validate_amenity_name(&request.name).map_err(validation)?;

        self.amenities.add(Amenity::new(request.name))
    }

    pub fn get_amenity(&self, id: &str) -> Result<Amenity, DomainError> {
        self.amenities.get_or_fail(id)
    }

    pub fn list_amenities(&self) -> Vec<Amenity> {
        self.amenities.list_all()
    }

    pub fn update_amenity(&self, id: &str, patch: &Value) -> Result<Amenity, DomainError> {
        info!(id = %id, "Updating amenity");

        let fields = client_fields(patch, &[])?;
        self.amenities.get_or_fail(id)?;

        if let Some(name) = string_field(&fields, "name")? {
            validate_amenity_name(name).map_err(validation)?;
        }

        self.amenities.update(id, &stamped(fields))
    }

    // Places

    pub fn create_place(&self, request: CreatePlaceRequest) -> Result<Place, DomainError> {
        info!(title = %request.title, owner_id = %request.owner_id, "Creating place");

        validate_title(&request.title).map_err(validation)?;
        validate_price(request.price).map_err(validation)?;
        validate_latitude(request.latitude).map_err(validation)?;
        validate_longitude(request.longitude).map_err(validation)?;

        let _guard = self.lock_writes();

        if !self.users.exists(&request.owner_id) {
            return Err(DomainError::not_found(format!(
                "Owner '{}' not found",
                request.owner_id
            )));
        }
        self.ensure_amenities_exist(&request.amenity_ids)?;

        let mut place = Place::new(
            request.title,
            request.price,
            request.latitude,
            request.longitude,
            request.owner_id,
        )
        .with_amenity_ids(request.amenity_ids);

        if let Some(description) = request.description {
            place = place.with_description(description);
        }

        self.places.add(place)
    }

    pub fn get_place(&self, id: &str) -> Result<Place, DomainError> {
        self.places.get_or_fail(id)
    }

    /// Place with its owner and amenities; dangling references are skipped
    pub fn get_place_details(&self, id: &str) -> Result<PlaceDetails, DomainError> {
        let place = self.places.get_or_fail(id)?;
        let owner = self.users.get(place.owner_id());
        let amenities = place
            .amenity_ids()
            .iter()
            .filter_map(|amenity_id| self.amenities.get(amenity_id))
            .collect();

        Ok(PlaceDetails {
            place,
            owner,
            amenities,
        })
    }

    pub fn list_places(&self) -> Vec<Place> {
        self.places.list_all()
    }

    /// Update a place; the owner cannot be changed
    pub fn update_place(&self, id: &str, patch: &Value) -> Result<Place, DomainError> {
        info!(id = %id, "Updating place");

        let fields = client_fields(patch, &["owner_id"])?;
        let _guard = self.lock_writes();
        self.places.get_or_fail(id)?;

        if let Some(title) = string_field(&fields, "title")? {
            validate_title(title).map_err(validation)?;
        }

        string_field(&fields, "description")?;

        if let Some(price) = number_field(&fields, "price")? {
            validate_price(price).map_err(validation)?;
        }

        if let Some(latitude) = number_field(&fields, "latitude")? {
            validate_latitude(latitude).map_err(validation)?;
        }

        if let Some(longitude) = number_field(&fields, "longitude")? {
            validate_longitude(longitude).map_err(validation)?;
        }

        if let Some(amenity_ids) = string_list_field(&fields, "amenity_ids")? {
            self.ensure_amenities_exist(&amenity_ids)?;
        }

        self.places.update(id, &stamped(fields))
    }

    pub fn reviews_for_place(&self, place_id: &str) -> Result<Vec<Review>, DomainError> {
        self.places.get_or_fail(place_id)?;
        self.reviews.find_all("place_id", &Value::from(place_id))
    }

    fn ensure_amenities_exist(&self, amenity_ids: &[String]) -> Result<(), DomainError> {
        for amenity_id in amenity_ids {
            if !self.amenities.exists(amenity_id) {
                return Err(DomainError::not_found(format!(
                    "Amenity '{}' not found",
                    amenity_id
                )));
            }
        }
        Ok(())
    }

    // Reviews

    pub fn create_review(&self, request: CreateReviewRequest) -> Result<Review, DomainError> {
        info!(user_id = %request.user_id, place_id = %request.place_id, "Creating review");

        validate_text(&request.text).map_err(validation)?;
        validate_rating(request.rating).map_err(validation)?;

        let _guard = self.lock_writes();

        if !self.users.exists(&request.user_id) {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                request.user_id
            )));
        }

        if !self.places.exists(&request.place_id) {
            return Err(DomainError::not_found(format!(
                "Place '{}' not found",
                request.place_id
            )));
        }

        self.reviews.add(Review::new(
            request.text,
            request.rating,
            request.user_id,
            request.place_id,
        ))
    }

    pub fn get_review(&self, id: &str) -> Result<Review, DomainError> {
        self.reviews.get_or_fail(id)
    }

    pub fn list_reviews(&self) -> Vec<Review> {
        self.reviews.list_all()
    }

    /// Update a review; only the text and rating can change
    pub fn update_review(&self, id: &str, patch: &Value) -> Result<Review, DomainError> {
        info!(id = %id, "Updating review");

        let fields = client_fields(patch, &["user_id", "place_id"])?;
        self.reviews.get_or_fail(id)?;

        if let Some(text) = string_field(&fields, "text")? {
            validate_text(text).map_err(validation)?;
        }

        if let Some(rating) = fields.get("rating") {
            let rating = rating
                .as_i64()
                .ok_or_else(|| DomainError::validation("'rating' must be an integer"))?;
            validate_rating(rating).map_err(validation)?;
        }

        self.reviews.update(id, &stamped(fields))
    }

    pub fn delete_review(&self, id: &str) -> Result<(), DomainError> {
        info!(id = %id, "Deleting review");

        if !self.reviews.delete(id) {
            return Err(DomainError::not_found(format!(
                "Review with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    /// Load a small demo data set
    pub fn seed(&self) -> Result<(), DomainError> {
        let owner = self.create_user(CreateUserRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@hbnb.io".to_string(),
            is_admin: true,
        })?;

        let wifi = self.create_amenity(CreateAmenityRequest {
            name: "Wi-Fi".to_string(),
        })?;
        let parking = self.create_amenity(CreateAmenityRequest {
            name: "Parking".to_string(),
        })?;

        let place = self.create_place(CreatePlaceRequest {
            title: "Seaside cottage".to_string(),
            description: Some("Two rooms, sea view".to_string()),
            price: 120.0,
            latitude: 43.2965,
            longitude: 5.3698,
            owner_id: owner.id().to_string(),
            amenity_ids: vec![wifi.id().to_string(), parking.id().to_string()],
        })?;

        let guest = self.create_user(CreateUserRequest {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            email: "alan@hbnb.io".to_string(),
            is_admin: false,
        })?;

        self.create_review(CreateReviewRequest {
            text: "Lovely stay".to_string(),
            rating: 5,
            user_id: guest.id().to_string(),
            place_id: place.id().to_string(),
        })?;

        debug!(counts = ?self.counts(), "Seeded demo data");
        Ok(())
    }
}

fn validation(error: impl std::fmt::Display) -> DomainError {
    DomainError::validation(error.to_string())
}

/// Patch fields a client may write: timestamps and `immutable` keys are dropped
fn client_fields(patch: &Value, immutable: &[&str]) -> Result<Map<String, Value>, DomainError> {
    let mut fields = patch_fields(patch)?.clone();

    for name in TIMESTAMP_FIELDS.iter().chain(immutable) {
        fields.remove(*name);
    }

    Ok(fields)
}

/// Patch with `updated_at` set to now
fn stamped(mut fields: Map<String, Value>) -> Value {
    fields.insert(
        "updated_at".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
    Value::Object(fields)
}

fn string_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<Option<&'a str>, DomainError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(DomainError::validation(format!("'{}' must be a string", name))),
    }
}

fn number_field(fields: &Map<String, Value>, name: &str) -> Result<Option<f64>, DomainError> {
    match fields.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| DomainError::validation(format!("'{}' must be a number", name))),
    }
}

fn string_list_field(
    fields: &Map<String, Value>,
    name: &str,
) -> Result<Option<Vec<String>>, DomainError> {
    match fields.get(name) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|_| DomainError::validation(format!("'{}' must be a list of strings", name))),
    }
}
