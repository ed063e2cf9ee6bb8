//! Domain layer - Core entities, repository abstraction and errors

pub mod amenity;
pub mod error;
pub mod place;
pub mod review;
pub mod storage;
pub mod user;

pub use amenity::Amenity;
pub use error::DomainError;
pub use place::Place;
pub use review::Review;
pub use storage::{EntityBase, EntityKey, IntoEntityKey, Repository, RepositoryExt, StorageEntity};
pub use user::User;
