//! Storage domain - Generic repository abstraction

mod entity;
mod key;
mod repository;

pub use entity::{assign, to_attribute, EntityBase, StorageEntity};
pub use key::{EntityKey, IntoEntityKey};
pub use repository::{
    attribute_matches, ensure_attribute_name, entity_key, not_found, patch_fields, Repository,
    RepositoryExt,
};
