//! Entity keys and identifier normalization

use std::fmt;

use serde_json::Value;
use uuid::Uuid;

/// Normalized string identifier of a stored entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(String);

impl EntityKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntityKey> for String {
    fn from(key: EntityKey) -> Self {
        key.0
    }
}

/// Conversion of caller-supplied identifiers into their string key form
///
/// `None` stands for an absent identifier. Lookups with an absent identifier
/// are soft misses, never errors.
pub trait IntoEntityKey {
    fn into_entity_key(self) -> Option<EntityKey>;
}

impl IntoEntityKey for EntityKey {
    fn into_entity_key(self) -> Option<EntityKey> {
        Some(self)
    }
}

impl IntoEntityKey for &EntityKey {
    fn into_entity_key(self) -> Option<EntityKey> {
        Some(self.clone())
    }
}

impl IntoEntityKey for &str {
    fn into_entity_key(self) -> Option<EntityKey> {
        Some(EntityKey::new(self))
    }
}

impl IntoEntityKey for String {
    fn into_entity_key(self) -> Option<EntityKey> {
        Some(EntityKey(self))
    }
}

impl IntoEntityKey for &String {
    fn into_entity_key(self) -> Option<EntityKey> {
        Some(EntityKey::new(self.as_str()))
    }
}

impl<T: IntoEntityKey> IntoEntityKey for Option<T> {
    fn into_entity_key(self) -> Option<EntityKey> {
        self.and_then(IntoEntityKey::into_entity_key)
    }
}

/// JSON scalars normalize to their textual form; null and containers have no key.
impl IntoEntityKey for &Value {
    fn into_entity_key(self) -> Option<EntityKey> {
        match self {
            Value::String(s) => Some(EntityKey::new(s.as_str())),
            Value::Number(n) => Some(EntityKey(n.to_string())),
            Value::Bool(b) => Some(EntityKey(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl IntoEntityKey for Value {
    fn into_entity_key(self) -> Option<EntityKey> {
        (&self).into_entity_key()
    }
}

macro_rules! into_entity_key_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoEntityKey for $ty {
                fn into_entity_key(self) -> Option<EntityKey> {
                    Some(EntityKey(self.to_string()))
                }
            }
        )*
    };
}

into_entity_key_via_display!(Uuid, u32, u64, usize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_like_keys() {
        assert_eq!("u1".into_entity_key(), Some(EntityKey::new("u1")));
        assert_eq!(String::from("u1").into_entity_key(), Some(EntityKey::new("u1")));
        assert_eq!((&String::from("u1")).into_entity_key(), Some(EntityKey::new("u1")));
    }

    #[test]
    fn test_numeric_keys_normalize_to_text() {
        assert_eq!(42u64.into_entity_key().unwrap().as_str(), "42");
        assert_eq!((-7i32).into_entity_key().unwrap().as_str(), "-7");
    }

    #[test]
    fn test_uuid_key_uses_hyphenated_form() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(
            id.into_entity_key().unwrap().as_str(),
            "67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
    }

    #[test]
    fn test_absent_keys() {
        assert_eq!(None::<&str>.into_entity_key(), None);
        assert_eq!(json!(null).into_entity_key(), None);
        assert_eq!(json!({"id": "x"}).into_entity_key(), None);
    }

    #[test]
    fn test_json_scalar_keys() {
        assert_eq!(json!("abc").into_entity_key().unwrap().as_str(), "abc");
        assert_eq!(json!(12).into_entity_key().unwrap().as_str(), "12");
        assert_eq!(json!(true).into_entity_key().unwrap().as_str(), "true");
    }
}
