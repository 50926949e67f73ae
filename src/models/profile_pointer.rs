// src/models/profile_pointer.rs
use serde::{Deserialize, Serialize};

/// The single persisted record: which upload is the current profile photo.
///
/// Serialized as `{"profileImage": "/public/uploads/..."}`, or with a `null`
/// value when no photo has been set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePointer {
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl ProfilePointer {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            profile_image: Some(path.into()),
        }
    }

    /// Current path, treating an empty string the same as no value.
    pub fn current(self) -> Option<String> {
        self.profile_image.filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_key() {
        let json = serde_json::to_value(ProfilePointer::new("/public/uploads/a.png")).unwrap();
        assert_eq!(json, serde_json::json!({ "profileImage": "/public/uploads/a.png" }));
    }

    #[test]
    fn missing_or_empty_value_is_no_profile() {
        let missing: ProfilePointer = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.current(), None);

        let empty: ProfilePointer = serde_json::from_str(r#"{"profileImage": ""}"#).unwrap();
        assert_eq!(empty.current(), None);
    }
}
