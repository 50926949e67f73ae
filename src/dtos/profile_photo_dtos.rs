// src/dtos/profile_photo_dtos.rs
use serde::Serialize;

use crate::models::profile_pointer::ProfilePointer;

/// Body of both the read and the upload responses.
#[derive(Debug, Serialize)]
pub struct ProfilePhotoOut {
    #[serde(rename = "profileImage")]
    pub profile_image: Option<String>,
}

impl From<ProfilePointer> for ProfilePhotoOut {
    fn from(pointer: ProfilePointer) -> Self {
        Self {
            profile_image: pointer.current(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}

impl ErrorOut {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
