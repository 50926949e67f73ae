// src/handlers/profile_photo_handlers.rs
use std::path::{Component, Path, PathBuf};

use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpMessage, HttpRequest, HttpResponse, Responder, ResponseError};
use futures::TryStreamExt;
use log::{info, warn};

use crate::dtos::profile_photo_dtos::{ErrorOut, ProfilePhotoOut};
use crate::services::upload_services::UploadError;
use crate::AppState;

/// Multipart field that carries the image.
pub const PHOTO_FIELD: &str = "photo";

impl ResponseError for UploadError {
    fn status_code(&self) -> StatusCode {
        match self {
            UploadError::NoFile | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
            UploadError::Io(_) | UploadError::Repo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            UploadError::NoFile | UploadError::Multipart(_) => self.to_string(),
            // details are logged by the service, not returned
            UploadError::Io(_) | UploadError::Repo(_) => "Failed to store profile photo".to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorOut::new(message))
    }
}

/// GET /api/profile-photo
/// Current profile photo path, or null when none is set.
#[get("/api/profile-photo")]
pub async fn get_profile_photo(state: web::Data<AppState>) -> impl Responder {
    let current = state.pointer_repo.read().await;
    HttpResponse::Ok().json(ProfilePhotoOut {
        profile_image: current,
    })
}

/// POST /api/upload-profile
/// Store the `photo` file and make it the current profile photo.
#[post("/api/upload-profile")]
pub async fn upload_profile(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, UploadError> {
    if !is_multipart(&req) {
        return Err(UploadError::NoFile);
    }

    let (original_name, bytes) = read_photo_field(payload).await?.ok_or(UploadError::NoFile)?;
    let pointer = state.upload_service.store(&original_name, &bytes).await?;

    info!(
        "profile photo updated to {}",
        pointer.profile_image.as_deref().unwrap_or_default()
    );
    Ok(HttpResponse::Ok().json(ProfilePhotoOut::from(pointer)))
}

/// GET /public/{path}
/// Read-only access to the public directory (uploads and the pointer record).
#[get("/public/{path:.*}")]
pub async fn serve_public_file(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let requested = path.into_inner();

    let Some(relative) = sanitize_public_path(&requested) else {
        warn!("rejected public path {:?}", requested);
        return not_found();
    };
    let file_path = state.layout.public_dir.join(&relative);

    match tokio::fs::read(&file_path).await {
        Ok(data) => HttpResponse::Ok()
            .content_type(content_type_for(&relative))
            .body(data),
        Err(_) => not_found(),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorOut::new("File not found"))
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.content_type()
        .to_ascii_lowercase()
        .starts_with("multipart/form-data")
}

/// Pull the first `photo` file out of the form. Every other field, and any
/// further `photo` file, is read to the end and dropped.
async fn read_photo_field(mut payload: Multipart) -> Result<Option<(String, Vec<u8>)>, UploadError> {
    let mut photo: Option<(String, Vec<u8>)> = None;

    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        let file_name = if photo.is_none() && field.name() == Some(PHOTO_FIELD) {
            field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            if file_name.is_some() {
                bytes.extend_from_slice(&chunk);
            }
        }

        if let Some(name) = file_name {
            photo = Some((name, bytes));
        }
    }

    Ok(photo)
}

fn multipart_error(e: actix_multipart::MultipartError) -> UploadError {
    UploadError::Multipart(e.to_string())
}

/// Accept only plain relative paths below the public directory.
fn sanitize_public_path(raw: &str) -> Option<PathBuf> {
    let path = Path::new(raw);
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

fn content_type_for(path: &Path) -> mime::Mime {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        Some("bmp") => mime::IMAGE_BMP,
        Some("svg") => mime::IMAGE_SVG,
        Some("json") => mime::APPLICATION_JSON,
        Some("webp") => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        Some("ico") => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

#[cfg(test)]
#[path = "profile_photo_handlers_tests.rs"]
mod tests;
