// src/routes.rs
use actix_web::web;

use crate::handlers::profile_photo_handlers::{get_profile_photo, serve_public_file, upload_profile};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_profile_photo) // GET /api/profile-photo
        .service(upload_profile) // POST /api/upload-profile
        .service(serve_public_file); // GET /public/{path}
}
