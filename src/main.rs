// src/main.rs
mod config;
mod dtos;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};

use crate::config::AppConfig;
use crate::repositories::profile_pointer_repo::ProfilePointerRepo;
use crate::services::storage::StorageLayout;
use crate::services::upload_services::UploadService;

#[derive(Clone)]
pub struct AppState {
    pub layout: StorageLayout,
    pub pointer_repo: ProfilePointerRepo,
    pub upload_service: UploadService,
}

impl AppState {
    pub fn new(layout: StorageLayout) -> Self {
        let pointer_repo = ProfilePointerRepo::new(&layout.data_file);
        let upload_service = UploadService::new(&layout.uploads_dir, pointer_repo.clone());
        Self {
            layout,
            pointer_repo,
            upload_service,
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let layout = StorageLayout::from_public_dir(&cfg.public_dir);
    if let Err(e) = layout.ensure_dirs() {
        error!("Failed to prepare storage: {}", e);
        std::process::exit(1);
    }

    let state = web::Data::new(AppState::new(layout));
    let allowed_origins = cfg.allowed_origins.clone();

    info!("Serving public files from {}", cfg.public_dir.display());
    info!("Profile pointer record at {}", state.pointer_repo.data_file().display());

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["content-type", "accept", "x-requested-with"])
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(cfg.bind_address())?;

    info!("Server running at http://localhost:{}", cfg.port);

    server.run().await
}
