pub mod storage;
pub mod upload_services;
