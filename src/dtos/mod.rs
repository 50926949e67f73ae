pub mod profile_photo_dtos;
