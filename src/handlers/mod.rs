pub mod profile_photo_handlers;
