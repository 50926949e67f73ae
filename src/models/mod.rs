pub mod profile_pointer;
pub mod uploaded_file;
