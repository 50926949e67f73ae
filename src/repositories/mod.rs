pub mod profile_pointer_repo;
