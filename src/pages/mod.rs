pub mod data;
pub mod home;
pub mod not_found;
pub mod orbit;
