pub mod config_error;
pub mod get_started_modal;
pub mod icons;
pub mod landing;
pub mod modal;
