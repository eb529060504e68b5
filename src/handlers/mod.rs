pub mod api_v1;
pub mod home;
pub mod slide_handlers;
