// Template context structures for Askama templates and JSON API payloads.

mod api;
mod home;
mod slide;

pub use self::api::{ApiCourse, ApiErrorResponse, ApiSlideResponse, ApiSlidesResponse};
pub use self::home::{CourseCard, HomeTemplate};
pub use self::slide::{MenuItem, SlideView, SlideViewerTemplate};

/// Context shared by every page. Templates access it as `ctx.app_name`.
pub struct PageContext {
    pub app_name: String,
}

impl PageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }
}
