use serde::Serialize;

use crate::models::slide::Slide;

/// Course card for `GET /api/v1/courses`.
#[derive(Serialize, Debug, Clone)]
pub struct ApiCourse {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub slide_count: usize,
}

/// Whole deck for `GET /api/v1/slides/{category}`.
#[derive(Serialize, Debug)]
pub struct ApiSlidesResponse<'a> {
    pub category: &'a str,
    pub total: usize,
    pub slides: &'a [Slide],
}

/// One slide for `GET /api/v1/slides/{category}/{index}`.
#[derive(Serialize, Debug)]
pub struct ApiSlideResponse<'a> {
    pub category: &'a str,
    pub index: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub slide: &'a Slide,
}

#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
}
