pub mod course;
pub mod slide;
