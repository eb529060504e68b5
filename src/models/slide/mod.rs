mod navigator;
mod types;
mod viewer;

pub use navigator::Navigator;
pub use types::{CourseSlides, Slide};
pub use viewer::SlideViewer;
