use serde::{Deserialize, Serialize};

/// A course card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Material icon ligature shown on the card.
    pub icon: String,
    pub description: String,
}

/// Shape of `data/courses.json`.
#[derive(Debug, Deserialize)]
pub struct CourseList {
    pub courses: Vec<Course>,
}
