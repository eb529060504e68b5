use serde::{Deserialize, Serialize};

/// One navigable unit of a course deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: i64,
    pub topic: String,
    pub description: String,
    /// Markdown blocks; `None` means the slide has no narrative section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Highlight language for `code`. Carried on every slide, only read when `code` is set.
    pub language: String,
}

impl Slide {
    /// The code sample paired with its language, if the slide has one.
    pub fn code_sample(&self) -> Option<(&str, &str)> {
        self.code
            .as_deref()
            .map(|code| (code, self.language.as_str()))
    }

    pub fn content_blocks(&self) -> &[String] {
        self.content.as_deref().unwrap_or(&[])
    }
}

/// A category's deck, in authored navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSlides {
    pub category: String,
    pub slides: Vec<Slide>,
}
