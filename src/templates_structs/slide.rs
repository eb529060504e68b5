use askama::Template;

use super::PageContext;
use crate::errors::AppError;
use crate::models::slide::{Navigator, Slide};
use crate::render::render_slide;

#[derive(Template)]
#[template(path = "slides.html")]
pub struct SlideViewerTemplate {
    pub ctx: PageContext,
    pub category: String,
    pub course_name: String,
    /// One-based position of the current slide.
    pub position: usize,
    pub total: usize,
    pub slide: Option<SlideView>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub menu: Vec<MenuItem>,
}

/// The current slide with its markdown already rendered.
pub struct SlideView {
    pub topic: String,
    pub description: String,
    pub content_html: Vec<String>,
    pub code_html: Option<String>,
}

impl SlideView {
    pub fn build(slide: &Slide) -> Result<Self, AppError> {
        let rendered = render_slide(slide)?;
        Ok(Self {
            topic: slide.topic.clone(),
            description: slide.description.clone(),
            content_html: rendered.content_html,
            code_html: rendered.code_html,
        })
    }
}

/// Entry in the "Quick Navigation" menu.
pub struct MenuItem {
    pub number: usize,
    pub topic: String,
    pub url: String,
    pub is_active: bool,
}

/// Link to a slide by zero-based index. The URL carries the one-based number.
pub fn slide_url(category: &str, index: usize) -> String {
    format!("/slides/{category}?slide={}", index + 1)
}

impl SlideViewerTemplate {
    pub fn build(
        ctx: PageContext,
        category: &str,
        course_name: String,
        nav: &Navigator<'_>,
    ) -> Result<Self, AppError> {
        let slide = nav.current_slide().map(SlideView::build).transpose()?;

        let mut prev = *nav;
        let prev_url = prev.previous().then(|| slide_url(category, prev.current_index()));
        let mut next = *nav;
        let next_url = next.next().then(|| slide_url(category, next.current_index()));

        let menu = nav
            .slides()
            .iter()
            .enumerate()
            .map(|(i, s)| MenuItem {
                number: i + 1,
                topic: s.topic.clone(),
                url: slide_url(category, i),
                is_active: i == nav.current_index(),
            })
            .collect();

        Ok(Self {
            ctx,
            category: category.to_string(),
            course_name,
            position: nav.current_index() + 1,
            total: nav.total_count(),
            slide,
            prev_url,
            next_url,
            menu,
        })
    }
}
