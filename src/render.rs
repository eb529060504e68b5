//! Markdown to HTML for slide bodies.

use crate::errors::AppError;
use crate::models::slide::Slide;

fn options() -> markdown::Options {
    markdown::Options::gfm()
}

pub fn markdown_html(text: &str) -> Result<String, AppError> {
    markdown::to_html_with_options(text, &options()).map_err(|e| AppError::Markdown(e.to_string()))
}

/// Wrap a code sample in a fence tagged with its language. The fence is one
/// backtick longer than the longest backtick run inside the sample.
pub fn code_fence(code: &str, language: &str) -> String {
    let longest_run = code
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);
    format!("{fence}{language}\n{code}\n{fence}")
}

/// Rendered pieces of a slide body, ready for the template.
#[derive(Debug, Default)]
pub struct RenderedSlide {
    pub content_html: Vec<String>,
    pub code_html: Option<String>,
}

pub fn render_slide(slide: &Slide) -> Result<RenderedSlide, AppError> {
    let content_html = slide
        .content_blocks()
        .iter()
        .map(|block| markdown_html(block))
        .collect::<Result<Vec<_>, _>>()?;
    let code_html = slide
        .code_sample()
        .map(|(code, language)| markdown_html(&code_fence(code, language)))
        .transpose()?;
    Ok(RenderedSlide {
        content_html,
        code_html,
    })
}
