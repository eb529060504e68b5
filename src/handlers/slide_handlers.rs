use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::slide::SlideViewer;
use crate::templates_structs::{PageContext, SlideViewerTemplate};

/// Zero-based index from the one-based `slide` query parameter.
/// Missing, non-numeric, or zero values yield `None`.
pub fn requested_index(query: &HashMap<String, String>) -> Option<usize> {
    query
        .get("slide")
        .and_then(|s| s.trim().parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
}

/// GET /slides/{category} - Slide viewer. `?slide=N` jumps to the N-th slide;
/// an out-of-range N leaves the viewer on the first slide.
pub async fn view(
    catalog: web::Data<Catalog>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let category = path.into_inner();
    let mut viewer = SlideViewer::open(catalog.get_ref(), &category);

    if let Some(index) = requested_index(&query) {
        if !viewer.navigator_mut().jump_to(index) {
            log::debug!("Ignoring slide {} for '{category}'", index + 1);
        }
    }

    let tmpl = SlideViewerTemplate::build(
        PageContext::new(&config.app_name),
        viewer.category(),
        catalog.display_name(viewer.category()),
        viewer.navigator(),
    )?;
    render(tmpl)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(value: &str) -> HashMap<String, String> {
        HashMap::from([("slide".to_string(), value.to_string())])
    }

    #[test]
    fn slide_param_is_one_based() {
        assert_eq!(requested_index(&query("1")), Some(0));
        assert_eq!(requested_index(&query("4")), Some(3));
        assert_eq!(requested_index(&query(" 2 ")), Some(1));
    }

    #[test]
    fn unusable_slide_params_are_none() {
        assert_eq!(requested_index(&HashMap::new()), None);
        assert_eq!(requested_index(&query("0")), None);
        assert_eq!(requested_index(&query("-1")), None);
        assert_eq!(requested_index(&query("two")), None);
    }
}
