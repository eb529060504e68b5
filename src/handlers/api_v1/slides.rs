use actix_web::{web, HttpResponse};

use crate::catalog::Catalog;
use crate::models::slide::Navigator;
use crate::templates_structs::{ApiErrorResponse, ApiSlideResponse, ApiSlidesResponse};

/// GET /api/v1/slides/{category} - Whole deck. Unknown categories return an empty deck.
pub async fn deck(catalog: web::Data<Catalog>, path: web::Path<String>) -> HttpResponse {
    let category = path.into_inner();
    let slides = catalog.resolve(&category);
    HttpResponse::Ok().json(ApiSlidesResponse {
        category: &category,
        total: slides.len(),
        slides,
    })
}

/// GET /api/v1/slides/{category}/{index} - One slide by zero-based index.
pub async fn read(catalog: web::Data<Catalog>, path: web::Path<(String, usize)>) -> HttpResponse {
    let (category, index) = path.into_inner();
    let mut nav = Navigator::new(catalog.resolve(&category));

    let slide = match nav.jump_to(index).then(|| nav.current_slide()).flatten() {
        Some(slide) => slide,
        None => {
            return HttpResponse::NotFound().json(ApiErrorResponse {
                error: format!("No slide {index} in category '{category}'"),
            });
        }
    };

    HttpResponse::Ok().json(ApiSlideResponse {
        category: &category,
        index: nav.current_index(),
        total: nav.total_count(),
        has_previous: nav.has_previous(),
        has_next: nav.has_next(),
        slide,
    })
}
