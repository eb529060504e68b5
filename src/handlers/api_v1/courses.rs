use actix_web::{web, HttpResponse};

use crate::catalog::Catalog;
use crate::templates_structs::ApiCourse;

/// GET /api/v1/courses - Course cards in home-page order, with deck sizes.
pub async fn list(catalog: web::Data<Catalog>) -> HttpResponse {
    let items: Vec<ApiCourse> = catalog
        .courses()
        .iter()
        .map(|c| ApiCourse {
            id: c.id.clone(),
            name: c.name.clone(),
            icon: c.icon.clone(),
            description: c.description.clone(),
            slide_count: catalog.resolve(&c.id).len(),
        })
        .collect();
    HttpResponse::Ok().json(items)
}
