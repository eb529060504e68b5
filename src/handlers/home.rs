use actix_web::{web, HttpResponse};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{CourseCard, HomeTemplate, PageContext};

/// Course grid.
pub async fn index(
    catalog: web::Data<Catalog>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let tmpl = HomeTemplate {
        ctx: PageContext::new(&config.app_name),
        courses: CourseCard::all(&catalog),
    };
    render(tmpl)
}

/// Everything the router doesn't know goes back to the course grid.
pub async fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}
