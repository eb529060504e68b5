pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod templates_structs;

use actix_web::web;

/// Register every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home::index))
        .route("/health", web::get().to(handlers::home::health))
        .route("/slides/{category}", web::get().to(handlers::slide_handlers::view))
        .service(web::scope("/api/v1").configure(handlers::api_v1::configure));
}
