pub mod courses;
pub mod slides;

use actix_web::web;

/// Configure API v1 routes. Everything here is read-only JSON.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/courses", web::get().to(courses::list));
    cfg.service(
        web::scope("/slides")
            .route("/{category}", web::get().to(slides::deck))
            .route("/{category}/{index}", web::get().to(slides::read))
    );
}
