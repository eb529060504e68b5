use actix_web::{App, HttpServer, middleware, web};

use training_deck::catalog::Catalog;
use training_deck::config::AppConfig;
use training_deck::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    let catalog = web::Data::new(Catalog::builtin()?);
    log::info!(
        "Loaded {} slides in {} decks for {} courses",
        catalog.slide_count(),
        catalog.deck_count(),
        catalog.courses().len()
    );

    let bind_addr = config.bind_addr();
    log::info!("Starting server at http://{}:{}", bind_addr.0, bind_addr.1);

    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(catalog.clone())
            .app_data(config.clone())
            // Static files
            .service(actix_files::Files::new("/static", &config.static_dir))
            .configure(training_deck::configure)
            // Unknown paths land on the course grid (must be registered last)
            .default_service(web::to(handlers::home::redirect_home))
    })
    .bind(bind_addr)?
    .run()
    .await
}
