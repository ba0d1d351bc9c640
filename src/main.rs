use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use house_price_predictor::config::ServerConfig;
use house_price_predictor::inference::PriceModel;
use house_price_predictor::routes;
use log::{error, info};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let config = ServerConfig::from_env();

    // The service must not come up without its model artifact.
    let model = match PriceModel::load(&config.model_path) {
        Ok(model) => Arc::new(model),
        Err(err) => {
            error!(
                "cannot start without model artifact '{}': {}",
                config.model_path, err
            );
            std::process::exit(1);
        }
    };

    let model_data = web::Data::new(model);
    let bind_address = config.bind_address();
    let port = config.port;

    info!("Starting house price prediction service");
    info!("Model artifact: {}", config.model_path);
    info!("Listening on http://{}", bind_address);
    info!("Workers: {}", config.workers);
    info!("Endpoints:");
    info!("  GET  /         - prediction form");
    info!("  POST /predict  - price prediction");
    info!("  GET  /health   - liveness probe");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&format!("http://localhost:{}", port))
            .allowed_origin(&format!("http://127.0.0.1:{}", port))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors)
            .app_data(model_data.clone())
            .configure(routes::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .workers(config.workers)
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
