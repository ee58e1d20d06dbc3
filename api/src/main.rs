use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use ak_core::repositories::InMemoryRevocationRegistry;

use ak_api::app::{self, create_app_state};
use ak_api::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AuthKit API Server");

    let config = Config::from_env();
    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(create_app_state(&config));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(app::configure::<InMemoryRevocationRegistry>)
    })
    .bind(bind_address)?
    .run()
    .await
}
