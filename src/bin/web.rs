//! Bracket web service: JSON API consumed by the Interclasse bracket page.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `config` for the environment variables.

use actix_web::{web::Data, App, HttpServer};
use interclasse_bracket::{api, AppConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };
    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} (sports: {})",
        bind.0,
        bind.1,
        config.sports.join(", ")
    );

    let state = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
