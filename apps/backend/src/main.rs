use actix_web::{web, App, HttpServer};
use trumps_backend::config::db::{DbKind, RuntimeEnv};
use trumps_backend::infra::state::build_state;
use trumps_backend::middleware::{RequestTrace, TraceSpan};
use trumps_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            tracing::error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let db_kind = match std::env::var("TRUMPS_DB")
        .unwrap_or_else(|_| "postgres".to_string())
        .parse::<DbKind>()
    {
        Ok(kind) => kind,
        Err(e) => {
            tracing::error!(error = %e, "Invalid TRUMPS_DB");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %host, port, ?db_kind, "Starting trumps backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
