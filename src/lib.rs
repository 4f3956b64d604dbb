use std::collections::HashMap;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::routes::api::api_advocates;
use crate::routes::main::show_index;
use crate::services::main::format_phone_number;

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Tera filter rendering a stored phone value for display.
fn phone_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let raw = match value {
        tera::Value::String(s) => s.clone(),
        tera::Value::Number(n) => n.to_string(),
        _ => return Err(tera::Error::msg("phone filter expects a string or number")),
    };
    Ok(tera::Value::String(format_phone_number(&raw)))
}

/// Builds the Tera instance used by the HTML routes.
pub fn build_templates(templates_dir: &str) -> tera::Result<Tera> {
    let mut tera = Tera::new(templates_dir)?;
    tera.register_filter("phone", phone_filter);
    Ok(tera)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let tera = build_templates(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(web::scope("/api").service(api_advocates))
            .service(show_index)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(tera.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
