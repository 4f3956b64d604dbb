//! Route handlers and small helpers shared between them.

use actix_web::HttpResponse;
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Renders a Tera template to an HTML response, mapping template failures
/// to a bare 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
