use actix_web::{Responder, get, web};
use log::error;
use tera::{Context, Tera};

use crate::db::DbPool;
use crate::dto::api::{AdvocatesQuery, AdvocatesQueryParams};
use crate::dto::main::SearchPageState;
use crate::repository::advocate::DieselAdvocateRepository;
use crate::routes::render_template;
use crate::services::main::load_index_page;

#[get("/")]
pub async fn show_index(
    params: web::Query<AdvocatesQueryParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // The page always shows 10 rows; only q, minYears and page come from
    // the URL.
    let query: AdvocatesQuery = params.into_inner().into();
    let state: SearchPageState = query.into();

    let repo = DieselAdvocateRepository::new(&pool);
    let page = match load_index_page(&repo, state) {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to load advocates: {e}");
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("page", &page);
    context.insert("current_page", "index");

    render_template(&tera, "main/index.html", &context)
}
