use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::db::DbPool;
use crate::dto::api::{AdvocatesQuery, AdvocatesQueryParams};
use crate::repository::advocate::DieselAdvocateRepository;
use crate::services::api::search_advocates;

#[get("/advocates")]
pub async fn api_advocates(
    params: web::Query<AdvocatesQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselAdvocateRepository::new(&pool);
    let query: AdvocatesQuery = params.into_inner().into();

    match search_advocates(&repo, query) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to search advocates: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
