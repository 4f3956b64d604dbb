use crate::dto::api::{AdvocatesQuery, AdvocatesResponse, PaginationDto};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceError, ServiceResult};

/// Runs a paginated advocate search and shapes the JSON response.
///
/// `total_pages` is `ceil(total / page_size)`, so an empty result has zero
/// pages. A page past the end returns an empty `data` list while `total`
/// and `total_pages` still describe the full filtered set.
pub fn search_advocates<R>(repo: &R, query: AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let list_query = AdvocateListQuery::new()
        .search(query.search_term)
        .min_years(query.min_years)
        .paginate(query.page, query.page_size);

    let (total, advocates) = repo.list_advocates(list_query).map_err(ServiceError::from)?;

    Ok(AdvocatesResponse {
        data: advocates.into_iter().map(Into::into).collect(),
        pagination: PaginationDto {
            total,
            page: query.page,
            page_size: query.page_size,
            total_pages: total.div_ceil(query.page_size),
        },
    })
}
