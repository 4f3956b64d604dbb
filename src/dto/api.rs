//! Request and response shapes for the `/api/advocates` endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Raw query string parameters as sent by the caller.
///
/// Numeric parameters arrive as strings so that malformed values can fall
/// back to defaults instead of failing deserialization with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct AdvocatesQueryParams {
    pub q: Option<String>,
    #[serde(rename = "minYears")]
    pub min_years: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Parsed search parameters with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvocatesQuery {
    pub search_term: String,
    pub min_years: i32,
    pub page: usize,
    pub page_size: usize,
}

impl Default for AdvocatesQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            min_years: 0,
            page: 1,
            page_size: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl From<AdvocatesQueryParams> for AdvocatesQuery {
    fn from(params: AdvocatesQueryParams) -> Self {
        let defaults = Self::default();
        Self {
            search_term: params.q.unwrap_or_default(),
            min_years: parse_or(params.min_years, defaults.min_years, |v: i32| v >= 0),
            page: parse_or(params.page, defaults.page, |v: usize| v >= 1),
            page_size: parse_or(params.page_size, defaults.page_size, |v: usize| v >= 1),
        }
    }
}

/// Parses an optional textual parameter, falling back to `default` when the
/// value is absent, non-numeric, or rejected by `valid`.
fn parse_or<T>(value: Option<String>, default: T, valid: impl Fn(T) -> bool) -> T
where
    T: std::str::FromStr + Copy,
{
    value
        .and_then(|s| s.trim().parse::<T>().ok())
        .filter(|v| valid(*v))
        .unwrap_or(default)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl From<Advocate> for AdvocateDto {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties: advocate.specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Body of a successful `/api/advocates` response.
#[derive(Debug, Serialize)]
pub struct AdvocatesResponse {
    pub data: Vec<AdvocateDto>,
    pub pagination: PaginationDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        q: Option<&str>,
        min_years: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> AdvocatesQueryParams {
        AdvocatesQueryParams {
            q: q.map(String::from),
            min_years: min_years.map(String::from),
            page: page.map(String::from),
            page_size: page_size.map(String::from),
        }
    }

    #[test]
    fn absent_parameters_use_defaults() {
        let query: AdvocatesQuery = params(None, None, None, None).into();
        assert_eq!(query, AdvocatesQuery::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn non_numeric_parameters_fall_back_to_defaults() {
        let query: AdvocatesQuery =
            params(Some("md"), Some("abc"), Some("x2"), Some("")).into();
        assert_eq!(query.search_term, "md");
        assert_eq!(query.min_years, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn out_of_range_parameters_fall_back_to_defaults() {
        let query: AdvocatesQuery =
            params(None, Some("-3"), Some("0"), Some("0")).into();
        assert_eq!(query.min_years, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn valid_parameters_are_parsed() {
        let query: AdvocatesQuery =
            params(Some("boston"), Some("5"), Some("3"), Some("25")).into();
        assert_eq!(query.search_term, "boston");
        assert_eq!(query.min_years, 5);
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = AdvocatesResponse {
            data: vec![],
            pagination: PaginationDto {
                total: 0,
                page: 1,
                page_size: 10,
                total_pages: 0,
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["pagination"]["pageSize"], 10);
        assert_eq!(json["pagination"]["totalPages"], 0);
    }
}
