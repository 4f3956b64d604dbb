use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(test)]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter and pagination parameters for advocate listings.
///
/// An empty query matches every advocate. Results are always returned in
/// `id` ascending order so that offset pagination is stable.
#[derive(Debug, Clone, Default)]
pub struct AdvocateListQuery {
    pub search: Option<String>,
    pub min_years: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text term matched against name, city, degree, phone and the
    /// serialized specialties text. Blank terms are ignored.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Keep only advocates with at least `years` years of experience.
    /// Zero or negative thresholds are ignored.
    pub fn min_years(mut self, years: i32) -> Self {
        self.min_years = (years > 0).then_some(years);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination {
            page: page.max(1),
            per_page: per_page.max(1),
        });
        self
    }
}

pub trait AdvocateReader {
    fn get_advocate_by_id(&self, id: i32) -> RepositoryResult<Option<Advocate>>;
    /// Returns the total number of advocates matching the query filters
    /// together with the requested page of records.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
}

pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}
