//! DTOs shaped for the directory search page.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;
use crate::dto::api::AdvocatesQuery;
use crate::pagination::Paginated;

/// The complete filter state of the search page for one request.
///
/// The state is built once from the incoming query string, rendered, and
/// serialized back into every navigation link, so each state change is
/// exactly one new request and there is never a stale in-flight result to
/// reconcile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPageState {
    #[serde(rename = "q")]
    pub search_term: String,
    #[serde(rename = "minYears")]
    pub min_years: i32,
    pub page: usize,
}

impl Default for SearchPageState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            min_years: 0,
            page: 1,
        }
    }
}

impl From<AdvocatesQuery> for SearchPageState {
    fn from(query: AdvocatesQuery) -> Self {
        Self {
            search_term: query.search_term,
            min_years: query.min_years,
            page: query.page,
        }
    }
}

impl SearchPageState {
    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || self.min_years > 0
    }

    /// The same filters pointed at another page.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Clears the search term and the experience threshold. The page is
    /// deliberately left untouched to keep the historical reset behavior.
    pub fn reset(&self) -> Self {
        Self {
            page: self.page,
            ..Self::default()
        }
    }

    /// URL-encoded query string carrying the full state.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

/// One entry of the rendered pagination strip. `number` is `None` for an
/// elided gap; `url` is `None` for gaps and for the current page.
#[derive(Debug, Serialize)]
pub struct PageLink {
    pub number: Option<usize>,
    pub url: Option<String>,
    pub current: bool,
}

/// Aggregated data required to render the search page.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub advocates: Paginated<Advocate>,
    pub total: usize,
    pub state: SearchPageState,
    pub search_message: String,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub reset_url: String,
    pub page_links: Vec<PageLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_filters_but_keeps_page() {
        let state = SearchPageState {
            search_term: "boston".to_string(),
            min_years: 5,
            page: 3,
        };
        let reset = state.reset();
        assert_eq!(reset.search_term, "");
        assert_eq!(reset.min_years, 0);
        assert_eq!(reset.page, 3);
    }

    #[test]
    fn query_string_round_trips_through_form_encoding() {
        let state = SearchPageState {
            search_term: "new york".to_string(),
            min_years: 2,
            page: 4,
        };
        let encoded = state.to_query_string();
        assert_eq!(encoded, "q=new+york&minYears=2&page=4");

        let decoded: SearchPageState = serde_html_form::from_str(&encoded).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn with_page_keeps_filters_and_clamps() {
        let state = SearchPageState {
            search_term: "md".to_string(),
            min_years: 5,
            page: 2,
        };
        let moved = state.with_page(0);
        assert_eq!(moved.page, 1);
        assert_eq!(moved.search_term, "md");
        assert_eq!(moved.min_years, 5);
    }

    #[test]
    fn is_filtered_reflects_active_filters() {
        assert!(!SearchPageState::default().is_filtered());
        assert!(
            SearchPageState {
                min_years: 2,
                ..SearchPageState::default()
            }
            .is_filtered()
        );
    }
}
