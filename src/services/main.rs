use crate::dto::main::{IndexPageData, PageLink, SearchPageState};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the advocate list for the search page and precomputes every
/// navigation link as a serialization of a derived state.
pub fn load_index_page<R>(repo: &R, state: SearchPageState) -> ServiceResult<IndexPageData>
where
    R: AdvocateReader + ?Sized,
{
    let list_query = AdvocateListQuery::new()
        .search(state.search_term.clone())
        .min_years(state.min_years)
        .paginate(state.page, DEFAULT_ITEMS_PER_PAGE);

    let (total, advocates) = repo.list_advocates(list_query).map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let advocates = Paginated::new(advocates, state.page, total_pages);

    let prev_url = advocates
        .has_prev
        .then(|| page_url(&state, state.page - 1));
    let next_url = advocates
        .has_next
        .then(|| page_url(&state, state.page + 1));
    let reset_url = format!("/?{}", state.reset().to_query_string());

    let page_links = advocates
        .pages
        .iter()
        .map(|entry| match entry {
            Some(number) => PageLink {
                number: Some(*number),
                url: (*number != state.page).then(|| page_url(&state, *number)),
                current: *number == state.page,
            },
            None => PageLink {
                number: None,
                url: None,
                current: false,
            },
        })
        .collect();

    Ok(IndexPageData {
        search_message: search_message(&state),
        advocates,
        total,
        prev_url,
        next_url,
        reset_url,
        page_links,
        state,
    })
}

fn page_url(state: &SearchPageState, page: usize) -> String {
    format!("/?{}", state.with_page(page).to_query_string())
}

/// Human-readable summary of the active filters.
pub fn search_message(state: &SearchPageState) -> String {
    if !state.is_filtered() {
        return "Showing all advocates".to_string();
    }

    let mut message = String::from("Searching for advocates");
    if !state.search_term.is_empty() {
        message.push_str(&format!(" matching '{}'", state.search_term));
    }
    if state.min_years > 0 {
        message.push_str(&format!(
            " with at least {} years of experience",
            state.min_years
        ));
    }
    message
}

/// Renders a phone value as `(AAA) CCC-LLLL`.
///
/// All non-digit characters are stripped first; anything that does not
/// reduce to exactly 10 digits is returned as the bare digit string.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return digits;
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
