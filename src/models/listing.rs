// file: src/models/listing.rs
// description: presentation state selected for a query and its result set
// reference: result page behaviour of the search front end

use super::search_result::ResultItem;

/// Which view the presenter should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultListing {
    /// At least one result to list
    Results,
    /// A non-empty query matched nothing
    NoResults,
    /// Nothing searched yet
    Idle,
}

impl ResultListing {
    pub fn classify(query: &str, results: &[ResultItem]) -> Self {
        if !results.is_empty() {
            ResultListing::Results
        } else if query.is_empty() {
            ResultListing::Idle
        } else {
            ResultListing::NoResults
        }
    }

    /// Header line shown above a listing, `None` unless there are results.
    pub fn header(count: usize, elapsed_seconds: f64) -> Option<String> {
        match count {
            0 => None,
            n if n >= 10 => Some(format!("Top {} results ({:.2} seconds)", n, elapsed_seconds)),
            n => Some(format!("{} matching results ({:.2} seconds)", n, elapsed_seconds)),
        }
    }
}
