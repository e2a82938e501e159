use serde::Deserialize;

use crate::list::sort::SortSpec;

pub const PAGE_PARAM: &str = "page";
pub const SORT_PARAM: &str = "sort";

#[derive(Debug, Default, Deserialize)]
struct RawLocationQuery {
    page: Option<String>,
    sort: Option<String>,
}

/// The `page` and `sort` parameters of a location query string. Unparseable
/// values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationQuery {
    pub page: Option<usize>,
    pub sort: Option<SortSpec>,
}

impl LocationQuery {
    /// Parses a query string with or without its leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let raw: RawLocationQuery = match serde_html_form::from_str(query) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Ignoring malformed location query `{query}`: {err}");
                RawLocationQuery::default()
            }
        };

        let page = raw
            .page
            .and_then(|page| page.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1);
        let sort = raw
            .sort
            .filter(|sort| !sort.trim().is_empty())
            .map(|sort| SortSpec::parse_lenient(&sort));

        Self { page, sort }
    }

    /// Both parameters present, as written by [`LocationQuery::render`].
    pub fn is_complete(&self) -> bool {
        self.page.is_some() && self.sort.is_some()
    }

    /// Canonical query string, without the leading `?`. The comma between
    /// field and order is left unescaped.
    pub fn render(page: usize, sort: &SortSpec) -> String {
        format!("{PAGE_PARAM}={page}&{SORT_PARAM}={sort}")
    }
}
