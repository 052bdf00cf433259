//! Page arithmetic shared by the JSON API and the HTML page.
//!
//! Page numbers are 1-based. The page count is `ceil(count / per_page)` and
//! zero for an empty match list. Out-of-range pages are empty, never errors.

use crate::config::SearchSettings;
use codata_api::models::DEFAULT_PAGE;
use std::num::IntErrorKind;

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

pub fn total_pages(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page.max(1))
}

/// Cut page `page` of `matches`. A `per_page` of zero is treated as one.
pub fn paginate<T>(matches: &[T], page: i64, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(matches.len(), per_page);

    let items = page
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| index.checked_mul(per_page))
        .filter(|&start| start < matches.len())
        .map(|start| {
            let end = start.saturating_add(per_page).min(matches.len());
            &matches[start..end]
        })
        .unwrap_or(&[]);

    Page { items, total_pages }
}

/// Page number and size taken from raw query-string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: usize,
}

impl PageRequest {
    /// Non-numeric values fall back to the defaults instead of failing.
    /// Integer pages are kept as given, so `0` or `-3` produce an empty page;
    /// integers beyond `i64` saturate and land past the last page.
    /// Sizes below one use the configured default and sizes above the
    /// configured maximum are clamped.
    pub fn from_params(
        page: Option<&str>,
        per_page: Option<&str>,
        settings: &SearchSettings,
    ) -> Self {
        let page = page.and_then(parse_integer).unwrap_or(DEFAULT_PAGE);

        let per_page = per_page
            .and_then(parse_integer)
            .filter(|&n| n >= 1)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .unwrap_or(settings.default_per_page)
            .min(settings.max_per_page);

        Self { page, per_page }
    }
}

/// Integer value of a query parameter, saturating on overflow.
fn parse_integer(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
