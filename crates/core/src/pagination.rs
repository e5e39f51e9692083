//! Search result pagination.
//!
//! We show the current page plus the previous and next pages when they are
//! not the current page. When previous/next do not already reach the first or
//! last page, extra "First"/"Last" controls are added.
//!
//! Examples (where * denotes the current page), with 20 results per page and
//! totals of 100 for the first three rows and 690 for the last two:
//!
//! ```text
//! [*1*] [2] [Last]
//! [1] [*2*] [3] [Last]
//! [First] [2] [*3*] [4] [Last]
//! [First] [33] [*34*] [35]
//! [First] [34] [*35*]
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// Deepest result offset the upstream search service will serve.
pub const MAX_SEARCH_OFFSET: u64 = 4000 - 1;

/// Paging facts reported for a single search request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    /// Page size used for this request.
    pub count: u64,
    /// Zero-based offset of the first result on this page.
    pub offset: u64,
    /// Total matches reported by the upstream index.
    pub total: u64,
}

/// Text shown on a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    First,
    Last,
    Page(u64),
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::First => f.write_str("First"),
            PageLabel::Last => f.write_str("Last"),
            PageLabel::Page(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One entry in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageControl {
    pub label: PageLabel,
    /// 1-based page number this control navigates to.
    pub page: u64,
    pub is_selected: bool,
}

impl PageControl {
    fn numbered(page: u64, is_selected: bool) -> Self {
        Self { label: PageLabel::Page(page), page, is_selected }
    }
}

/// Render-ready pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    /// False when the results fit on a single page.
    pub has_pagination: bool,
    pub pages: Vec<PageControl>,
}

impl PaginationView {
    /// The selected control's page number.
    pub fn current_page(&self) -> Option<u64> {
        self.pages.iter().find(|p| p.is_selected).map(|p| p.page)
    }
}

/// Compute the pagination controls for a page of search results.
///
/// `info.count` must be non-zero; callers substitute their requested page
/// size when the upstream service does not echo one. A zero count is treated
/// as one rather than dividing by zero.
///
/// Offsets that are not a multiple of `count` round down to the page that
/// contains them. The reported total is clamped to [`MAX_SEARCH_OFFSET`] so
/// that the last page is always one the upstream service will serve.
pub fn compute_pagination(info: PaginationInfo) -> PaginationView {
    let count = info.count.max(1);

    let first_page = 1;
    let current_page = (info.offset / count).saturating_add(1);
    let last_page = info.total.min(MAX_SEARCH_OFFSET) / count + 1;
    let prev_page = current_page.saturating_sub(1).max(first_page);
    let next_page = current_page.saturating_add(1).min(last_page);

    let mut pages = Vec::with_capacity(5);

    if current_page != first_page && prev_page != first_page {
        pages.push(PageControl { label: PageLabel::First, page: first_page, is_selected: false });
    }

    if prev_page >= first_page && prev_page != current_page {
        pages.push(PageControl::numbered(prev_page, false));
    }

    pages.push(PageControl::numbered(current_page, true));

    if next_page <= last_page && next_page != current_page {
        pages.push(PageControl::numbered(next_page, false));
    }

    if current_page != last_page && next_page != last_page {
        pages.push(PageControl { label: PageLabel::Last, page: last_page, is_selected: false });
    }

    PaginationView { has_pagination: pages.len() > 1, pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render a view as `[First, 2, *3*, 4, Last]` for compact assertions.
    fn shape(view: &PaginationView) -> String {
        let labels: Vec<String> = view
            .pages
            .iter()
            .map(|p| if p.is_selected { format!("*{}*", p.label) } else { p.label.to_string() })
            .collect();
        format!("[{}]", labels.join(", "))
    }

    fn paginate(count: u64, offset: u64, total: u64) -> PaginationView {
        compute_pagination(PaginationInfo { count, offset, total })
    }

    #[test]
    fn test_single_page() {
        let view = paginate(20, 0, 5);
        assert_eq!(shape(&view), "[*1*]");
        assert!(!view.has_pagination);
    }

    #[test]
    fn test_first_page_of_many() {
        let view = paginate(20, 0, 45);
        assert_eq!(shape(&view), "[*1*, 2, Last]");
        assert_eq!(view.pages[2].page, 3);
        assert!(view.has_pagination);
    }

    #[test]
    fn test_second_page() {
        assert_eq!(shape(&paginate(20, 20, 100)), "[1, *2*, 3, Last]");
    }

    #[test]
    fn test_second_page_next_is_last() {
        assert_eq!(shape(&paginate(20, 20, 45)), "[1, *2*, 3]");
    }

    #[test]
    fn test_middle_page() {
        let view = paginate(20, 40, 100);
        assert_eq!(shape(&view), "[First, 2, *3*, 4, Last]");
        assert_eq!(view.pages[0].page, 1);
        assert_eq!(view.pages[4].page, 6);
    }

    #[test]
    fn test_penultimate_page() {
        assert_eq!(shape(&paginate(20, 660, 690)), "[First, 33, *34*, 35]");
    }

    #[test]
    fn test_last_page() {
        let view = paginate(20, 680, 690);
        assert_eq!(shape(&view), "[First, 34, *35*]");
        assert_eq!(view.current_page(), Some(35));
    }

    #[test]
    fn test_total_clamped_to_max_offset() {
        let view = paginate(20, 640, 10_000);
        assert_eq!(shape(&view), "[First, 32, *33*, 34, Last]");
        assert_eq!(view.pages.last().map(|p| p.page), Some(200));

        let view = paginate(20, 3980, 10_000);
        assert_eq!(shape(&view), "[First, 199, *200*]");
    }

    #[test]
    fn test_zero_total() {
        let view = paginate(20, 0, 0);
        assert_eq!(shape(&view), "[*1*]");
        assert!(!view.has_pagination);
    }

    #[test]
    fn test_unaligned_offset_rounds_down() {
        let view = paginate(20, 39, 100);
        assert_eq!(view.current_page(), Some(2));
    }

    #[test]
    fn test_zero_count_does_not_panic() {
        let view = paginate(0, 0, 3);
        assert_eq!(view.current_page(), Some(1));
    }

    #[test]
    fn test_offset_at_integer_limit_does_not_overflow() {
        let view = paginate(1, u64::MAX, 10_000);
        assert_eq!(view.current_page(), Some(u64::MAX));
        assert!(view.pages.iter().any(|p| p.label == PageLabel::First));
    }

    #[test]
    fn test_label_serialization() {
        let view = paginate(20, 40, 100);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["hasPagination"], true);
        assert_eq!(json["pages"][0]["label"], "First");
        assert_eq!(json["pages"][2]["label"], "3");
        assert_eq!(json["pages"][2]["isSelected"], true);
        assert_eq!(json["pages"][4]["page"], 6);
    }

    #[test]
    fn test_invariants_hold_across_inputs() {
        for count in [1, 7, 20, 50] {
            for total in [0, 1, 19, 20, 21, 45, 100, 3999, 4000, 10_000] {
                let max_page = MAX_SEARCH_OFFSET / count + 1;
                let last_page = total.min(MAX_SEARCH_OFFSET) / count + 1;
                for page in 1..=last_page.min(60) {
                    let view = paginate(count, (page - 1) * count, total);

                    assert_eq!(view.has_pagination, view.pages.len() > 1);
                    assert!((1..=5).contains(&view.pages.len()));

                    let selected: Vec<_> = view.pages.iter().filter(|p| p.is_selected).collect();
                    assert_eq!(selected.len(), 1, "count={count} total={total} page={page}");
                    assert_eq!(selected[0].page, page);
                    assert_eq!(view.pages.iter().filter(|p| p.page == page).count(), 1);

                    assert!(view.pages.iter().all(|p| p.page >= 1 && p.page <= max_page));
                    assert!(view.pages.windows(2).all(|w| w[0].page < w[1].page));
                }
            }
        }
    }
}
