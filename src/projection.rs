//! Pure mapping from [`ViewState`] to what the screen shows.
//!
//! Widgets consume a [`Projection`] and never read the view state directly,
//! so every display decision here is testable without a terminal.

use crate::faq::FaqId;
use crate::pager::{self, PageIndicator};
use crate::view_state::ViewState;

/// Placeholder shown in the search field while it is not focused.
pub const SEARCH_PLACEHOLDER: &str = "Type a search term";

/// The region above the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListHead<'a> {
    /// Nothing to show. Suppresses both the tabs and the match banner.
    NoResults,
    /// Category tabs with the selected one marked.
    Categories { tabs: &'a [String], active: usize },
    /// Match count of an active search.
    SearchBanner { count: usize },
}

/// One record on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub id: FaqId,
    pub category: &'a str,
    pub title: &'a str,
    pub expanded: bool,
    /// Raw HTML body, present only while expanded.
    pub content: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    pub head: ListHead<'a>,
    pub rows: Vec<Row<'a>>,
    pub pages: Vec<PageIndicator>,
    pub search_term: &'a str,
    /// The clear affordance only appears while there is text to clear.
    pub show_clear: bool,
}

pub fn project(view: &ViewState) -> Projection<'_> {
    let head = if view.visible_len() == 0 {
        ListHead::NoResults
    } else if !view.is_search_active() {
        ListHead::Categories {
            tabs: view.categories(),
            active: view.category_index(),
        }
    } else {
        ListHead::SearchBanner {
            count: view.visible_len(),
        }
    };

    let expanded = view.expanded_id();
    let rows = view
        .page_items()
        .into_iter()
        .map(|record| {
            let is_expanded = expanded == Some(record.id);
            Row {
                id: record.id,
                category: &record.category,
                title: &record.title,
                expanded: is_expanded,
                content: is_expanded.then_some(record.content.as_str()),
            }
        })
        .collect();

    Projection {
        head,
        rows,
        pages: pager::page_indicators(view.page_count(), view.current_page()),
        search_term: view.search_term(),
        show_clear: !view.search_term().is_empty(),
    }
}

/// Placeholder text for the search field: hidden while focused.
pub fn search_hint(focused: bool) -> Option<&'static str> {
    if focused {
        None
    } else {
        Some(SEARCH_PLACEHOLDER)
    }
}
