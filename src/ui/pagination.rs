use crate::app::App;
use crate::pager::PageIndicator;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;

/// Most rows the page strip may take from the question list.
const MAX_ROWS: usize = 3;

/// Render the page indicators, current page in brackets.
///
/// Every page gets an indicator. A strip wider than the area wraps onto more
/// rows, and when those exceed the area it scrolls to the current page's row.
pub fn render(f: &mut Frame, app: &App, pages: &[PageIndicator], area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let rows = layout_rows(pages, area.width as usize);
    let active_row = rows
        .iter()
        .position(|r| pages[r.clone()].iter().any(|p| p.active))
        .unwrap_or(0);
    let offset = active_row.saturating_sub(area.height as usize - 1);

    let lines = strip_lines(app, pages, &rows);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .scroll((offset, 0)),
        area,
    );
}

/// Rows the strip needs at `width`, capped so the list keeps its space.
pub(super) fn height(pages: &[PageIndicator], width: u16) -> u16 {
    let rows = layout_rows(pages, width as usize).len().clamp(1, MAX_ROWS);
    rows as u16
}

fn label(page: &PageIndicator) -> String {
    if page.active {
        format!("[{}]", page.page)
    } else {
        format!(" {} ", page.page)
    }
}

/// Greedy packing of indicators into rows no wider than `width`.
/// An indicator wider than `width` still gets a row of its own.
fn layout_rows(pages: &[PageIndicator], width: usize) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;

    for (i, page) in pages.iter().enumerate() {
        let w = label(page).len();
        if used > 0 && used + w > width {
            rows.push(start..i);
            start = i;
            used = 0;
        }
        used += w;
    }
    if start < pages.len() {
        rows.push(start..pages.len());
    }
    rows
}

fn strip_lines(app: &App, pages: &[PageIndicator], rows: &[Range<usize>]) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = pages[row.clone()]
                .iter()
                .map(|page| {
                    let role = if page.active { "page_active" } else { "page_normal" };
                    Span::styled(label(page), app.style(role))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
