use crate::app::{App, LoadState};
use crate::projection::ListHead;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const NO_RESULTS: &str = "No results found.";

/// Render the row above the question list: category tabs, the match count
/// of an active search, or the no-results notice.
pub fn render(f: &mut Frame, app: &App, head: &ListHead<'_>, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }
    // An empty list while loading is not a "no results" situation
    if app.load_state == LoadState::Loading {
        return;
    }

    let line = match head {
        ListHead::NoResults => Line::from(Span::styled(NO_RESULTS, app.style("no_results"))),
        ListHead::Categories { tabs, active } => tab_line(app, tabs, *active),
        ListHead::SearchBanner { count } => Line::from(vec![
            Span::styled(count.to_string(), app.style("banner").add_modifier(Modifier::BOLD)),
            Span::styled(" results", app.style("banner")),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn tab_line(app: &App, tabs: &[String], active: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(tabs.len() * 2);
    for (i, tab) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if i == active {
            app.style("tab_active")
        } else {
            app.style("tab_normal")
        };
        // Numbered so the digit shortcuts are discoverable
        let label = if i < 9 {
            format!(" {} {} ", i + 1, tab)
        } else {
            format!(" {} ", tab)
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}
