use crate::app::{App, Focus};
use crate::projection::{search_hint, Projection};
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the clear affordance, shown only while there is text.
const CLEAR_LABEL: &str = "[x] clear";

/// Render the search field.
pub fn render(f: &mut Frame, app: &App, projection: &Projection<'_>, area: Rect) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let focused = app.focus == Focus::Search;
    let border_style = if focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let clear_width = if projection.show_clear {
        display_width(CLEAR_LABEL) as u16 + 1
    } else {
        0
    };
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(clear_width)])
        .split(inner);
    let text_area = parts[0];

    let term = projection.search_term;
    let text_width = text_area.width.saturating_sub(1) as usize;
    let line = if term.is_empty() {
        match search_hint(focused) {
            Some(hint) => Line::from(Span::styled(hint, app.style("search_placeholder"))),
            None => Line::default(),
        }
    } else {
        Line::from(Span::styled(
            tail_to_width(term, text_width),
            app.style("search_text"),
        ))
    };
    f.render_widget(Paragraph::new(line), text_area);

    if projection.show_clear {
        let clear = Line::from(Span::styled(CLEAR_LABEL, app.style("search_clear")));
        f.render_widget(Paragraph::new(clear), parts[1]);
    }

    if focused {
        let typed = display_width(&tail_to_width(term, text_width)) as u16;
        f.set_cursor_position(Position::new(
            text_area.x + typed.min(text_area.width.saturating_sub(1)),
            text_area.y,
        ));
    }
}

/// Keep the end of the term visible while typing past the field width.
fn tail_to_width(term: &str, width: usize) -> String {
    if display_width(term) <= width {
        return term.to_string();
    }
    let reversed: String = term.chars().rev().collect();
    truncate_to_width(&reversed, width).chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_short_terms() {
        assert_eq!(tail_to_width("refund", 10), "refund");
    }

    #[test]
    fn test_tail_shows_end_of_long_terms() {
        // Ellipsis lands at the front once reversed back
        assert_eq!(tail_to_width("how do I get a refund", 9), "...refund");
    }
}
