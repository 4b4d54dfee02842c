//! Question list widget.
//!
//! One line per question; the expanded one is followed by its answer,
//! converted from HTML and wrapped to the panel width.

use crate::app::{App, LoadState};
use crate::projection::Row;
use crate::util::{html_to_lines, strip_control_chars, truncate_to_width, wrap_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::loop_runner::SPINNER_FRAMES;

const SPINNER: [&str; SPINNER_FRAMES] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const EXPANDED_GLYPH: &str = "v ";
const COLLAPSED_GLYPH: &str = "> ";
const ANSWER_INDENT: &str = "    ";

/// Render the question list for the current page.
pub fn render(f: &mut Frame, app: &App, rows: &[Row<'_>], area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(" Questions ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.load_state {
        LoadState::Loading => {
            let frame = SPINNER[app.spinner_frame % SPINNER_FRAMES];
            let msg = format!("{} Loading FAQs from {}...", frame, app.source.describe());
            f.render_widget(Paragraph::new(msg).style(app.style("answer_body")), inner);
            return;
        }
        LoadState::Failed(error) => {
            let msg = format!("Could not load questions: {}", error);
            let lines: Vec<Line> = wrap_to_width(&msg, inner.width as usize)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, app.style("status_error"))))
                .collect();
            f.render_widget(Paragraph::new(lines), inner);
            return;
        }
        LoadState::Loaded => {}
    }

    let (lines, focus) = build_lines(app, rows, inner.width as usize);
    let offset = clamp_offset(scroll_offset(focus, inner.height as usize));
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

/// First and last line index of the cursor row, including its answer.
type FocusSpan = Option<(usize, usize)>;

fn build_lines(app: &App, rows: &[Row<'_>], width: usize) -> (Vec<Line<'static>>, FocusSpan) {
    let mut lines = Vec::new();
    let mut focus = None;
    let answer_width = width.saturating_sub(ANSWER_INDENT.len());

    for (i, row) in rows.iter().enumerate() {
        let start = lines.len();
        let is_cursor = i == app.cursor;

        let glyph = if row.expanded {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        };
        let category = format!("[{}] ", strip_control_chars(row.category));
        let used = glyph.len() + crate::util::display_width(&category);
        let title = strip_control_chars(row.title);
        let title = truncate_to_width(&title, width.saturating_sub(used)).into_owned();

        let title_style = if row.expanded {
            app.style("row_expanded")
        } else {
            app.style("row_title")
        };
        let mut line = Line::from(vec![
            Span::raw(glyph),
            Span::styled(category, app.style("row_category")),
            Span::styled(title, title_style),
        ]);
        if is_cursor {
            line = line.style(app.style("row_cursor"));
        }
        lines.push(line);

        if let Some(content) = row.content {
            for para in html_to_lines(content) {
                if para.is_empty() {
                    lines.push(Line::default());
                    continue;
                }
                for wrapped in wrap_to_width(&para, answer_width) {
                    lines.push(Line::from(Span::styled(
                        format!("{}{}", ANSWER_INDENT, wrapped),
                        app.style("answer_body"),
                    )));
                }
            }
        }

        if is_cursor {
            focus = Some((start, lines.len().saturating_sub(1)));
        }
    }

    (lines, focus)
}

/// Scroll so the cursor row is visible, showing as much of its answer as fits.
fn scroll_offset(focus: FocusSpan, height: usize) -> usize {
    let Some((start, end)) = focus else {
        return 0;
    };
    if height == 0 {
        return 0;
    }
    end.saturating_sub(height - 1).min(start)
}

/// Paragraph scroll is u16; very long answers saturate instead of wrapping.
fn clamp_offset(offset: usize) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_top_when_it_fits() {
        assert_eq!(scroll_offset(Some((2, 4)), 10), 0);
        assert_eq!(scroll_offset(None, 10), 0);
    }

    #[test]
    fn test_scroll_reveals_answer_below() {
        // Lines 8..=12 in a 5-line window: show 8..=12
        assert_eq!(scroll_offset(Some((8, 12)), 5), 8);
        // Answer longer than the window: the question stays on top
        assert_eq!(scroll_offset(Some((8, 30)), 5), 8);
        // Short row near the bottom
        assert_eq!(scroll_offset(Some((9, 9)), 5), 5);
    }

    #[test]
    fn test_offset_past_u16_saturates() {
        assert_eq!(clamp_offset(120), 120);
        assert_eq!(clamp_offset(70_000), u16::MAX);
        assert_eq!(clamp_offset(scroll_offset(Some((70_000, 70_010)), 5)), u16::MAX);
    }
}
