//! Render functions for the TUI.
//!
//! Builds the [`Projection`](crate::projection::Projection) once per frame and
//! hands each region of the screen to its widget.

use crate::app::App;
use crate::projection::project;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{faq_list, help, list_head, pagination, search_bar, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 12;

const HEADING: &str = "Frequently Asked Questions";

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // At truly minimal dimensions, we can't render anything meaningful
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let projection = project(&app.view);
    let pager_height = pagination::height(&projection.pages, area.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(3), // search field
            Constraint::Length(1), // tabs / banner / no results
            Constraint::Min(3),    // questions
            Constraint::Length(pager_height), // pager
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let heading = Line::from(Span::styled(HEADING, app.style("heading")));
    f.render_widget(Paragraph::new(heading).alignment(Alignment::Center), chunks[0]);

    search_bar::render(f, app, &projection, chunks[1]);
    list_head::render(f, app, &projection.head, chunks[2]);
    faq_list::render(f, app, &projection.rows, chunks[3]);
    pagination::render(f, app, &projection.pages, chunks[4]);
    status::render(f, app, chunks[5]);

    if app.show_help {
        help::render(f, app);
    }
}
