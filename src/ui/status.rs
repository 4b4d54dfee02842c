use crate::app::{App, Focus, LoadState};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow avoids allocations for static hints and borrowed status messages
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.focus {
            Focus::Search => Cow::Borrowed("Type to edit | ENTER search | ESC back | Ctrl+u clear"),
            Focus::List => Cow::Owned(format!(
                "{} | [/]search [Tab]category [h/l]page [Enter]answer [?]help [q]uit",
                summary(app)
            )),
        }
    };

    let style = if matches!(app.load_state, LoadState::Failed(_)) {
        app.style("status_error")
    } else {
        app.style("status_bar")
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

/// Where the list stands, e.g. "12 questions, page 1/1".
fn summary(app: &App) -> String {
    format!(
        "{} questions, page {}/{}",
        app.view.visible_len(),
        app.view.current_page(),
        app.view.page_count()
    )
}
