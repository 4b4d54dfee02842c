//! Application event handling.
//!
//! Applies background task results to the application state.

use crate::app::{App, AppEvent, LoadState};

/// Handle an event sent by a background task.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FaqsLoaded(result) => app.apply_load_result(result),
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task, error = %error, "Background task panicked");
            if app.load_state == LoadState::Loading {
                app.load_state = LoadState::Failed(format!("{} task crashed", task));
                app.view.load(Vec::new());
            }
            app.set_status(format!("Internal error in {}: {}", task, error));
        }
    }
}
