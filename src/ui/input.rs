use crate::router::Route;
use crate::scheduling::Phase;
use crate::ui::app::App;
use crate::ui::scheduling::{FormField, SchedulingIntent, Step};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.scheduling_dialog_active() {
        handle_dialog_key(app, key);
        return;
    }

    match app.route() {
        Route::ProjectList => handle_project_list_key(app, key),
        Route::Project { .. } => handle_project_key(app, key),
    }
}

fn handle_project_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => app.open_selected_project(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_project_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char('s') => app.schedule_highlighted_expert(),
        KeyCode::Backspace | KeyCode::Char('l') => app.navigate(Route::ProjectList),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.close_scheduling_dialog();
        return;
    }

    match app.scheduling_dialog().phase() {
        Some(Phase::Form) => handle_form_key(app, key),
        Some(Phase::Review) => {
            if key.code == KeyCode::Enter {
                app.dispatch_scheduling(SchedulingIntent::Send);
            }
        }
        Some(Phase::Confirmation) => {
            if key.code == KeyCode::Enter {
                app.close_scheduling_dialog();
            }
        }
        None => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let focus = app.scheduling_dialog().focus().unwrap_or_default();
    let intent = match key.code {
        KeyCode::Tab => SchedulingIntent::FocusNext,
        KeyCode::BackTab => SchedulingIntent::FocusPrev,
        KeyCode::Enter if focus == FormField::Submit => SchedulingIntent::Review,
        KeyCode::Enter => SchedulingIntent::FocusNext,
        code => match arrow_step(focus, code) {
            Some(step) => SchedulingIntent::Adjust(step),
            None => return,
        },
    };
    app.dispatch_scheduling(intent);
}

/// Arrow keys on the date move by day (←→) and week (↑↓); on times they
/// move by slot (↑↓) and hour (←→).
fn arrow_step(focus: FormField, code: KeyCode) -> Option<Step> {
    match (focus, code) {
        (FormField::Date, KeyCode::Left) => Some(Step::Back),
        (FormField::Date, KeyCode::Right) => Some(Step::Forward),
        (FormField::Date, KeyCode::Up) => Some(Step::PageBack),
        (FormField::Date, KeyCode::Down) => Some(Step::PageForward),
        (FormField::StartTime | FormField::EndTime, KeyCode::Up) => Some(Step::Back),
        (FormField::StartTime | FormField::EndTime, KeyCode::Down) => Some(Step::Forward),
        (FormField::StartTime | FormField::EndTime, KeyCode::Left) => Some(Step::PageBack),
        (FormField::StartTime | FormField::EndTime, KeyCode::Right) => Some(Step::PageForward),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_per_field() {
        assert_eq!(arrow_step(FormField::Date, KeyCode::Down), Some(Step::PageForward));
        assert_eq!(arrow_step(FormField::StartTime, KeyCode::Down), Some(Step::Forward));
        assert_eq!(arrow_step(FormField::EndTime, KeyCode::Left), Some(Step::PageBack));
        assert_eq!(arrow_step(FormField::Submit, KeyCode::Up), None);
    }
}
