use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::{ensure_terminal, setup_terminal};
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the UI until the user quits or a shutdown signal arrives.
pub fn run(mut app: App, tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<()> {
    ensure_terminal()?;
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    tracing::info!(target: "runtime", route = %app.route(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Redraw only; ratatui picks up the new size on the next draw
            Ok(AppEvent::Tick | AppEvent::Resize) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the event thread if we are quitting for another reason
    shutdown.signal();
    drop(guard);
    tracing::info!(target: "runtime", "UI stopped");
    Ok(())
}
