//! Application runner and event loop.
//!
//! Handles terminal setup/teardown and the main event loop.
//! Events are read from an mpsc channel and dispatched to handlers.

use std::io;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::load_config;
use crate::error::AppError;
use crate::events::AppEvent;
use crate::filesystem::OsFs;
use crate::logging;

use super::state::App;

/// Entry point: set up terminal and run the event loop.
pub fn run() -> Result<(), AppError> {
    let cwd = std::env::current_dir().map_err(AppError::WorkingDir)?;
    logging::init();
    log::info!("starting in {}", cwd.display());

    enable_raw_mode()?;
    let _restore = TerminalGuard;
    io::stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &cwd);
    if let Err(err) = &result {
        log::error!("event loop failed: {err}");
    }
    result
}

/// Leaves raw mode and the alternate screen when dropped, on every exit
/// path out of [`run`].
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

/// Main event loop: process events until quit.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cwd: &Path,
) -> Result<(), AppError> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let config = load_config(cwd);
    let mut app = App::new(cwd.to_path_buf(), config, Box::new(OsFs));

    let size = terminal.size()?;
    // The panes have no size until the first resize, so seed one.
    let _ = event_tx.send(AppEvent::Resize(size.width, size.height));
    // The input thread owns the only sender from here on.
    spawn_input_thread(event_tx, event::read);

    terminal.clear()?;
    while !app.should_quit {
        let event = next_event(&event_rx)?;
        super::input::handle_event(&mut app, event);
        // Drain any pending events before redraw
        while let Ok(event) = event_rx.try_recv() {
            super::input::handle_event(&mut app, event);
        }
        if app.should_quit {
            break;
        }

        terminal.draw(|frame| super::render::render(&app, frame))?;
    }
    log::info!("quitting");
    Ok(())
}

/// Block for the next event. A disconnected channel means the input
/// thread has stopped and no more keys will ever arrive.
fn next_event(events: &Receiver<AppEvent>) -> Result<AppEvent, AppError> {
    events.recv().map_err(|_| AppError::InputClosed)
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread<R>(sender: Sender<AppEvent>, mut read: R) -> JoinHandle<()>
where
    R: FnMut() -> io::Result<Event> + Send + 'static,
{
    std::thread::spawn(move || loop {
        match read() {
            Ok(Event::Key(key)) => {
                if sender.send(AppEvent::Input(key)).is_err() {
                    break;
                }
            }
            Ok(Event::Resize(cols, rows)) => {
                if sender.send(AppEvent::Resize(cols, rows)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                log::error!("reading terminal input failed: {err}");
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::mpsc;

    use crossterm::event::{Event, KeyCode};

    use super::{next_event, spawn_input_thread};
    use crate::error::AppError;
    use crate::events::AppEvent;
    use crate::test_utils::key;

    #[test]
    fn read_failure_closes_the_event_stream() {
        let (tx, rx) = mpsc::channel();
        let mut script = vec![
            Ok(Event::Key(key(KeyCode::Char('x')))),
            Ok(Event::FocusGained),
            Ok(Event::Resize(80, 24)),
            Err(io::Error::other("tty gone")),
        ]
        .into_iter();
        let reader = spawn_input_thread(tx, move || {
            script
                .next()
                .unwrap_or_else(|| Err(io::Error::other("exhausted")))
        });
        reader.join().expect("input thread");

        assert_eq!(
            next_event(&rx).expect("key"),
            AppEvent::Input(key(KeyCode::Char('x')))
        );
        assert_eq!(next_event(&rx).expect("resize"), AppEvent::Resize(80, 24));
        assert!(matches!(next_event(&rx), Err(AppError::InputClosed)));
    }

    #[test]
    fn dropped_receiver_stops_the_reader() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let reader = spawn_input_thread(tx, || Ok(Event::Resize(10, 10)));
        reader.join().expect("input thread");
    }
}
