//! Front desk console
//!
//! Full-screen terminal view over a [`ReservationLedger`](crate::ledger::ReservationLedger):
//! booking form, search box, menu picker, reservation table and a log panel.
//!
//! | Key            | Action                                  |
//! |----------------|-----------------------------------------|
//! | Tab / BackTab  | Cycle focus                              |
//! | Enter          | Submit form / add menu item              |
//! | c              | Check out the selected reservation       |
//! | d / Delete     | Delete the selected reservation (asks)   |
//! | PgUp / PgDown  | Scroll the log panel                     |
//! | F10 / f        | Show the finish acknowledgment           |
//! | Esc / q        | Quit (outside text fields)               |

pub mod state;
pub mod ui;

pub use state::{DeskState, FINISHED_MESSAGE, Focus, Mode, Outcome, StatusLine, TableRow};

use crate::core::Config;
use crate::ledger::LedgerSummary;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

const TICK: Duration = Duration::from_millis(100);

/// Run the console until the operator quits
///
/// The terminal is restored even when the event loop fails.
pub fn run(config: &Config) -> anyhow::Result<LedgerSummary> {
    let mut state = DeskState::new(config);
    let logger_state = TuiWidgetState::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("Tab to move between panels, F10 to finish");
    tracing::info!("Use PgUp/PgDown to scroll logs");

    let res = run_loop(&mut terminal, &mut state, &logger_state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(state.ledger().summary())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut DeskState,
    logger_state: &TuiWidgetState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, state, logger_state))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }

        match key.code {
            KeyCode::PageUp => logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {
                if state.handle_key(key) == Outcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}
