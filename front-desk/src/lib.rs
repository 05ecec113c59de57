//! Front Desk - restaurant seat reservation ledger
//!
//! # Overview
//!
//! A single-session, in-memory ledger of table reservations against a fixed
//! seat pool, with a terminal console for the host stand.
//!
//! - **Ledger** (`ledger`): reservations, seat accounting, pending menu order, search
//! - **Console** (`console`): ratatui front end driving the ledger
//! - **Config** (`core`): environment-driven settings
//! - **Utils** (`utils`): logging and clock formatting
//!
//! # Module layout
//!
//! ```text
//! front-desk/src/
//! ├── core/          # Configuration
//! ├── ledger/        # Reservation ledger, menu catalog, search filter
//! ├── console/       # Terminal UI state and rendering
//! └── utils/         # Logger, time formatting
//! ```

pub mod console;
pub mod core;
pub mod ledger;
pub mod utils;

pub use core::Config;
pub use ledger::{
    LedgerError, LedgerResult, LedgerSummary, MenuCatalog, ReservationLedger, SearchQuery,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and set up logging from the resulting configuration
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ______                 __     ____            __
   / ____/________  ____  / /_   / __ \___  _____/ /__
  / /_  / ___/ __ \/ __ \/ __/  / / / / _ \/ ___/ //_/
 / __/ / /  / /_/ / / / / /_   / /_/ /  __(__  ) ,<
/_/   /_/   \____/_/ /_/\__/  /_____/\___/____/_/|_|
    "#
    );
}
