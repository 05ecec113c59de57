//! Desk state - everything the console shows, minus the terminal
//!
//! Key events go in through [`DeskState::handle_key`], the renderer reads the
//! accessors. Reservation rows are addressed by [`ReservationId`], so actions
//! taken on a filtered table always hit the highlighted reservation.

use crate::core::Config;
use crate::ledger::{LedgerError, ReservationLedger};
use crate::utils::format_clock;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shared::error::{AppError, ErrorCategory, ErrorCode};
use shared::models::{Reservation, ReservationId};
use std::ops::RangeInclusive;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

pub const FINISHED_MESSAGE: &str = "Reservation System Finished!";

/// Focusable panels, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Phone,
    Guests,
    Search,
    Menu,
    Table,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Name,
        Focus::Phone,
        Focus::Guests,
        Focus::Search,
        Focus::Menu,
        Focus::Table,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, Focus::Name | Focus::Phone | Focus::Guests | Focus::Search)
    }

    fn is_form(self) -> bool {
        matches!(self, Focus::Name | Focus::Phone | Focus::Guests)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Waiting for y/n before deleting
    ConfirmDelete(ReservationId),
    /// Finish acknowledged; next key dismisses the popup
    Finished,
}

/// What the run loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    /// Set for rejected actions
    pub error: Option<ErrorCategory>,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: ReservationId,
    pub name: String,
    pub phone: String,
    pub check_in: String,
    pub checkout_status: String,
    pub can_checkout: bool,
}

pub struct DeskState {
    ledger: ReservationLedger,
    clock_format: String,
    name: Input,
    phone: Input,
    guests: Input,
    search: Input,
    focus: Focus,
    mode: Mode,
    menu_cursor: usize,
    selected: Option<ReservationId>,
    /// Stays up until a submission succeeds
    duplicate_alert: bool,
    status: Option<StatusLine>,
}

impl DeskState {
    pub fn new(config: &Config) -> Self {
        Self::with_ledger(
            ReservationLedger::from_config(config),
            config.clock_format.clone(),
        )
    }

    pub fn with_ledger(ledger: ReservationLedger, clock_format: impl Into<String>) -> Self {
        Self {
            ledger,
            clock_format: clock_format.into(),
            name: Input::default(),
            phone: Input::default(),
            guests: Input::new("1".to_string()),
            search: Input::default(),
            focus: Focus::default(),
            mode: Mode::default(),
            menu_cursor: 0,
            selected: None,
            duplicate_alert: false,
            status: None,
        }
    }

    // ========================================================================
    // Key handling
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return Outcome::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Outcome::Quit;
        }

        match self.mode {
            Mode::Finished => {
                self.mode = Mode::Normal;
                Outcome::Continue
            }
            Mode::ConfirmDelete(_) => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_delete(),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_delete(),
                    _ => {}
                }
                Outcome::Continue
            }
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Outcome::Continue;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Outcome::Continue;
            }
            KeyCode::F(10) => {
                self.finish();
                return Outcome::Continue;
            }
            _ => {}
        }

        if self.focus.is_text() {
            self.handle_text_key(key);
            return Outcome::Continue;
        }

        match (self.focus, key.code) {
            (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => return Outcome::Quit,
            (_, KeyCode::Char('f')) => self.finish(),
            (Focus::Menu, KeyCode::Up) => self.move_menu_cursor(-1),
            (Focus::Menu, KeyCode::Down) => self.move_menu_cursor(1),
            (Focus::Menu, KeyCode::Enter) | (Focus::Menu, KeyCode::Char('a')) => {
                self.add_menu_item()
            }
            (Focus::Table, KeyCode::Up) => self.move_selection(-1),
            (Focus::Table, KeyCode::Down) => self.move_selection(1),
            (Focus::Table, KeyCode::Char('c')) => self.checkout_selected(),
            (Focus::Table, KeyCode::Char('d')) | (Focus::Table, KeyCode::Delete) => {
                self.request_delete()
            }
            _ => {}
        }
        Outcome::Continue
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.focus = Focus::Table;
                return;
            }
            KeyCode::Enter if self.focus.is_form() => {
                self.submit();
                return;
            }
            KeyCode::Enter => return,
            // Guest count is a number input
            KeyCode::Char(c) if self.focus == Focus::Guests && !c.is_ascii_digit() => return,
            _ => {}
        }

        let event = Event::Key(key);
        match self.focus {
            Focus::Name => {
                self.name.handle_event(&event);
            }
            Focus::Phone => {
                self.phone.handle_event(&event);
            }
            Focus::Guests => {
                self.guests.handle_event(&event);
            }
            Focus::Search => {
                let before = self.search.value().to_string();
                self.search.handle_event(&event);
                if self.search.value() != before {
                    self.ledger.set_search_query(self.search.value());
                    self.sync_selection();
                }
            }
            Focus::Menu | Focus::Table => {}
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Submit the reservation form
    ///
    /// Inputs reset only when the ledger accepts the reservation.
    pub fn submit(&mut self) {
        let guests_raw = self.guests.value().trim();
        if guests_raw.is_empty() {
            self.show_error(AppError::required_field("Guest Count"));
            return;
        }
        let guests = match guests_raw.parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                self.show_error(AppError::with_message(
                    ErrorCode::InvalidFormat,
                    "Guest count must be a whole number",
                ));
                return;
            }
        };

        match self
            .ledger
            .submit_reservation(self.name.value(), self.phone.value(), guests)
        {
            Ok(reservation) => {
                let text = format!(
                    "Reserved {} for {} guest(s)",
                    reservation.name, reservation.guest_count
                );
                let id = reservation.id;
                self.reset_form();
                self.duplicate_alert = false;
                self.status = Some(StatusLine::info(text));
                if self.selected.is_none() {
                    self.selected = Some(id);
                }
                self.sync_selection();
            }
            Err(err) => {
                if matches!(err, LedgerError::DuplicateName(_)) {
                    self.duplicate_alert = true;
                }
                self.show_error(err.into());
            }
        }
    }

    pub fn add_menu_item(&mut self) {
        let Some(id) = self.ledger.menu_items().get(self.menu_cursor).map(|i| i.id) else {
            return;
        };
        match self.ledger.select_menu_item_by_id(id) {
            Ok(item) => {
                self.status = Some(StatusLine::info(format!("Added {} to order", item.name)));
            }
            Err(err) => self.show_error(err.into()),
        }
    }

    pub fn checkout_selected(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        match self.ledger.checkout(id) {
            Ok(reservation) => {
                self.status = Some(StatusLine::info(format!("{} checked out", reservation.name)));
            }
            Err(err) => self.show_error(err.into()),
        }
    }

    /// Ask for confirmation before deleting the highlighted reservation
    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected {
            self.mode = Mode::ConfirmDelete(id);
        }
    }

    pub fn confirm_delete(&mut self) {
        let Mode::ConfirmDelete(id) = self.mode else {
            return;
        };
        self.mode = Mode::Normal;
        match self.ledger.delete_reservation(id) {
            Ok(removed) => {
                self.status = Some(StatusLine::info(format!("Deleted reservation for {}", removed.name)));
                self.sync_selection();
            }
            Err(err) => self.show_error(err.into()),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Acknowledge the end of the session; the ledger is left as is
    pub fn finish(&mut self) {
        let summary = self.ledger.summary();
        tracing::info!(
            session_id = %self.ledger.session_id(),
            active = summary.active,
            checked_out = summary.checked_out,
            seats_left = summary.seats_left,
            "Reservation system finished"
        );
        self.mode = Mode::Finished;
    }

    fn move_menu_cursor(&mut self, delta: isize) {
        let len = self.ledger.menu_items().len();
        if len == 0 {
            return;
        }
        self.menu_cursor = self.menu_cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn move_selection(&mut self, delta: isize) {
        let visible: Vec<ReservationId> = self.ledger.filtered_reservations().map(|r| r.id).collect();
        if visible.is_empty() {
            self.selected = None;
            return;
        }
        let next = match self.selected.and_then(|id| visible.iter().position(|v| *v == id)) {
            Some(pos) => pos.saturating_add_signed(delta).min(visible.len() - 1),
            None => 0,
        };
        self.selected = Some(visible[next]);
    }

    /// Keep the highlighted row inside the filtered view
    fn sync_selection(&mut self) {
        let mut visible = self.ledger.filtered_reservations();
        let still_visible = self
            .selected
            .is_some_and(|id| visible.clone().any(|r| r.id == id));
        if !still_visible {
            self.selected = visible.next().map(|r| r.id);
        }
    }

    fn reset_form(&mut self) {
        self.name.reset();
        self.phone.reset();
        self.guests = Input::new("1".to_string());
        self.focus = Focus::Name;
    }

    fn show_error(&mut self, err: AppError) {
        let category = err.code.category();
        tracing::debug!(code = %err.code, category = category.name(), "{}", err.message);
        self.status = Some(StatusLine {
            text: err.message,
            error: Some(category),
        });
    }

    // ========================================================================
    // View data
    // ========================================================================

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn name_input(&self) -> &Input {
        &self.name
    }

    pub fn phone_input(&self) -> &Input {
        &self.phone
    }

    pub fn guests_input(&self) -> &Input {
        &self.guests
    }

    pub fn search_input(&self) -> &Input {
        &self.search
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn selected(&self) -> Option<ReservationId> {
        self.selected
    }

    pub fn duplicate_alert(&self) -> bool {
        self.duplicate_alert
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// Allowed guest counts for the form, empty when the house is full
    pub fn guest_count_bounds(&self) -> RangeInclusive<u32> {
        1..=self.ledger.seats_left()
    }

    /// `Name - $price` lines for the pending order
    pub fn pending_lines(&self) -> Vec<String> {
        self.ledger
            .pending_selection()
            .iter()
            .map(|item| item.label())
            .collect()
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        self.ledger
            .filtered_reservations()
            .map(|r| TableRow {
                id: r.id,
                name: r.name.clone(),
                phone: r.phone.clone(),
                check_in: format_clock(r.check_in_time, &self.clock_format),
                checkout_status: self.checkout_status(r),
                can_checkout: r.is_active(),
            })
            .collect()
    }

    /// Index of the highlighted reservation among the visible rows
    pub fn selected_row(&self) -> Option<usize> {
        let id = self.selected?;
        self.ledger.filtered_reservations().position(|r| r.id == id)
    }

    fn checkout_status(&self, reservation: &Reservation) -> String {
        match reservation.check_out_time {
            Some(at) if reservation.is_checked_out() => {
                format!("Checked Out at {}", format_clock(at, &self.clock_format))
            }
            _ => "Not Checked Out".to_string(),
        }
    }
}
