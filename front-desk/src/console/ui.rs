//! Console rendering

use super::state::{DeskState, FINISHED_MESSAGE, Focus, Mode};
use ratatui::{prelude::*, widgets::*};
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

pub fn draw(f: &mut Frame, state: &DeskState, logger_state: &TuiWidgetState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    draw_header(f, state, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if state.duplicate_alert() { 12 } else { 11 }), // Form
            Constraint::Length(3),                                            // Search
            Constraint::Min(8),                                               // Menu
        ])
        .split(main_chunks[0]);

    draw_form(f, state, left[0]);
    draw_search(f, state, left[1]);
    draw_menu(f, state, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    draw_table(f, state, right[0]);
    draw_logs(f, logger_state, right[1]);
    draw_status(f, state, chunks[2]);

    match state.mode() {
        Mode::ConfirmDelete(id) => {
            let name = state
                .ledger()
                .reservation(id)
                .map(|r| r.name.as_str())
                .unwrap_or("?");
            draw_popup(
                f,
                " Delete ",
                vec![
                    Line::from("Are you sure you want to delete this reservation?"),
                    Line::from(Span::styled(
                        name.to_string(),
                        Style::default().fg(Color::Yellow),
                    )),
                    Line::from(""),
                    Line::from("[y] yes   [n] no"),
                ],
                Color::Red,
            );
        }
        Mode::Finished => draw_popup(
            f,
            " Finish ",
            vec![
                Line::from(Span::styled(
                    FINISHED_MESSAGE,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Press any key to continue"),
            ],
            Color::Green,
        ),
        Mode::Normal => {}
    }
}

fn focus_style(state: &DeskState, panel: Focus) -> Style {
    if state.focus() == panel {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn draw_header(f: &mut Frame, state: &DeskState, area: Rect) {
    let ledger = state.ledger();
    let seats_style = if ledger.seats_left() == 0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Restaurant Reservation System "),
        Span::raw(" | "),
        Span::raw("Seats Left: "),
        Span::styled(ledger.seats_left().to_string(), seats_style),
        Span::raw(format!(" / {}", ledger.total_seats())),
    ]));
    f.render_widget(title, halves[0]);

    let help = Paragraph::new("Tab: next panel  F10: finish  Ctrl+C: quit ")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(help, halves[1]);
}

fn draw_form(f: &mut Frame, state: &DeskState, area: Rect) {
    let block = Block::default()
        .title(" Make a Reservation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let bounds = state.guest_count_bounds();
    let guest_title = if bounds.is_empty() {
        " Guest Count (full) ".to_string()
    } else {
        format!(" Guest Count ({}-{}) ", bounds.start(), bounds.end())
    };

    draw_input(f, state, state.name_input(), " Name ", Focus::Name, rows[0]);
    draw_input(f, state, state.phone_input(), " Phone ", Focus::Phone, rows[1]);
    draw_input(f, state, state.guests_input(), &guest_title, Focus::Guests, rows[2]);

    if state.duplicate_alert() {
        let alert = Paragraph::new(Span::styled(
            "Reservation with this name already exists!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(alert, rows[3]);
    }
}

fn draw_search(f: &mut Frame, state: &DeskState, area: Rect) {
    draw_input(
        f,
        state,
        state.search_input(),
        " Search by Name or Phone ",
        Focus::Search,
        area,
    );
}

fn draw_input(
    f: &mut Frame,
    state: &DeskState,
    input: &Input,
    title: &str,
    panel: Focus,
    area: Rect,
) {
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let widget = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(focus_style(state, panel)),
        );
    f.render_widget(widget, area);

    if state.focus() == panel && state.mode() == Mode::Normal {
        f.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn draw_menu(f: &mut Frame, state: &DeskState, area: Rect) {
    let block = Block::default()
        .title(" Menu (Enter: add to order) ")
        .borders(Borders::ALL)
        .border_style(focus_style(state, Focus::Menu));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let ledger = state.ledger();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ledger.menu_items().len() as u16),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let items: Vec<ListItem> = ledger
        .menu_items()
        .iter()
        .map(|item| ListItem::new(item.label()))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.menu_cursor()));
    f.render_stateful_widget(list, parts[0], &mut list_state);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Selected Items:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        parts[1],
    );
    let pending: Vec<ListItem> = state
        .pending_lines()
        .into_iter()
        .map(|line| ListItem::new(format!("  {}", line)))
        .collect();
    f.render_widget(List::new(pending), parts[2]);
}

fn draw_table(f: &mut Frame, state: &DeskState, area: Rect) {
    let header = Row::new(["Name", "Phone", "Check-in Time", "Checkout Status", "Action"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .table_rows()
        .into_iter()
        .map(|row| {
            let action = if row.can_checkout {
                "[c] Checkout [d] Delete"
            } else {
                "[d] Delete"
            };
            Row::new(vec![
                Cell::from(row.name),
                Cell::from(row.phone),
                Cell::from(row.check_in).style(Style::default().fg(Color::Green)),
                Cell::from(row.checkout_status).style(Style::default().fg(Color::Green)),
                Cell::from(action).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let title = if state.ledger().search_query().is_empty() {
        " Reservations ".to_string()
    } else {
        format!(" Reservations matching '{}' ", state.ledger().search_query())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(15),
            Constraint::Percentage(17),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_style(state, Focus::Table)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut table_state = TableState::default();
    table_state.select(state.selected_row());
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_logs(f: &mut Frame, logger_state: &TuiWidgetState, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(logger_state);
    f.render_widget(logs, area);
}

fn draw_status(f: &mut Frame, state: &DeskState, area: Rect) {
    let Some(status) = state.status() else {
        return;
    };
    let line = match status.error {
        Some(category) => Line::from(vec![
            Span::styled(
                format!(" [{}] ", category.name()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(status.text.as_str(), Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(Color::Green),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_popup(f: &mut Frame, title: &str, lines: Vec<Line>, color: Color) {
    let area = centered_rect(f.area(), 56, 7);
    f.render_widget(Clear, area);
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ReservationLedger;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 56, 7), Rect::new(22, 16, 56, 7));

        let tiny = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(tiny, 56, 7), Rect::new(0, 0, 10, 4));
    }

    #[test]
    fn test_draw_shows_seats_and_menu() {
        let mut ledger = ReservationLedger::new(20);
        ledger.submit_reservation("Alice", "111-1111", 4).unwrap();
        let state = DeskState::with_ledger(ledger, "%H:%M:%S");
        let logger_state = TuiWidgetState::new();

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal
            .draw(|f| draw(f, &state, &logger_state))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Seats Left: 16"));
        assert!(text.contains("Burger - $10"));
        assert!(text.contains("Alice"));
        assert!(text.contains("Not Checked Out"));
    }

    #[test]
    fn test_draw_tags_errors_with_category() {
        let mut ledger = ReservationLedger::new(20);
        ledger.submit_reservation("Alice", "111-1111", 4).unwrap();
        let mut state = DeskState::with_ledger(ledger, "%H:%M:%S");
        for c in "Alice".chars() {
            state.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        state.submit();

        let logger_state = TuiWidgetState::new();
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal
            .draw(|f| draw(f, &state, &logger_state))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("[general] Phone is required"));
    }
}
