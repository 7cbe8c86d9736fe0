use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Row, Table, Wrap},
    Frame,
};
use triplog_core::{to_coordinate, TripRepository};
use unicode_width::UnicodeWidthChar;

use crate::history::format_amount;
use crate::tui::app::{App, InputMode};

const LABEL_WIDTH: usize = 12;

pub fn draw<R: TripRepository>(f: &mut Frame, app: &mut App<R>) {
    let size = f.area();

    // Header, Main Content, Input/Message, Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Input / Message
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new(format!("TRIPLOG · {}", app.owner_id))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    // Split Content into Left (List) and Right (Day)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(main_chunks[1]);

    draw_trip_list(f, app, content_chunks[0]);
    draw_day_view(f, app, content_chunks[1]);
    draw_input(f, app, main_chunks[2]);

    // Footer
    let help = match app.input_mode {
        InputMode::Normal => "j/k: Navigate | h/l: Day | t: Today | g: Trip day | a: Add | q: Quit",
        InputMode::Adding => "date: from: to: purpose: fuel: toll: km: (\"quote spaces\") | Enter: Save | Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_trip_list<R: TripRepository>(f: &mut Frame, app: &mut App<R>, area: Rect) {
    let selected_date = app.selected_date();
    let rows: Vec<Row> = app.trips.iter().map(|trip| {
        let date_style = if trip.date == selected_date {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        Row::new(vec![
            Span::styled(trip.date.clone(), date_style),
            Span::raw(fit_width(&trip.from, LABEL_WIDTH)),
            Span::raw(fit_width(&trip.to, LABEL_WIDTH)),
            Span::raw(trip.distance_km.clone()),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10), // Date
            Constraint::Length(LABEL_WIDTH as u16 + 1), // From
            Constraint::Length(LABEL_WIDTH as u16 + 1), // To
            Constraint::Min(4),     // Km
        ]
    )
    .header(Row::new(vec!["Date", "From", "To", "Km"]).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title(" Trips ").borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_day_view<R: TripRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let day_trips = app.day_trips();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(Color::Blue)),
            Span::styled(app.selected_date(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" ({})", app.selected_day.format("%a"))),
        ]),
        Line::from(vec![
            Span::styled("Distance: ", Style::default().fg(Color::Blue)),
            Span::raw(format!("{}km", format_amount(app.day_total()))),
        ]),
        Line::from(vec![
            Span::styled("Trips: ", Style::default().fg(Color::Blue)),
            Span::raw(day_trips.len().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Route:", Style::default().fg(Color::Blue))),
    ];

    if day_trips.is_empty() {
        lines.push(Line::from(Span::styled("  (no trips)", Style::default().fg(Color::DarkGray))));
    }
    for trip in day_trips {
        for label in [&trip.from, &trip.to] {
            let point = to_coordinate(label);
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", fit_width(label, LABEL_WIDTH))),
                Span::styled(
                    format!("({:.2}, {:.2})", point.lat, point.lng),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    let day_block = Paragraph::new(lines)
        .block(Block::default().title(" Day ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .wrap(Wrap { trim: true });

    f.render_widget(day_block, area);
}

fn draw_input<R: TripRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, text, style) = match app.input_mode {
        InputMode::Adding => (" Add Trip ", app.input.clone(), Style::default().fg(Color::Yellow)),
        InputMode::Normal => (" Message ", app.message.clone().unwrap_or_default(), Style::default()),
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(input, area);

    if let InputMode::Adding = app.input_mode {
        let before: String = app.input.chars().take(app.cursor_position).collect();
        let offset = display_width(&before) as u16;
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Cuts `s` to at most `max` terminal columns, marking the cut with `…`.
pub fn fit_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
