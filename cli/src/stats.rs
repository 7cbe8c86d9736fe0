use std::{io, ops::Range, time::Duration};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, BorderType, Paragraph, Gauge, Padding},
};
use triplog_core::{ChartSeries, Measure, Totals};

use crate::history::format_amount;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,  // Highlights
    muted: Color::DarkGray,
    text: Color::White,
};

const VISIBLE_MONTHS: usize = 6;
const BAR_SCALE: f64 = 100.0;

pub fn measure_color(measure: Measure) -> Color {
    measure.color().parse().unwrap_or(Color::Reset)
}

pub struct StatsApp {
    pub chart: ChartSeries,
    pub grand_total: Totals,
    pub current_month_index: usize,
}

impl StatsApp {
    pub fn new(chart: ChartSeries, grand_total: Totals) -> Self {
        let current_month_index = chart.labels.len().saturating_sub(1);
        Self {
            chart,
            grand_total,
            current_month_index,
        }
    }

    pub fn next_month(&mut self) {
        if self.current_month_index + 1 < self.chart.labels.len() {
            self.current_month_index += 1;
        }
    }

    pub fn previous_month(&mut self) {
        if self.current_month_index > 0 {
            self.current_month_index -= 1;
        }
    }

    pub fn current_label(&self) -> Option<&str> {
        self.chart.labels.get(self.current_month_index).map(String::as_str)
    }

    pub fn value(&self, measure: Measure, index: usize) -> f64 {
        self.chart.value(measure, index)
    }

    /// Months drawn on screen: a window that ends at the selected month.
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.chart.labels.len();
        if len == 0 {
            return 0..0;
        }
        let end = (self.current_month_index + 1).max(VISIBLE_MONTHS.min(len));
        end.saturating_sub(VISIBLE_MONTHS)..end
    }
}

pub fn run(chart: ChartSeries, grand_total: Totals) -> Result<()> {
    if chart.labels.is_empty() {
        println!("No trips logged yet.");
        return Ok(());
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App setup
    let mut app = StatsApp::new(chart, grand_total);

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left | KeyCode::Char('h') => app.previous_month(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_month(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, app: &StatsApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + Sidebar
            Constraint::Length(1), // Footer / Help
        ])
        .split(size);

    let Some(month) = app.current_label() else {
        frame.render_widget(
            Paragraph::new("No data available").alignment(Alignment::Center),
            main_layout[1],
        );
        return;
    };

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // App title
            Constraint::Min(1),     // Spacer
            Constraint::Length(30), // Month selector
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled("TRIPLOG STATS", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let last = app.chart.labels.len() - 1;
    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(if app.current_month_index > 0 { THEME.text } else { THEME.muted })),
        Span::styled(format!(" {} ", month), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(if app.current_month_index < last { THEME.text } else { THEME.muted })),
    ]);
    let nav = Paragraph::new(nav_text).alignment(Alignment::Right).block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(header_block, main_layout[0]);

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Chart Area
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(30), // Info Panel
        ])
        .split(main_layout[1]);

    draw_chart(frame, app, content_chunks[0]);
    draw_info_panel(frame, app, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("NAV: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center).style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_chart(frame: &mut Frame, app: &StatsApp, area: Rect) {
    // Each bar is scaled against the largest month of its own measure
    let maxima = Measure::ALL.map(|measure| {
        (0..app.chart.labels.len())
            .map(|i| app.value(measure, i))
            .fold(0.0_f64, f64::max)
    });

    let mut bar_data = Vec::new();

    for i in app.visible_range() {
        for (m, measure) in Measure::ALL.iter().enumerate() {
            let value = app.value(*measure, i);
            let scaled = if maxima[m] > 0.0 { (value.max(0.0) / maxima[m] * BAR_SCALE) as u64 } else { 0 };
            // Month label sits under the middle bar
            let label = if m == 1 { app.chart.labels[i].clone() } else { String::new() };
            let color = if i == app.current_month_index { measure_color(*measure) } else { THEME.muted };
            bar_data.push((label, scaled, color, format_amount(value)));
        }

        // Spacer
        bar_data.push((String::new(), 0, Color::Reset, String::new()));
    }

    let bar_items: Vec<Bar> = bar_data.iter().map(|(label, value, color, text)| {
        Bar::default()
            .label(label.as_str())
            .value(*value)
            .style(Style::default().fg(*color))
            .text_value(text.clone())
    }).collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Monthly Breakdown ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(7)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bar_items))
        .max(BAR_SCALE as u64);

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, app: &StatsApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Stats
            Constraint::Min(1),    // Share of total
        ])
        .split(area);

    let i = app.current_month_index;
    let mut info_text = vec![
        Line::from(vec![Span::styled("Overview", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
    ];
    for measure in Measure::ALL {
        info_text.push(Line::from(vec![
            Span::styled(format!("{:<15}", measure.label()), Style::default().fg(THEME.muted)),
            Span::styled(
                format_amount(app.value(measure, i)),
                Style::default().fg(measure_color(measure)).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    info_text.push(Line::from(""));
    info_text.push(Line::from(vec![
        Span::styled("All months km:  ", Style::default().fg(THEME.muted)),
        Span::styled(format_amount(app.grand_total.distance_km), Style::default().fg(THEME.text)),
    ]));

    let info_block = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Summary "));
    frame.render_widget(info_block, chunks[0]);

    let ratio = if app.grand_total.distance_km > 0.0 {
        (app.value(Measure::Distance, i) / app.grand_total.distance_km).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Share of Distance ").borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)))
        .gauge_style(Style::default().fg(measure_color(Measure::Distance)))
        .ratio(ratio)
        .label(format!("{:.0}% of all km", ratio * 100.0));

    frame.render_widget(gauge, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use triplog_core::{chart_series, MonthlyStats};

    fn chart_with(months: &[&str]) -> ChartSeries {
        let mut stats = MonthlyStats::new();
        for (i, m) in months.iter().enumerate() {
            stats.add(m, i as f64 + 1.0, 0.0, 0.0);
        }
        chart_series(&stats)
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut app = StatsApp::new(chart_with(&["2025-04", "2025-05"]), Totals::default());
        assert_eq!(app.current_label(), Some("2025-05"));

        app.next_month();
        assert_eq!(app.current_month_index, 1);
        app.previous_month();
        app.previous_month();
        assert_eq!(app.current_label(), Some("2025-04"));
    }

    #[test]
    fn test_value_lookup() {
        let app = StatsApp::new(chart_with(&["2025-04", "2025-05"]), Totals::default());
        assert_eq!(app.value(Measure::Distance, 1), 2.0);
        assert_eq!(app.value(Measure::Fuel, 1), 0.0);
        assert_eq!(app.value(Measure::Distance, 9), 0.0);
    }

    #[test]
    fn test_visible_range() {
        let months: Vec<String> = (1..=9).map(|m| format!("2025-{:02}", m)).collect();
        let refs: Vec<&str> = months.iter().map(String::as_str).collect();
        let mut app = StatsApp::new(chart_with(&refs), Totals::default());

        assert_eq!(app.visible_range(), 3..9);
        app.current_month_index = 1;
        assert_eq!(app.visible_range(), 0..6);

        let small = StatsApp::new(chart_with(&["2025-01", "2025-02"]), Totals::default());
        assert_eq!(small.visible_range(), 0..2);
    }

    #[test]
    fn test_measure_colors_parse() {
        for measure in Measure::ALL {
            assert_ne!(measure_color(measure), Color::Reset);
        }
    }
}
