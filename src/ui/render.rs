//! Drawing code for the dashboard
//!
//! Pure presentation: everything rendered here comes from [`App`] state
//! that the pipeline already validated and sanitized.

use super::form::Field;
use super::{App, Phase};
use crate::models::AGE_BUCKETS;
use crate::pipeline::QueryOutcome;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

pub(super) fn draw(frame: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(0)])
        .split(outer[0]);

    draw_sidebar(frame, body[0], app);
    draw_main(frame, body[1], app);
    draw_status(frame, outer[1], app);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(app.status.as_str()).style(Style::default().fg(Color::Gray));
    frame.render_widget(status, area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if !app.session_credentials().is_complete() {
        lines.push(Line::from(Span::styled(
            "⚠ credentials not configured",
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    for field in Field::ORDER {
        let value = field_value(app, field);
        let focused = app.form.focus == field;

        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}: ", field.label()), label_style),
            Span::raw(value),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "age codes:",
        Style::default().fg(Color::DarkGray),
    )));
    for chunk in AGE_BUCKETS.chunks(4) {
        let text = chunk
            .iter()
            .map(|(code, range)| format!("{code}={range}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let sidebar = Paragraph::new(lines)
        .block(Block::default().title(" Query ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(sidebar, area);
}

fn field_value(app: &App, field: Field) -> String {
    match field {
        Field::StartDate => app.form.start_date.clone(),
        Field::EndDate => app.form.end_date.clone(),
        Field::TimeUnit => app.form.time_unit.as_str().to_string(),
        Field::Device => opt_label(app.form.device.map(|d| d.as_str())),
        Field::Gender => opt_label(app.form.gender.map(|g| g.as_str())),
        Field::Ages => app.form.ages.clone(),
        Field::Keywords => app.form.keywords.clone(),
        Field::ClientId => mask_unless_empty(&app.form.client_id),
        Field::ClientSecret => mask_unless_empty(&app.form.client_secret),
    }
}

fn opt_label(value: Option<&str>) -> String {
    value.unwrap_or("all").to_string()
}

// Session credential entry is shown masked, like any password prompt.
fn mask_unless_empty(value: &str) -> String {
    "*".repeat(value.chars().count())
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App) {
    match &app.phase {
        Phase::Idle => draw_message(frame, area, "Press Enter to run a query.", Color::Gray),
        Phase::Loading => draw_message(frame, area, "Loading...", Color::Yellow),
        Phase::Failed(message) => draw_message(frame, area, message, Color::Red),
        Phase::Ready(outcome) if outcome.ranking.is_empty() => draw_message(
            frame,
            area,
            "No data for this period/keywords. Adjust the range or keywords.",
            Color::Gray,
        ),
        Phase::Ready(outcome) => draw_results(frame, area, app, outcome),
    }
}

fn draw_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .block(Block::default().title(" Results ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App, outcome: &QueryOutcome) {
    let table_height = outcome.ranking.len() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(table_height), Constraint::Min(0)])
        .split(area);

    draw_ranking(frame, chunks[0], outcome);
    draw_news(frame, chunks[1], app, outcome);
}

fn draw_ranking(frame: &mut Frame, area: Rect, outcome: &QueryOutcome) {
    let header = Row::new(["#", "Keyword", "Avg", "Max", "Last"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = outcome
        .ranking
        .iter()
        .enumerate()
        .map(|(i, ranked)| {
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(ranked.keyword.clone()),
                Cell::from(format!("{:.1}", ranked.avg_ratio)),
                Cell::from(format!("{:.1}", ranked.max_ratio)),
                Cell::from(format!("{:.1}", ranked.last_ratio)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Interest ranking (relative index) ")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

fn draw_news(frame: &mut Frame, area: Rect, app: &App, outcome: &QueryOutcome) {
    let mut lines: Vec<Line> = Vec::new();

    for section in &outcome.news {
        lines.push(Line::from(Span::styled(
            format!("🔎 {}", section.keyword),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        if let Some(error) = &section.error {
            lines.push(Line::from(Span::styled(
                format!("  {}", error.user_message()),
                Style::default().fg(Color::Red),
            )));
        } else if section.items.is_empty() {
            lines.push(Line::from(Span::styled(
                "  no related news",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for item in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("  • "),
                    Span::styled(item.title.clone(), Style::default().fg(Color::White)),
                ]));
                if !item.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", item.description),
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("    {}", item.link),
                    Style::default().fg(Color::Blue),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let news = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Latest news per keyword (Up/Down to scroll) ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.news_scroll, 0));

    frame.render_widget(news, area);
}
