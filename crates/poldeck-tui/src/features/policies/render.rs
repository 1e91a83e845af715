//! Policy list and detail views.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use poldeck_core::api::Policy;

use super::state::{PolicyDetailState, PolicyListState};

/// Renders the policy list.
pub fn render_list(frame: &mut Frame, list: &PolicyListState, area: Rect) {
    let block = Block::default().title(" Policies ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = list
        .policies
        .iter()
        .enumerate()
        .map(|(idx, policy)| row_line(policy, idx == list.selected))
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No policies.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select · Enter open · q quit",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn row_line(policy: &Policy, selected: bool) -> Line<'static> {
    let pointer = if selected { ">" } else { " " };
    let style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(format!("{pointer} {:<16}", policy.policy_number), style),
        Span::styled(
            policy.status.clone(),
            Style::default().fg(status_color(&policy.status)),
        ),
    ])
}

/// Renders the policy detail. Nothing is drawn inside the frame until the
/// fetch resolves; an absent route id stays blank.
pub fn render_detail(frame: &mut Frame, detail: &PolicyDetailState, area: Rect) {
    let title = match &detail.policy {
        Some(policy) => format!(" Policy {} ", policy.policy_number),
        None => " Policy ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(policy) = &detail.policy else {
        return;
    };

    let lines = vec![
        detail_line("Id", policy.id.to_string()),
        detail_line("Number", policy.policy_number.clone()),
        Line::from(vec![
            Span::styled("  Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                policy.status.clone(),
                Style::default().fg(status_color(&policy.status)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc back · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn status_color(status: &str) -> Color {
    match status {
        "ACTIVE" => Color::Green,
        "EXPIRED" | "CANCELLED" => Color::Red,
        _ => Color::Yellow,
    }
}
