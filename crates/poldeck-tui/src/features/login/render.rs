//! Login screen view.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::state::{LoginField, LoginState};

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the login screen centered in `area`.
pub fn render_login(frame: &mut Frame, login: &LoginState, area: Rect) {
    let popup_width = 48.min(area.width);
    let popup_height = 10.min(area.height);
    let popup_area = Rect::new(
        area.x + (area.width.saturating_sub(popup_width)) / 2,
        area.y + (area.height.saturating_sub(popup_height)) / 2,
        popup_width,
        popup_height,
    );

    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, popup_area);

    let inner = Rect::new(
        popup_area.x + 2,
        popup_area.y + 1,
        popup_area.width.saturating_sub(4),
        popup_area.height.saturating_sub(2),
    );

    let para = Paragraph::new(render_login_lines(login));
    frame.render_widget(para, inner);
}

fn render_login_lines(login: &LoginState) -> Vec<Line<'static>> {
    let mut lines = vec![
        field_line("Username", &login.username, false, login.focus == LoginField::Username),
        Line::from(""),
        field_line("Password", &login.password, true, login.focus == LoginField::Password),
        Line::from(""),
    ];

    if login.is_submitting() {
        let spinner = SPINNER_FRAMES[login.spinner_frame % SPINNER_FRAMES.len()];
        lines.push(Line::from(Span::styled(
            format!("{spinner} Signing in..."),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = login.error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab switch field · Enter sign in · Esc quit",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn field_line(label: &str, value: &str, masked: bool, focused: bool) -> Line<'static> {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "▏" } else { "" };
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!("{label:>9}: "), label_style),
        Span::styled(format!("{shown}{cursor}"), value_style),
    ])
}
