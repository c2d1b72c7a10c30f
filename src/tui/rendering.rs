use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::layout::CardLayout;
use crate::models::TimezoneView;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const SURFACE: Color = Color::Rgb(24, 24, 27);

/// Everything the card needs to draw one frame
pub struct RenderState<'a> {
    pub trigger: &'a str,
    pub label: &'a str,
    pub views: &'a [TimezoneView],
    pub open: bool,
    pub focused: bool,
    pub hovered: bool,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, layout: &CardLayout, state: &RenderState) {
    render_trigger(frame, layout.trigger_area, state);
    if state.open {
        render_detail(frame, layout.detail_area, state.label, state.views);
    }
    render_status_bar(frame, layout.status_area, state);
}

fn render_trigger(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text_style, border_style) = if state.focused || state.hovered {
        (Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD), Style::default().fg(ACCENT))
    } else {
        (Style::default().fg(MUTED), Style::default().fg(MUTED))
    };

    let paragraph = Paragraph::new(Span::styled(state.trigger, text_style))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}

fn render_detail(frame: &mut Frame, area: Rect, label: &str, views: &[TimezoneView]) {
    let mut lines = vec![Line::from(Span::styled(label, Style::default().fg(MUTED))), Line::from("")];

    for view in views {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", view.name), Style::default().fg(BRIGHT).bg(SURFACE)),
            Span::raw("  "),
            Span::raw(view.date.as_str()),
            Span::raw("  "),
            Span::styled(view.time.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Timezones "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut parts = vec![];
    if state.open {
        parts.push("[OPEN]");
    }
    parts.push("Hover or Tab: show timezones");
    parts.push("p: pin");
    parts.push("q/Esc: quit");

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(SURFACE));

    frame.render_widget(paragraph, area);
}
