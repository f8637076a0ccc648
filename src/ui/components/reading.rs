//! Reading Pane Component
//!
//! Shows the email under the cursor and the assistant output for it.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::list::{relative_time, EmptyState};
use crate::ai::AiStatus;
use crate::mail::Email;

const AI_HEIGHT: u16 = 9;

pub struct ReadingPane<'a> {
    email: Option<&'a Email>,
    ai: &'a AiStatus,
    focused: bool,
    now: DateTime<Local>,
}

impl<'a> ReadingPane<'a> {
    pub fn new(email: Option<&'a Email>, ai: &'a AiStatus) -> Self {
        Self {
            email,
            ai,
            focused: false,
            now: Local::now(),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Assistant output that belongs to `email_id`, if any
fn ai_text(status: &AiStatus, email_id: &str) -> Option<(String, Style)> {
    match status {
        AiStatus::Loading { feature, email_id: id } if id == email_id => Some((
            format!("⠋ Generating {}...", feature.label().to_lowercase()),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
        AiStatus::Ready(response) if response.email_id == email_id => Some((
            format!("{}\n\n{}", response.feature.label(), response.text),
            Style::default().fg(Color::Gray),
        )),
        _ => None,
    }
}

impl<'a> Widget for ReadingPane<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { Color::Blue } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));

        let Some(email) = self.email else {
            let inner = block.inner(area);
            block.render(area, buf);
            EmptyState::new("No email selected")
                .hint("Press g/G to select")
                .render(inner, buf);
            return;
        };

        let block = block.title(format!(" {} ", email.subject));
        let inner = block.inner(area);
        block.render(area, buf);

        let ai = ai_text(self.ai, &email.id);
        let ai_height = if ai.is_some() { AI_HEIGHT.min(inner.height / 2) } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(ai_height)])
            .split(inner);

        let mut y = chunks[0].y;

        render_field(buf, chunks[0], &mut y, "From", &[
            Span::styled(email.from.name.as_str(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" <{}>", email.from.email), Style::default().fg(Color::DarkGray)),
        ]);
        render_field(buf, chunks[0], &mut y, "Date", &[
            Span::styled(email.timestamp.format("%b %d, %H:%M").to_string(), Style::default().fg(Color::Gray)),
            Span::styled(format!(" ({})", relative_time(email.timestamp, self.now)), Style::default().fg(Color::DarkGray)),
        ]);

        if !email.labels.is_empty() {
            let spans: Vec<Span> = email
                .labels
                .iter()
                .flat_map(|label| [
                    Span::styled(format!("#{}", label), Style::default().fg(Color::Magenta)),
                    Span::raw(" "),
                ])
                .collect();
            render_field(buf, chunks[0], &mut y, "Labels", &spans);
        }

        let mut extras = Vec::new();
        if email.has_attachments {
            extras.push(Span::styled("󰁦 attachments ", Style::default().fg(Color::Cyan)));
        }
        if let Some(count) = email.thread_count {
            extras.push(Span::styled(format!("{} messages in thread", count), Style::default().fg(Color::Cyan)));
        }
        if !extras.is_empty() {
            render_field(buf, chunks[0], &mut y, "", &extras);
        }

        y += 1;
        let used = y - chunks[0].y;
        let body_area = Rect::new(chunks[0].x, y, chunks[0].width, chunks[0].height.saturating_sub(used));
        Paragraph::new(email.body.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false })
            .render(body_area, buf);

        if let Some((text, style)) = ai {
            let ai_block = Block::default()
                .title(" 󰚩 AI ")
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::Magenta));
            Paragraph::new(text)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(ai_block)
                .render(chunks[1], buf);
        }
    }
}

/// One labelled header row; rows past the bottom of `area` are dropped
fn render_field(buf: &mut Buffer, area: Rect, y: &mut u16, label: &str, value: &[Span]) {
    if *y >= area.bottom() {
        return;
    }
    if !label.is_empty() {
        buf.set_stringn(area.x, *y, format!("{}:", label), area.width as usize, Style::default().fg(Color::DarkGray));
    }
    let line = Line::from(value.to_vec());
    buf.set_line(area.x + 8, *y, &line, area.width.saturating_sub(8));
    *y += 1;
}
