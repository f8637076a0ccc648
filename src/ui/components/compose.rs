//! Compose Component
//!
//! To / Subject / Body form shown while in INSERT mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::controller::Prefill;
use crate::input::keymap::TextAction;
use crate::mail::Draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    MultiLine,
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub field_type: FieldType,
}

impl FormField {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            field_type: FieldType::Text,
        }
    }

    pub fn multiline(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            field_type: FieldType::MultiLine,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

/// Compose form state; `cursor` counts chars in the active field
#[derive(Debug, Clone)]
pub struct ComposeForm {
    pub fields: Vec<FormField>,
    pub active_field: usize,
    pub cursor: usize,
    pub is_reply: bool,
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text("To"),
                FormField::text("Subject"),
                FormField::multiline("Body"),
            ],
            active_field: 0,
            cursor: 0,
            is_reply: false,
        }
    }

    /// Reply prefill lands the cursor in the body
    pub fn with_prefill(prefill: &Prefill) -> Self {
        let mut form = Self::new();
        if prefill == &Prefill::default() {
            return form;
        }
        form.fields[0] = FormField::text("To").with_value(&prefill.to);
        form.fields[1] = FormField::text("Subject").with_value(&prefill.subject);
        form.is_reply = true;
        form.active_field = 2;
        form
    }

    pub fn active_field(&self) -> &FormField {
        &self.fields[self.active_field]
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.fields.len();
        self.cursor = self.fields[self.active_field].char_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field == 0 {
            self.active_field = self.fields.len() - 1;
        } else {
            self.active_field -= 1;
        }
        self.cursor = self.fields[self.active_field].char_count();
    }

    pub fn insert_char(&mut self, c: char) {
        let field = &mut self.fields[self.active_field];
        let at = field.byte_index(self.cursor);
        field.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let field = &mut self.fields[self.active_field];
        let at = field.byte_index(self.cursor);
        field.value.remove(at);
    }

    pub fn delete_char_forward(&mut self) {
        let field = &mut self.fields[self.active_field];
        if self.cursor < field.char_count() {
            let at = field.byte_index(self.cursor);
            field.value.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.active_field().char_count() {
            self.cursor += 1;
        }
    }

    /// Apply an editing action; `Submit` is left to the caller
    pub fn apply(&mut self, action: TextAction) {
        match action {
            TextAction::InsertChar(c) => self.insert_char(c),
            TextAction::Newline => match self.active_field().field_type {
                FieldType::MultiLine => self.insert_char('\n'),
                FieldType::Text => self.next_field(),
            },
            TextAction::DeleteChar => self.delete_char(),
            TextAction::DeleteCharForward => self.delete_char_forward(),
            TextAction::CursorLeft => self.cursor_left(),
            TextAction::CursorRight => self.cursor_right(),
            TextAction::CursorHome => self.cursor = 0,
            TextAction::CursorEnd => self.cursor = self.active_field().char_count(),
            TextAction::ClearLine => {
                self.fields[self.active_field].value.clear();
                self.cursor = 0;
            }
            TextAction::NextField => self.next_field(),
            TextAction::PrevField => self.prev_field(),
            TextAction::Submit | TextAction::None => {}
        }
    }

    /// A draft is sendable once every field has content
    pub fn validate(&self) -> Result<Draft, String> {
        for field in &self.fields {
            if field.value.is_empty() {
                return Err(format!("{} is required", field.label));
            }
        }
        Ok(Draft {
            to: self.fields[0].value.clone(),
            subject: self.fields[1].value.clone(),
            body: self.fields[2].value.clone(),
        })
    }
}

/// Compose form widget
pub struct ComposeWidget<'a> {
    form: &'a ComposeForm,
}

impl<'a> ComposeWidget<'a> {
    pub fn new(form: &'a ComposeForm) -> Self {
        Self { form }
    }
}

impl<'a> Widget for ComposeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form_width = 72u16.min(area.width.saturating_sub(4));
        let form_height = 20u16.min(area.height.saturating_sub(2));
        let form_x = area.x + (area.width.saturating_sub(form_width)) / 2;
        let form_y = area.y + (area.height.saturating_sub(form_height)) / 2;
        let form_area = Rect::new(form_x, form_y, form_width, form_height);

        Clear.render(form_area, buf);

        let title = if self.form.is_reply { " Reply " } else { " New Message " };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(form_area);
        block.render(form_area, buf);
        if inner.height < 7 {
            return;
        }

        let label_width = 10u16;
        let value_width = inner.width.saturating_sub(label_width + 1);
        let mut y = inner.y;

        for (i, field) in self.form.fields.iter().enumerate() {
            let is_active = i == self.form.active_field;
            let label_style = if is_active {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            buf.set_string(inner.x, y, format!("{}:", field.label), label_style);

            let value_x = inner.x + label_width;
            let bg = if is_active { Color::DarkGray } else { Color::Black };

            match field.field_type {
                FieldType::Text => {
                    let row = Rect::new(value_x, y, value_width, 1);
                    buf.set_style(row, Style::default().bg(bg));
                    buf.set_stringn(value_x, y, &field.value, value_width as usize, Style::default().fg(Color::White).bg(bg));
                    if is_active {
                        set_cursor(buf, value_x + self.form.cursor as u16, y, row);
                    }
                    y += 2;
                }
                FieldType::MultiLine => {
                    let height = (inner.y + inner.height).saturating_sub(y + 1);
                    let body = Rect::new(value_x, y, value_width, height);
                    Paragraph::new(field.value.as_str())
                        .style(Style::default().fg(Color::White).bg(bg))
                        .wrap(Wrap { trim: false })
                        .render(body, buf);
                    y += height;
                }
            }
        }

        let help_y = inner.y + inner.height - 1;
        let help_text = Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Green)),
            Span::raw(" next  "),
            Span::styled("Shift+Tab", Style::default().fg(Color::Green)),
            Span::raw(" prev  "),
            Span::styled("Ctrl+s", Style::default().fg(Color::Green)),
            Span::raw(" send  "),
            Span::styled("Esc", Style::default().fg(Color::Green)),
            Span::raw(" discard"),
        ]);
        buf.set_line(inner.x, help_y, &help_text, inner.width);
    }
}

fn set_cursor(buf: &mut Buffer, x: u16, y: u16, bounds: Rect) {
    if x >= bounds.x + bounds.width {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
    }
}
