//! Single-line text field with a floating label.
//!
//! The label rests inside the field like a placeholder while the field is
//! blurred and empty, and floats into the top border once the field is focused
//! or holds text.

use crate::app::action::{Action, InputId};
use crate::components::Surfaces;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Where the label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Small label in the field's top border.
    Floated,
    /// Placeholder-sized label inside the field, shifted right by `indent`
    /// cells to clear the icon.
    Resting { indent: u16 },
}

/// Cells reserved for an icon glyph and its gap.
const ICON_INDENT: u16 = 2;

pub fn label_placement(focused: bool, value: &str, has_icon: bool) -> LabelPlacement {
    if focused || !value.is_empty() {
        LabelPlacement::Floated
    } else if has_icon {
        LabelPlacement::Resting {
            indent: ICON_INDENT,
        }
    } else {
        LabelPlacement::Resting { indent: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct TextInput {
    id: InputId,
    label: Option<String>,
    icon: Option<&'static str>,
    value: String,
    /// Byte offset into `value`.
    cursor: usize,
    focused: bool,
}

impl TextInput {
    pub fn new(id: InputId) -> Self {
        Self {
            id,
            label: None,
            icon: None,
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn surface(&self) -> SurfaceId {
        match self.id {
            InputId::Search => SurfaceId::SearchInput,
            InputId::Chat => SurfaceId::ChatInput,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn placement(&self) -> LabelPlacement {
        label_placement(self.focused, &self.value, self.icon.is_some())
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            let next = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
            self.value.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Clear the field and return what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Display column of the cursor within the text.
    pub fn cursor_column(&self) -> u16 {
        self.value[..self.cursor].width() as u16
    }

    /// Height the field needs: border, text row, border.
    pub const HEIGHT: u16 = 3;

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        surfaces: &Surfaces,
        now: Instant,
        hits: &mut HitMap,
    ) {
        let area = Rect::new(area.x, area.y, area.width, area.height.min(Self::HEIGHT));
        let (border, accent) = if self.focused {
            (Theme::input_focused(), Theme::PRIMARY)
        } else {
            (Theme::input_idle(), Theme::TEXT)
        };
        let placement = self.placement();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .style(Style::default().bg(Theme::WHITE).fg(Theme::TEXT));
        if let (Some(label), LabelPlacement::Floated) = (&self.label, placement) {
            block = block.title(Span::styled(
                format!(" {label} "),
                Style::default().fg(Theme::PRIMARY).add_modifier(Modifier::BOLD),
            ));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        let buf = frame.buffer_mut();
        surfaces.paint(buf, self.surface(), inner, Theme::ripple_dark(), now);

        let mut text_x = inner.x;
        if let Some(icon) = self.icon {
            buf.set_string(text_x, inner.y, icon, Style::default().fg(accent));
            text_x += ICON_INDENT;
        }
        let text_w = inner.right().saturating_sub(text_x);

        match (placement, &self.label) {
            (LabelPlacement::Resting { indent }, Some(label)) => {
                buf.set_stringn(
                    inner.x + indent,
                    inner.y,
                    label,
                    inner.width.saturating_sub(indent) as usize,
                    Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
                );
            }
            _ => {
                buf.set_stringn(
                    text_x,
                    inner.y,
                    &self.value,
                    text_w as usize,
                    Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
                );
            }
        }

        if self.focused {
            let x = (text_x + self.cursor_column()).min(inner.right().saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }

        hits.push(Hit::new(self.surface(), area, Some(Action::FocusInput(self.id))).rippling());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_rests_only_when_blurred_and_empty() {
        for icon in [false, true] {
            assert_eq!(label_placement(true, "", icon), LabelPlacement::Floated);
            assert_eq!(label_placement(false, "calc", icon), LabelPlacement::Floated);
            assert_eq!(label_placement(true, "calc", icon), LabelPlacement::Floated);
        }
        assert_eq!(
            label_placement(false, "", false),
            LabelPlacement::Resting { indent: 0 }
        );
        assert_eq!(
            label_placement(false, "", true),
            LabelPlacement::Resting { indent: ICON_INDENT }
        );
    }

    #[test]
    fn focus_and_blur_toggle_placement() {
        let mut input = TextInput::new(InputId::Search)
            .with_label("Search groups")
            .with_icon("⌕");
        assert_eq!(input.placement(), LabelPlacement::Resting { indent: 2 });
        input.focus();
        assert_eq!(input.placement(), LabelPlacement::Floated);
        input.insert_char('x');
        input.blur();
        assert_eq!(input.placement(), LabelPlacement::Floated);
        input.take();
        assert_eq!(input.placement(), LabelPlacement::Resting { indent: 2 });
    }

    #[test]
    fn editing_handles_multibyte_chars() {
        let mut input = TextInput::new(InputId::Chat);
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.cursor_column(), 5);
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.value(), "éllo");
        input.delete_forward();
        assert_eq!(input.value(), "llo");
        input.move_end();
        input.insert_char('!');
        input.move_home();
        input.insert_char('>');
        assert_eq!(input.value(), ">llo!");
        assert_eq!(input.take(), ">llo!");
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor_column(), 0);
    }

    #[test]
    fn wide_chars_advance_cursor_by_display_width() {
        let mut input = TextInput::new(InputId::Chat);
        input.insert_char('学');
        input.insert_char('a');
        assert_eq!(input.cursor_column(), 3);
        input.move_left();
        input.move_right();
        assert_eq!(input.cursor_column(), 3);
    }
}
