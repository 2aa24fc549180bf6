use super::app_bar::{self, AppBar, Leading};
use crate::app::action::Action;
use crate::app::state::AppState;
use crate::components::{Button, ButtonColor, TextInput};
use crate::data::ChatMessage;
use crate::ui::hit::{HitMap, SurfaceId};
use crate::ui::layout::split_bottom;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

const SEND_WIDTH: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let Some(group) = state.nav.group_for_view() else {
        return;
    };

    let body = app_bar::render(
        frame,
        area,
        AppBar {
            title: &group.name,
            leading: Leading::Back,
            trailing: Some((SurfaceId::MenuButton, "⋮", Action::SetDrawer(true))),
        },
        state,
        hits,
    );
    let (messages, composer) = split_bottom(body, TextInput::HEIGHT);

    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::CHAT_BG)),
        messages,
    );
    render_messages(frame, messages, &state.chat_for(group.id));

    if composer.is_empty() {
        return;
    }
    let send_w = SEND_WIDTH.min(composer.width);
    let input_area = Rect::new(
        composer.x,
        composer.y,
        composer.width - send_w,
        composer.height,
    );
    state
        .chat_input
        .render(frame, input_area, &state.surfaces, state.now, hits);

    let send_row = Rect::new(
        input_area.right(),
        composer.y + composer.height / 2,
        send_w,
        1,
    );
    Button::new(SurfaceId::SendMessage, "Send")
        .color(ButtonColor::Accent)
        .full_width(true)
        .disabled(state.chat_input.value().trim().is_empty())
        .on_press(Action::SendMessage)
        .render(frame, send_row, &state.surfaces, state.now, hits);
}

/// Bubbles are stacked from the bottom so the latest message stays visible.
fn render_messages(frame: &mut Frame, area: Rect, messages: &[ChatMessage]) {
    let area = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    if area.is_empty() {
        return;
    }
    let max_bubble = (area.width * 3 / 4).max(1) as usize;

    let mut bottom = area.bottom();
    for msg in messages.iter().rev() {
        let lines = wrap(&msg.text, max_bubble.saturating_sub(2).max(1));
        let needed = lines.len() as u16 + 2;
        if bottom < area.y + needed {
            break;
        }
        bottom -= needed;
        let buf = frame.buffer_mut();

        let caption = if msg.own {
            msg.time.clone()
        } else {
            format!("{} · {}", msg.sender, msg.time)
        };
        let bubble_w = lines
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(caption.width())
            .min(area.width as usize) as u16;
        let x = if msg.own {
            area.right() - bubble_w
        } else {
            area.x
        };

        buf.set_stringn(x, bottom, &caption, bubble_w as usize, Theme::caption());
        let style = if msg.own {
            Theme::bubble_own()
        } else {
            Theme::bubble_other()
        };
        for (i, line) in lines.iter().enumerate() {
            let y = bottom + 1 + i as u16;
            buf.set_style(Rect::new(x, y, bubble_w, 1), style);
            buf.set_stringn(x + 1, y, line, bubble_w.saturating_sub(1) as usize, style);
        }
    }
}

/// Greedy word wrap by display width.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let extra = if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && current.width() + extra + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
