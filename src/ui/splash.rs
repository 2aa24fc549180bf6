use crate::app::action::Action;
use crate::app::nav::Screen;
use crate::app::state::AppState;
use crate::components::{Button, ButtonColor};
use crate::ui::hit::{HitMap, SurfaceId};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::PRIMARY).fg(Theme::WHITE)),
        area,
    );

    let spinner = SPINNER[(state.tick_count as usize / 2) % SPINNER.len()];
    let lines = vec![
        Line::from(Span::styled(
            "( ◎ )",
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "StudyCircle",
            Style::default().fg(Theme::WHITE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "FIND. JOIN. LEARN.",
            Style::default().fg(Theme::GREY_200),
        )),
        Line::from(""),
        Line::from(spinner),
    ];
    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let logo = Rect::new(area.x, top, area.width, height.min(area.bottom() - top));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), logo);

    // Only reachable after logout: the boot timer never re-arms.
    if !state.boot_timer.is_armed() {
        let button = Button::new(SurfaceId::SignIn, "Sign in")
            .color(ButtonColor::Accent)
            .on_press(Action::go(Screen::Home));
        let width = button.width().min(area.width);
        let y = logo.bottom().saturating_add(1);
        if y < area.bottom() {
            let rect = Rect::new(area.x + (area.width - width) / 2, y, width, 1);
            button.render(frame, rect, &state.surfaces, state.now, hits);
        }
    }
}
