use crate::app::action::Action;
use crate::components::Surfaces;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Text,
    #[default]
    Contained,
    Outlined,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonColor {
    #[default]
    Primary,
    Accent,
    Default,
}

/// The resolved look of one (variant, color) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub fg: Color,
    pub bg: Option<Color>,
    pub outline: Option<Color>,
    pub ripple: Color,
}

impl ButtonStyle {
    pub fn resolve(variant: ButtonVariant, color: ButtonColor) -> Self {
        use ButtonColor as C;
        use ButtonVariant as V;
        let filled = |bg: Color, fg: Color| ButtonStyle {
            fg,
            bg: Some(bg),
            outline: None,
            ripple: Theme::ripple_light(bg),
        };
        let flat = |fg: Color| ButtonStyle {
            fg,
            bg: None,
            outline: None,
            ripple: Theme::ripple_dark(),
        };
        let outlined = |line: Color, fg: Color| ButtonStyle {
            fg,
            bg: None,
            outline: Some(line),
            ripple: Theme::ripple_dark(),
        };
        match (variant, color) {
            (V::Contained, C::Primary) => filled(Theme::PRIMARY, Theme::WHITE),
            (V::Contained, C::Accent) => filled(Theme::ACCENT, Theme::WHITE),
            (V::Contained, C::Default) => filled(Theme::GREY_200, Theme::TEXT),
            (V::Text, C::Primary) => flat(Theme::PRIMARY),
            (V::Text, C::Accent) => flat(Theme::ACCENT),
            (V::Text, C::Default) => flat(Theme::GREY_700),
            (V::Outlined, C::Primary) => outlined(Theme::PRIMARY, Theme::PRIMARY),
            (V::Outlined, C::Accent) => outlined(Theme::ACCENT, Theme::ACCENT),
            (V::Outlined, C::Default) => outlined(Theme::GREY_400, Theme::GREY_700),
        }
    }
}

/// A one-row push button with an upper-cased label.
#[derive(Debug, Clone)]
pub struct Button {
    id: SurfaceId,
    label: String,
    variant: ButtonVariant,
    color: ButtonColor,
    full_width: bool,
    disabled: bool,
    on_press: Option<Action>,
}

impl Button {
    pub fn new(id: SurfaceId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into().to_uppercase(),
            variant: ButtonVariant::default(),
            color: ButtonColor::default(),
            full_width: false,
            disabled: false,
            on_press: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_press(mut self, action: Action) -> Self {
        self.on_press = Some(action);
        self
    }

    pub fn style(&self) -> ButtonStyle {
        ButtonStyle::resolve(self.variant, self.color)
    }

    /// Natural width: the label plus two cells of padding on each side.
    pub fn width(&self) -> u16 {
        (self.label.width() as u16).saturating_add(4)
    }

    /// The cells this button occupies when laid out at the start of `area`.
    pub fn footprint(&self, area: Rect) -> Rect {
        let width = if self.full_width {
            area.width
        } else {
            self.width().min(area.width)
        };
        Rect::new(area.x, area.y, width, area.height.min(1))
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        surfaces: &Surfaces,
        now: Instant,
        hits: &mut HitMap,
    ) {
        let rect = self.footprint(area);
        if rect.is_empty() {
            return;
        }
        let style = self.style();

        let mut base = Style::default().fg(style.fg).add_modifier(Modifier::BOLD);
        if let Some(bg) = style.bg {
            base = base.bg(bg);
        }
        if self.disabled {
            base = base.add_modifier(Modifier::DIM);
        }

        let buf = frame.buffer_mut();
        buf.set_style(rect, base);
        if !self.disabled {
            surfaces.paint(buf, self.id, rect, style.ripple, now);
        }

        let label_w = self.label.width() as u16;
        let label_x = rect.x + rect.width.saturating_sub(label_w) / 2;
        buf.set_stringn(
            label_x,
            rect.y,
            &self.label,
            rect.width.saturating_sub(label_x - rect.x) as usize,
            Style::default(),
        );
        if let Some(line) = style.outline {
            let edge = Style::default().fg(line);
            buf.set_string(rect.x, rect.y, "[", edge);
            buf.set_string(rect.right().saturating_sub(1), rect.y, "]", edge);
        }

        hits.push(
            Hit::new(self.id, rect, self.on_press.clone())
                .rippling()
                .enabled(!self.disabled),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::nav::Screen;
    use crate::components::ripple::RipplePolicy;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::collections::HashSet;
    use std::time::Duration;

    const VARIANTS: [ButtonVariant; 3] = [
        ButtonVariant::Text,
        ButtonVariant::Contained,
        ButtonVariant::Outlined,
    ];
    const COLORS: [ButtonColor; 3] = [ButtonColor::Primary, ButtonColor::Accent, ButtonColor::Default];

    #[test]
    fn defaults_are_contained_primary() {
        let b = Button::new(SurfaceId::OpenChat, "Open Chat");
        assert_eq!(b.style(), ButtonStyle::resolve(ButtonVariant::Contained, ButtonColor::Primary));
    }

    #[test]
    fn resolution_is_total_deterministic_and_distinct() {
        let mut seen = HashSet::new();
        for v in VARIANTS {
            for c in COLORS {
                let a = ButtonStyle::resolve(v, c);
                assert_eq!(a, ButtonStyle::resolve(v, c));
                seen.insert((a.fg, a.bg, a.outline));
            }
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn only_contained_buttons_are_filled() {
        for c in COLORS {
            assert!(ButtonStyle::resolve(ButtonVariant::Contained, c).bg.is_some());
            assert!(ButtonStyle::resolve(ButtonVariant::Text, c).bg.is_none());
            let outlined = ButtonStyle::resolve(ButtonVariant::Outlined, c);
            assert!(outlined.bg.is_none() && outlined.outline.is_some());
        }
    }

    #[test]
    fn footprint_respects_full_width() {
        let area = Rect::new(2, 3, 40, 2);
        let b = Button::new(SurfaceId::ApplyFilters, "Apply");
        assert_eq!(b.footprint(area), Rect::new(2, 3, 9, 1));
        let b = b.full_width(true);
        assert_eq!(b.footprint(area), Rect::new(2, 3, 40, 1));
    }

    #[test]
    fn render_registers_hit_and_label() {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        let surfaces = Surfaces::new(Duration::from_millis(600), RipplePolicy::Batch);
        let mut hits = HitMap::new();
        let button = Button::new(SurfaceId::OpenChat, "chat")
            .color(ButtonColor::Accent)
            .on_press(Action::go(Screen::Chat));
        terminal
            .draw(|f| button.render(f, f.area(), &surfaces, Instant::now(), &mut hits))
            .unwrap();
        let hit = hits.find(SurfaceId::OpenChat).unwrap();
        assert!(hit.enabled && hit.ripples);
        assert_eq!(hit.action, Some(Action::go(Screen::Chat)));
        let row: String = (0..8)
            .map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
            .collect();
        assert_eq!(row, "  CHAT  ");
    }

    #[test]
    fn disabled_button_registers_disabled_hit() {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        let surfaces = Surfaces::new(Duration::from_millis(600), RipplePolicy::Batch);
        let mut hits = HitMap::new();
        let button = Button::new(SurfaceId::SendMessage, "Send")
            .disabled(true)
            .on_press(Action::SendMessage);
        terminal
            .draw(|f| button.render(f, f.area(), &surfaces, Instant::now(), &mut hits))
            .unwrap();
        assert!(!hits.find(SurfaceId::SendMessage).unwrap().enabled);
    }
}
