use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Material indigo / pink palette
    pub const PRIMARY: Color = Color::Rgb(63, 81, 181);
    pub const PRIMARY_DARK: Color = Color::Rgb(48, 63, 159);
    pub const ACCENT: Color = Color::Rgb(255, 64, 129);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const SURFACE: Color = Color::Rgb(250, 250, 250);
    pub const CHAT_BG: Color = Color::Rgb(224, 224, 224);
    pub const GREY_200: Color = Color::Rgb(229, 231, 235);
    pub const GREY_400: Color = Color::Rgb(156, 163, 175);
    pub const GREY_500: Color = Color::Rgb(107, 114, 128);
    pub const GREY_700: Color = Color::Rgb(55, 65, 81);
    pub const TEXT: Color = Color::Rgb(17, 24, 39);
    pub const BACKDROP: Color = Color::Rgb(40, 40, 40);

    /// Composite `over` at `alpha` onto an opaque `base`. Non-RGB inputs
    /// return `over` unchanged.
    pub fn blend(base: Color, over: Color, alpha: f32) -> Color {
        match (base, over) {
            (Color::Rgb(br, bg, bb), Color::Rgb(or, og, ob)) => {
                let mix = |b: u8, o: u8| {
                    (f32::from(b) * (1.0 - alpha) + f32::from(o) * alpha).round() as u8
                };
                Color::Rgb(mix(br, or), mix(bg, og), mix(bb, ob))
            }
            _ => over,
        }
    }

    /// Ripple over a filled surface (white at 30%).
    pub fn ripple_light(fill: Color) -> Color {
        Self::blend(fill, Self::WHITE, 0.3)
    }

    /// Ripple over a flat surface (black at 10%).
    pub fn ripple_dark() -> Color {
        Self::blend(Self::SURFACE, Color::Rgb(0, 0, 0), 0.1)
    }

    pub fn app_bar() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn screen() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn caption() -> Style {
        Style::default()
            .fg(Self::GREY_500)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::GREY_700)
    }

    pub fn subject_tag() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_border() -> Style {
        Style::default().fg(Self::GREY_400)
    }

    pub fn card_border_accent() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn chip() -> Style {
        Style::default().fg(Self::WHITE).bg(Self::PRIMARY)
    }

    pub fn chip_selected() -> Style {
        Style::default()
            .fg(Self::PRIMARY_DARK)
            .bg(Self::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row() -> Style {
        Style::default().bg(Self::GREY_200)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_inactive() -> Style {
        Style::default().fg(Self::GREY_400)
    }

    pub fn bubble_own() -> Style {
        Style::default().fg(Self::WHITE).bg(Self::PRIMARY)
    }

    pub fn bubble_other() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::WHITE)
    }

    pub fn toast() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .bg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn input_idle() -> Style {
        Style::default().fg(Self::GREY_400)
    }
}
