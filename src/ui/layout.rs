use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the app column gets; wider terminals show a border of backdrop.
pub const PHONE_WIDTH: u16 = 60;
pub const APP_BAR_HEIGHT: u16 = 3;
pub const BOTTOM_NAV_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub body: Rect,
    pub bottom_nav: Option<Rect>,
    /// Row used for transient messages, just above the bottom navigation.
    pub toast: Rect,
}

/// Center a phone-width column in `area`.
pub fn phone_frame(area: Rect) -> Rect {
    let width = area.width.min(PHONE_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

pub fn compute_layout(area: Rect, bottom_nav: bool) -> AppLayout {
    let nav_height = if bottom_nav { BOTTOM_NAV_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),             // Screen body
            Constraint::Length(nav_height), // Bottom navigation
        ])
        .split(area);

    let body = chunks[0];
    let toast = Rect::new(
        body.x,
        body.bottom().saturating_sub(1).max(body.y),
        body.width,
        body.height.min(1),
    );

    AppLayout {
        body,
        bottom_nav: bottom_nav.then_some(chunks[1]).filter(|r| !r.is_empty()),
        toast,
    }
}

/// Split `area` into a fixed-height header and the remainder.
pub fn split_top(area: Rect, height: u16) -> (Rect, Rect) {
    let height = height.min(area.height);
    let top = Rect::new(area.x, area.y, area.width, height);
    let rest = Rect::new(area.x, area.y + height, area.width, area.height - height);
    (top, rest)
}

/// Split `area` into the remainder and a fixed-height footer.
pub fn split_bottom(area: Rect, height: u16) -> (Rect, Rect) {
    let height = height.min(area.height);
    let rest = Rect::new(area.x, area.y, area.width, area.height - height);
    let bottom = Rect::new(area.x, area.y + area.height - height, area.width, height);
    (rest, bottom)
}

/// Inset `area` by `h` columns and `v` rows on every side.
pub fn inset(area: Rect, h: u16, v: u16) -> Rect {
    let width = area.width.saturating_sub(h * 2);
    let height = area.height.saturating_sub(v * 2);
    Rect::new(
        area.x + h.min(area.width / 2),
        area.y + v.min(area.height / 2),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_frame_centers_and_caps_width() {
        assert_eq!(phone_frame(Rect::new(0, 0, 100, 30)), Rect::new(20, 0, 60, 30));
        assert_eq!(phone_frame(Rect::new(0, 0, 40, 30)), Rect::new(0, 0, 40, 30));
    }

    #[test]
    fn bottom_nav_takes_last_rows() {
        let l = compute_layout(Rect::new(0, 0, 60, 30), true);
        assert_eq!(l.body, Rect::new(0, 0, 60, 27));
        assert_eq!(l.bottom_nav, Some(Rect::new(0, 27, 60, 3)));
        assert_eq!(l.toast, Rect::new(0, 26, 60, 1));

        let l = compute_layout(Rect::new(0, 0, 60, 30), false);
        assert_eq!(l.body.height, 30);
        assert!(l.bottom_nav.is_none());
    }

    #[test]
    fn splits_never_overflow() {
        let area = Rect::new(2, 2, 10, 2);
        let (top, rest) = split_top(area, 5);
        assert_eq!(top.height, 2);
        assert_eq!(rest.height, 0);
        let (rest, bottom) = split_bottom(area, 1);
        assert_eq!((rest.height, bottom.y), (1, 3));
        assert_eq!(inset(Rect::new(0, 0, 1, 1), 2, 2).width, 0);
    }
}
