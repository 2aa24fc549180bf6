use crate::app::action::Action;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Passive bordered container. A card may carry a press action, but anything
/// rendered inside it afterwards is hit-tested first.
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    id: Option<SurfaceId>,
    title: Option<&'a str>,
    accent: bool,
    on_press: Option<Action>,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Use the primary color for the border instead of grey.
    pub fn accent(mut self, accent: bool) -> Self {
        self.accent = accent;
        self
    }

    pub fn pressable(mut self, id: SurfaceId, action: Action) -> Self {
        self.id = Some(id);
        self.on_press = Some(action);
        self
    }

    fn block(&self) -> Block<'a> {
        let border = if self.accent {
            Theme::card_border_accent()
        } else {
            Theme::card_border()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .style(Style::default().bg(Theme::WHITE).fg(Theme::TEXT));
        if let Some(title) = self.title {
            block = block
                .title(format!(" {} ", title.to_uppercase()))
                .title_style(Theme::title());
        }
        block
    }

    /// Draw the frame and return the inner area for the card's children.
    pub fn render(&self, frame: &mut Frame, area: Rect, hits: &mut HitMap) -> Rect {
        let block = self.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if let Some(id) = self.id {
            hits.push(Hit::new(id, area, self.on_press.clone()));
        }
        inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::nav::Screen;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn passive_card_registers_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let mut hits = HitMap::new();
        let mut inner = Rect::default();
        terminal
            .draw(|f| inner = Card::new().render(f, f.area(), &mut hits))
            .unwrap();
        assert!(hits.is_empty());
        assert_eq!(inner, Rect::new(1, 1, 8, 2));
    }

    #[test]
    fn pressable_card_is_under_its_children() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let mut hits = HitMap::new();
        terminal
            .draw(|f| {
                let inner = Card::new()
                    .pressable(SurfaceId::GroupCard(1), Action::go(Screen::Details))
                    .render(f, f.area(), &mut hits);
                hits.push(Hit::new(
                    SurfaceId::ViewInfo(1),
                    Rect::new(inner.x, inner.y, 5, 1),
                    Some(Action::go(Screen::Details)),
                ));
            })
            .unwrap();
        assert_eq!(hits.at(1, 1).map(|h| h.surface), Some(SurfaceId::ViewInfo(1)));
        assert_eq!(hits.at(10, 3).map(|h| h.surface), Some(SurfaceId::GroupCard(1)));
    }
}
