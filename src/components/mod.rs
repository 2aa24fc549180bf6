//! Material-style building blocks shared by every screen.

pub mod button;
pub mod card;
pub mod fab;
pub mod input;
pub mod ripple;

pub use button::{Button, ButtonColor, ButtonStyle, ButtonVariant};
pub use card::Card;
pub use fab::{Fab, FabColor};
pub use input::{LabelPlacement, TextInput};

use crate::ui::hit::SurfaceId;
use ratatui::prelude::*;
use ripple::{RippleController, RippleId, RipplePolicy};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Ripple controllers for the surfaces mounted on the current screen.
///
/// A controller is created on a surface's first pointer-down and lives until
/// the screen is left. `unmount_all` drops every controller together with its
/// pending clear timer, so no timer can outlive its surface.
#[derive(Debug)]
pub struct Surfaces {
    controllers: HashMap<SurfaceId, RippleController>,
    lifetime: Duration,
    policy: RipplePolicy,
}

impl Surfaces {
    pub fn new(lifetime: Duration, policy: RipplePolicy) -> Self {
        Self {
            controllers: HashMap::new(),
            lifetime,
            policy,
        }
    }

    pub fn pointer_down(&mut self, surface: SurfaceId, x: u16, y: u16, now: Instant) -> RippleId {
        let (lifetime, policy) = (self.lifetime, self.policy);
        self.controllers
            .entry(surface)
            .or_insert_with(|| RippleController::new(lifetime, policy))
            .pointer_down(x, y, now)
    }

    pub fn get(&self, surface: SurfaceId) -> Option<&RippleController> {
        self.controllers.get(&surface)
    }

    /// Poll every live controller. Returns `true` if any batch was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut cleared = false;
        for controller in self.controllers.values_mut() {
            cleared |= controller.tick(now);
        }
        cleared
    }

    /// Whether any ripple is still animating.
    pub fn animating(&self) -> bool {
        self.controllers.values().any(|c| !c.is_idle())
    }

    pub fn unmount_all(&mut self) {
        let pending = self.controllers.values().filter(|c| c.is_armed()).count();
        if pending > 0 {
            debug!(pending, "cancelling ripple timers on unmount");
        }
        self.controllers.clear();
    }

    #[cfg(test)]
    pub fn mounted(&self) -> usize {
        self.controllers.len()
    }

    /// Paint the ripples of `surface` over `area`.
    pub fn paint(&self, buf: &mut Buffer, surface: SurfaceId, area: Rect, tint: Color, now: Instant) {
        if let Some(controller) = self.get(surface) {
            controller.paint(buf, area, tint, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controllers_are_per_surface() {
        let t0 = Instant::now();
        let mut s = Surfaces::new(Duration::from_millis(600), RipplePolicy::Batch);
        s.pointer_down(SurfaceId::OpenChat, 1, 0, t0);
        s.pointer_down(SurfaceId::RequestJoin, 1, 0, t0 + Duration::from_millis(300));
        assert_eq!(s.mounted(), 2);
        assert!(s.tick(t0 + Duration::from_millis(600)));
        assert!(s.get(SurfaceId::OpenChat).unwrap().is_idle());
        assert!(!s.get(SurfaceId::RequestJoin).unwrap().is_idle());
        assert!(s.animating());
    }

    #[test]
    fn unmount_cancels_pending_clears() {
        let t0 = Instant::now();
        let mut s = Surfaces::new(Duration::from_millis(600), RipplePolicy::Batch);
        s.pointer_down(SurfaceId::SendMessage, 0, 0, t0);
        s.unmount_all();
        assert_eq!(s.mounted(), 0);
        assert!(!s.tick(t0 + Duration::from_secs(1)));
        assert!(!s.animating());
    }
}
