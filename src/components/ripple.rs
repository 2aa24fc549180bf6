//! Ripple feedback for interactive surfaces.
//!
//! Each surface owns one `RippleController`. A pointer-down appends a ripple;
//! a single timer per controller clears the whole batch at once. The timer is
//! owned data, so unmounting the surface (dropping the controller) cancels it.

use crate::app::timer::OneShot;
use ratatui::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::trace;

pub type RippleId = u64;

/// When the clear timer is (re-)armed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RipplePolicy {
    /// Armed only on the empty -> non-empty transition. Later ripples join the
    /// pending batch and clear at the original deadline.
    #[default]
    Batch,
    /// Re-armed on every new ripple; the batch clears one lifetime after the
    /// most recent pointer-down.
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RippleEvent {
    pub id: RippleId,
    /// Origin, relative to the surface's top-left cell.
    pub x: u16,
    pub y: u16,
    pub born: Instant,
}

#[derive(Debug)]
pub struct RippleController {
    ripples: Vec<RippleEvent>,
    timer: OneShot,
    lifetime: Duration,
    policy: RipplePolicy,
    next_id: RippleId,
}

impl RippleController {
    pub fn new(lifetime: Duration, policy: RipplePolicy) -> Self {
        Self {
            ripples: Vec::new(),
            timer: OneShot::new(),
            lifetime,
            policy,
            next_id: 0,
        }
    }

    pub fn pointer_down(&mut self, x: u16, y: u16, now: Instant) -> RippleId {
        let id = self.next_id;
        self.next_id += 1;

        let was_idle = self.ripples.is_empty();
        self.ripples.push(RippleEvent { id, x, y, born: now });

        if was_idle || self.policy == RipplePolicy::Restart {
            self.timer.arm(now, self.lifetime);
            trace!(id, x, y, "ripple timer armed");
        }
        id
    }

    /// Poll the clear timer. Returns `true` if the batch was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            trace!(count = self.ripples.len(), "ripples cleared");
            self.ripples.clear();
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn ripples(&self) -> &[RippleEvent] {
        &self.ripples
    }

    pub fn is_idle(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Age of `ripple` as a fraction of the lifetime, clamped to `0.0..=1.0`.
    pub fn progress(&self, ripple: &RippleEvent, now: Instant) -> f64 {
        let age = now.saturating_duration_since(ripple.born).as_secs_f64();
        (age / self.lifetime.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Tint every cell of `area` covered by a live ripple. The radius grows
    /// from zero to twice the surface's larger side over the lifetime.
    pub fn paint(&self, buf: &mut Buffer, area: Rect, tint: Color, now: Instant) {
        if self.ripples.is_empty() || area.is_empty() {
            return;
        }
        let reach = f64::from(area.width.max(area.height)) * 2.0;
        for ripple in &self.ripples {
            let radius = reach * self.progress(ripple, now);
            for dy in 0..area.height {
                for dx in 0..area.width {
                    // Cells are roughly twice as tall as wide.
                    let ddx = f64::from(dx) - f64::from(ripple.x);
                    let ddy = (f64::from(dy) - f64::from(ripple.y)) * 2.0;
                    if (ddx * ddx + ddy * ddy).sqrt() <= radius {
                        if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
                            cell.set_bg(tint);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFE: Duration = Duration::from_millis(600);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn single_ripple_clears_after_lifetime() {
        let t0 = Instant::now();
        let mut rc = RippleController::new(LIFE, RipplePolicy::Batch);
        rc.pointer_down(3, 1, t0);
        assert_eq!(rc.ripples().len(), 1);
        assert!(!rc.tick(t0 + ms(599)));
        assert_eq!(rc.ripples().len(), 1);
        assert!(rc.tick(t0 + ms(600)));
        assert!(rc.is_idle());
        assert!(!rc.is_armed());
    }

    #[test]
    fn ids_are_unique() {
        let t0 = Instant::now();
        let mut rc = RippleController::new(LIFE, RipplePolicy::Batch);
        let a = rc.pointer_down(0, 0, t0);
        let b = rc.pointer_down(0, 0, t0);
        rc.tick(t0 + LIFE);
        let c = rc.pointer_down(0, 0, t0 + LIFE);
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn batch_policy_clears_at_first_deadline() {
        let t0 = Instant::now();
        let mut rc = RippleController::new(LIFE, RipplePolicy::Batch);
        rc.pointer_down(0, 0, t0);
        rc.pointer_down(5, 1, t0 + ms(400));
        assert_eq!(rc.ripples().len(), 2);
        assert!(rc.tick(t0 + ms(600)));
        assert!(rc.is_idle());
    }

    #[test]
    fn restart_policy_clears_after_latest_ripple() {
        let t0 = Instant::now();
        let mut rc = RippleController::new(LIFE, RipplePolicy::Restart);
        rc.pointer_down(0, 0, t0);
        rc.pointer_down(5, 1, t0 + ms(400));
        assert!(!rc.tick(t0 + ms(600)));
        assert_eq!(rc.ripples().len(), 2);
        assert!(rc.tick(t0 + ms(1000)));
        assert!(rc.is_idle());
    }

    #[test]
    fn new_batch_after_clear_gets_new_timer() {
        let t0 = Instant::now();
        let mut rc = RippleController::new(LIFE, RipplePolicy::Batch);
        rc.pointer_down(0, 0, t0);
        rc.tick(t0 + LIFE);
        rc.pointer_down(1, 0, t0 + ms(700));
        assert!(!rc.tick(t0 + ms(1200)));
        assert!(rc.tick(t0 + ms(1300)));
    }

    #[test]
    fn progress_is_clamped() {
        let t0 = Instant::now();
        let mut rc = RippleController::new(LIFE, RipplePolicy::Batch);
        rc.pointer_down(0, 0, t0);
        let ripple = rc.ripples()[0].clone();
        assert_eq!(rc.progress(&ripple, t0), 0.0);
        assert!((rc.progress(&ripple, t0 + ms(300)) - 0.5).abs() < 1e-9);
        assert_eq!(rc.progress(&ripple, t0 + ms(5000)), 1.0);
    }

    #[test]
    fn paint_tints_origin_cell_and_stays_inside_area() {
        let t0 = Instant::now();
        let mut rc = RippleController::new(LIFE, RipplePolicy::Batch);
        rc.pointer_down(2, 0, t0);
        let area = Rect::new(1, 1, 6, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        rc.paint(&mut buf, area, Color::White, t0 + ms(100));
        assert_eq!(buf[(3, 1)].bg, Color::White);
        assert_eq!(buf[(0, 1)].bg, Color::Reset);
        assert_eq!(buf[(3, 0)].bg, Color::Reset);
    }
}
