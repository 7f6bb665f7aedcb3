pub mod phase;

use ratatui::style::Color;
use tracing::debug;

pub use phase::{solve, Sample, Slot};

/// Resting geometry of the indicator, selected by the host before the
/// first reset: dots stacked at the center, or fully spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginState {
    #[default]
    Origin,
    Prepared,
}

/// One indicator dot. `x`/`y` are content-space coordinates; `color` is
/// assigned at creation and never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Per-slot colors, applied once when the dots are created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPalette {
    pub left: Color,
    pub center: Color,
    pub right: Color,
}

/// Geometric constants shared by all three dots, derived from the content
/// size the host reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub content_width: f64,
    pub content_height: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Half the full spread: `content_width / 2 - min_radius`.
    pub gap: f64,
}

impl Geometry {
    pub fn new(content_width: f64, content_height: f64, min_radius: f64, max_radius: f64) -> Self {
        Self {
            content_width,
            content_height,
            min_radius,
            max_radius,
            gap: content_width / 2.0 - min_radius,
        }
    }
}

// ── Circle set ────────────────────────────────────────────────────────

/// The three dots plus their geometry. Exists only once the host has
/// reported a usable content size.
#[derive(Debug, Clone, PartialEq)]
struct CircleSet {
    geometry: Geometry,
    left: Circle,
    center: Circle,
    right: Circle,
}

impl CircleSet {
    fn new(geometry: Geometry, palette: DotPalette) -> Self {
        let x = geometry.content_width / 2.0;
        let y = geometry.content_height / 2.0;
        let dot = |radius, color| Circle { x, y, radius, color };
        Self {
            left: dot(geometry.min_radius, palette.left),
            center: dot(geometry.max_radius, palette.center),
            right: dot(geometry.min_radius, palette.right),
            geometry,
        }
    }

    fn dot_mut(&mut self, slot: Slot) -> &mut Circle {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Center => &mut self.center,
            Slot::Right => &mut self.right,
        }
    }

    /// All dots collapse onto the center point.
    fn reset_to_origin(&mut self) {
        let geometry = self.geometry;
        let x = geometry.content_width / 2.0;
        let y = geometry.content_height / 2.0;
        for slot in Slot::ALL {
            let dot = self.dot_mut(slot);
            dot.x = x;
            dot.y = y;
            dot.radius = if slot == Slot::Center {
                geometry.max_radius
            } else {
                geometry.min_radius
            };
        }
    }

    /// Full spread: outer dots at the content edges, center dot at full
    /// radius in the middle.
    fn reset_to_prepared(&mut self) {
        let geometry = self.geometry;
        let y = geometry.content_height / 2.0;

        self.left.x = geometry.min_radius;
        self.left.y = y;
        self.left.radius = geometry.min_radius;

        self.center.x = geometry.content_width / 2.0;
        self.center.y = y;
        self.center.radius = geometry.max_radius;

        self.right.x = geometry.content_width - geometry.min_radius;
        self.right.y = y;
        self.right.radius = geometry.min_radius;
    }

    /// Follow a content size change without disturbing the current cycle:
    /// only the derived constants and the row center move.
    fn set_size(&mut self, width: f64, height: f64) {
        self.geometry.content_width = width;
        self.geometry.content_height = height;
        self.geometry.gap = width / 2.0 - self.geometry.min_radius;
        let y = height / 2.0;
        for slot in Slot::ALL {
            self.dot_mut(slot).y = y;
        }
    }

    /// Apply one frame of the shared cycle to every slot.
    fn update(&mut self, fraction: f64) {
        let geometry = self.geometry;
        for slot in Slot::ALL {
            let sample = phase::solve(slot, fraction, &geometry);
            let dot = self.dot_mut(slot);
            dot.radius = sample.radius;
            dot.x = sample.x;
        }
    }

    /// Manual spread preview: the outer dots converge toward the center
    /// as the fraction falls to zero. Center and radii stay put.
    fn drag(&mut self, fraction: f64) {
        let geometry = self.geometry;
        self.left.x = geometry.min_radius + geometry.gap * (1.0 - fraction);
        self.right.x = geometry.content_width / 2.0 + geometry.gap * fraction;
    }
}

// ── Indicator ─────────────────────────────────────────────────────────

/// The indicator core: three dots, their shared geometry, and the
/// start/stop lifecycle. The host feeds it content sizes and frame
/// fractions and reads dot geometry back; it never draws.
#[derive(Debug)]
pub struct Indicator {
    palette: DotPalette,
    min_radius: f64,
    max_radius: f64,
    origin_state: OriginState,
    running: bool,
    circles: Option<CircleSet>,
}

impl Indicator {
    pub fn new(min_radius: f64, max_radius: f64, palette: DotPalette) -> Self {
        let min_radius = min_radius.max(0.0);
        Self {
            palette,
            min_radius,
            max_radius: max_radius.max(min_radius),
            origin_state: OriginState::default(),
            running: false,
            circles: None,
        }
    }

    pub fn origin_state(&self) -> OriginState {
        self.origin_state
    }

    /// Select the resting geometry. Takes effect at the next reset.
    pub fn set_origin_state(&mut self, state: OriginState) {
        self.origin_state = state;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Report the drawable content size. The dots are created the first
    /// time the size can hold them; afterwards a size change only
    /// recomputes the derived constants so the cycle is never restarted.
    /// Degenerate sizes are ignored.
    pub fn set_content_size(&mut self, width: f64, height: f64) {
        if width < self.min_radius * 2.0 || height <= 0.0 {
            return;
        }
        match &mut self.circles {
            Some(set) => {
                if set.geometry.content_width != width || set.geometry.content_height != height {
                    set.set_size(width, height);
                }
            }
            None => {
                let geometry = Geometry::new(width, height, self.min_radius, self.max_radius);
                self.circles = Some(CircleSet::new(geometry, self.palette));
                if self.running {
                    // Started before the first layout: the first visible
                    // frame still begins from the prepared spread.
                    self.prepare();
                } else {
                    self.reset();
                }
            }
        }
    }

    /// Reset to the resting geometry selected by the origin state.
    pub fn reset(&mut self) {
        let state = self.origin_state;
        if let Some(set) = &mut self.circles {
            match state {
                OriginState::Origin => set.reset_to_origin(),
                OriginState::Prepared => set.reset_to_prepared(),
            }
        }
    }

    fn prepare(&mut self) {
        if let Some(set) = &mut self.circles {
            set.reset_to_prepared();
        }
    }

    /// Enter the running state. Forces the prepared spread so the first
    /// frame starts from a clean layout whatever a drag left behind.
    /// No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.prepare();
        debug!("indicator started");
    }

    /// Leave the running state and reset the dots. No-op when already
    /// stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.reset();
        debug!("indicator stopped");
    }

    /// Advance one frame of the cycle. The clock contract keeps
    /// `fraction` in `[0, 1)`; nothing happens while stopped or before
    /// the dots exist.
    pub fn update(&mut self, fraction: f64) {
        if !self.running {
            return;
        }
        if let Some(set) = &mut self.circles {
            set.update(fraction);
        }
    }

    /// Manual spread preview from a slider. Silently ignored while
    /// running, when the resting state is already the full spread, or
    /// past full spread.
    pub fn drag(&mut self, fraction: f64) {
        if self.origin_state == OriginState::Prepared || self.running || fraction > 1.0 {
            return;
        }
        if let Some(set) = &mut self.circles {
            set.drag(fraction);
        }
    }

    /// Dots in paint order: outer dots first, center last so it sits on
    /// top where they overlap. `None` until a usable size was reported.
    pub fn circles(&self) -> Option<[Circle; 3]> {
        self.circles.as_ref().map(|set| [set.left, set.right, set.center])
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.circles.as_ref().map(|set| &set.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> DotPalette {
        DotPalette {
            left: Color::Yellow,
            center: Color::Red,
            right: Color::Green,
        }
    }

    // content 120x40, min 10, max 14 -> gap = 50
    fn ready_indicator() -> Indicator {
        let mut indicator = Indicator::new(10.0, 14.0, palette());
        indicator.set_content_size(120.0, 40.0);
        indicator
    }

    #[test]
    fn creation_is_deferred_until_the_size_is_usable() {
        let mut indicator = Indicator::new(10.0, 14.0, palette());
        assert!(indicator.circles().is_none());

        indicator.set_content_size(0.0, 40.0);
        indicator.set_content_size(-5.0, 40.0);
        indicator.set_content_size(120.0, 0.0);
        indicator.set_content_size(15.0, 40.0); // narrower than two min radii
        assert!(indicator.circles().is_none());

        indicator.set_content_size(120.0, 40.0);
        let geometry = indicator.geometry().expect("dots exist");
        assert_eq!(geometry.gap, 50.0);
    }

    #[test]
    fn origin_reset_stacks_the_dots_at_the_center() {
        let indicator = ready_indicator();
        let [left, right, center] = indicator.circles().unwrap();
        for dot in [left, right, center] {
            assert_eq!(dot.x, 60.0);
            assert_eq!(dot.y, 20.0);
        }
        assert_eq!(center.radius, 14.0);
        assert_eq!(left.radius, 10.0);
        assert_eq!(right.radius, 10.0);
    }

    #[test]
    fn prepared_reset_spreads_the_dots_to_the_edges() {
        let mut indicator = ready_indicator();
        indicator.set_origin_state(OriginState::Prepared);
        indicator.reset();
        let [left, right, center] = indicator.circles().unwrap();
        assert_eq!((left.x, left.radius), (10.0, 10.0));
        assert_eq!((center.x, center.radius), (60.0, 14.0));
        assert_eq!((right.x, right.radius), (110.0, 10.0));
    }

    #[test]
    fn resets_are_idempotent() {
        let mut indicator = ready_indicator();
        indicator.reset();
        let first = indicator.circles().unwrap();
        indicator.reset();
        assert_eq!(indicator.circles().unwrap(), first);

        indicator.set_origin_state(OriginState::Prepared);
        indicator.reset();
        let first = indicator.circles().unwrap();
        indicator.reset();
        assert_eq!(indicator.circles().unwrap(), first);
    }

    #[test]
    fn start_forces_the_prepared_spread() {
        let mut indicator = ready_indicator();
        indicator.drag(0.4);
        indicator.start();

        let [left, right, center] = indicator.circles().unwrap();
        assert_eq!(left.x, 10.0);
        assert_eq!(center.x, 60.0);
        assert_eq!(right.x, 110.0);
        assert!(indicator.is_running());
    }

    #[test]
    fn stop_resets_per_the_origin_state() {
        let mut indicator = ready_indicator();
        indicator.start();
        indicator.update(0.4);
        indicator.stop();

        // Origin state is the default: everything back at the center.
        let [left, right, _] = indicator.circles().unwrap();
        assert_eq!(left.x, 60.0);
        assert_eq!(right.x, 60.0);
        assert!(!indicator.is_running());
    }

    #[test]
    fn update_does_nothing_while_stopped() {
        let mut indicator = ready_indicator();
        let before = indicator.circles().unwrap();
        indicator.update(0.3);
        assert_eq!(indicator.circles().unwrap(), before);
    }

    #[test]
    fn drag_moves_the_outer_dots_only() {
        let mut indicator = ready_indicator();
        indicator.drag(0.3);

        let [left, right, center] = indicator.circles().unwrap();
        assert_eq!(left.x, 10.0 + 50.0 * 0.7);
        assert_eq!(right.x, 60.0 + 50.0 * 0.3);
        // Center and all radii untouched by a drag.
        assert_eq!(center.x, 60.0);
        assert_eq!(center.radius, 14.0);
        assert_eq!(left.radius, 10.0);
    }

    #[test]
    fn drag_is_ignored_while_running() {
        let mut indicator = ready_indicator();
        indicator.start();
        indicator.update(0.25);
        let before = indicator.circles().unwrap();
        indicator.drag(0.8);
        assert_eq!(indicator.circles().unwrap(), before);
    }

    #[test]
    fn drag_is_ignored_when_resting_prepared_or_past_full() {
        let mut indicator = ready_indicator();
        indicator.set_origin_state(OriginState::Prepared);
        indicator.reset();
        let before = indicator.circles().unwrap();
        indicator.drag(0.5);
        assert_eq!(indicator.circles().unwrap(), before);

        let mut indicator = ready_indicator();
        let before = indicator.circles().unwrap();
        indicator.drag(1.1);
        assert_eq!(indicator.circles().unwrap(), before);

        // Exactly 1.0 is still a valid drag.
        indicator.drag(1.0);
        let [left, right, _] = indicator.circles().unwrap();
        assert_eq!(left.x, 10.0);
        assert_eq!(right.x, 110.0);
    }

    #[test]
    fn start_and_stop_are_noops_when_repeated() {
        let mut indicator = ready_indicator();
        indicator.start();
        indicator.update(0.4);
        let mid = indicator.circles().unwrap();
        indicator.start(); // must not re-prepare mid-cycle
        assert_eq!(indicator.circles().unwrap(), mid);

        indicator.stop();
        let rest = indicator.circles().unwrap();
        indicator.stop();
        assert_eq!(indicator.circles().unwrap(), rest);
    }

    #[test]
    fn resize_recomputes_the_gap_without_restarting_the_cycle() {
        let mut indicator = ready_indicator();
        indicator.start();
        indicator.update(0.25);
        let before = indicator.circles().unwrap();

        indicator.set_content_size(220.0, 60.0);
        let geometry = indicator.geometry().unwrap();
        assert_eq!(geometry.gap, 100.0);

        let after = indicator.circles().unwrap();
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(a.x, b.x, "x survives a resize");
            assert_eq!(a.radius, b.radius, "radius survives a resize");
            assert_eq!(b.y, 30.0, "row center follows the new height");
        }
    }

    #[test]
    fn started_before_layout_still_begins_prepared() {
        let mut indicator = Indicator::new(10.0, 14.0, palette());
        indicator.start();
        indicator.set_content_size(120.0, 40.0);
        let [left, right, center] = indicator.circles().unwrap();
        assert_eq!(left.x, 10.0);
        assert_eq!(center.x, 60.0);
        assert_eq!(right.x, 110.0);
    }

    #[test]
    fn paint_order_puts_the_center_dot_last() {
        let indicator = ready_indicator();
        let dots = indicator.circles().unwrap();
        assert_eq!(dots[2].color, Color::Red);
    }
}
