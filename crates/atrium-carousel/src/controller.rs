//! Navigable-window state over a fixed-length item sequence.
//!
//! # Design
//! - One state machine backs every carousel; instances differ only by preset.
//! - The hero wraps at both ends, the team and clients carousels stop at the edges.
//! - All index arithmetic tolerates an empty sequence; navigation is simply disabled.

use atrium_i18n::TextDirection;
use serde::Serialize;

use crate::breakpoints;
use crate::navigation::{self, Navigation, Side};

/// What happens when navigation reaches either end of the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Stop at the edges; the window never runs past the last page.
    Clamp,
    /// Continue from the other end.
    Wrap,
}

/// Read-only view of a carousel for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    /// First visible item.
    pub index: usize,
    /// Items visible side by side.
    pub items_per_view: usize,
    /// Length of the sequence.
    pub item_count: usize,
    /// Whether `previous()` would move.
    pub can_previous: bool,
    /// Whether `next()` would move.
    pub can_next: bool,
}

/// Carousel state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselController {
    policy: BoundaryPolicy,
    direction: TextDirection,
    responsive: bool,
    item_count: usize,
    items_per_view: usize,
    index: usize,
}

impl CarouselController {
    /// Build a controller at index zero.
    #[must_use]
    pub fn new(policy: BoundaryPolicy, item_count: usize, direction: TextDirection) -> Self {
        Self {
            policy,
            direction,
            responsive: false,
            item_count,
            items_per_view: 1,
            index: 0,
        }
    }

    /// Hero banner: one slide at a time, wraps at both ends.
    #[must_use]
    pub fn hero(item_count: usize, direction: TextDirection) -> Self {
        Self::new(BoundaryPolicy::Wrap, item_count, direction)
    }

    /// Team grid: 1/2/3 cards depending on viewport width, clamped.
    #[must_use]
    pub fn team(item_count: usize, viewport_width: u32, direction: TextDirection) -> Self {
        let mut controller = Self::new(BoundaryPolicy::Clamp, item_count, direction);
        controller.responsive = true;
        controller.set_items_per_view(breakpoints::items_per_view(viewport_width));
        controller
    }

    /// Client testimonials: one slide at a time, clamped.
    #[must_use]
    pub fn clients(item_count: usize, direction: TextDirection) -> Self {
        Self::new(BoundaryPolicy::Clamp, item_count, direction)
    }

    /// Boundary policy of this instance.
    #[must_use]
    pub const fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Layout direction used for physical mappings.
    #[must_use]
    pub const fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Current first visible item.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Items visible side by side.
    #[must_use]
    pub const fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Length of the sequence.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Largest valid index under the current policy and window size.
    #[must_use]
    pub const fn max_index(&self) -> usize {
        match self.policy {
            BoundaryPolicy::Clamp => self.item_count.saturating_sub(self.items_per_view),
            BoundaryPolicy::Wrap => self.item_count.saturating_sub(1),
        }
    }

    /// Whether `previous()` would change the index.
    #[must_use]
    pub const fn can_previous(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Clamp => self.index > 0,
            BoundaryPolicy::Wrap => self.item_count > 1,
        }
    }

    /// Whether `next()` would change the index.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Clamp => self.index < self.max_index(),
            BoundaryPolicy::Wrap => self.item_count > 1,
        }
    }

    /// Advance one item. Returns whether the index changed.
    pub const fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index = match self.policy {
            BoundaryPolicy::Clamp => self.index + 1,
            BoundaryPolicy::Wrap => (self.index + 1) % self.item_count,
        };
        true
    }

    /// Step back one item. Returns whether the index changed.
    pub const fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.index = match self.policy {
            BoundaryPolicy::Clamp => self.index - 1,
            BoundaryPolicy::Wrap => (self.index + self.item_count - 1) % self.item_count,
        };
        true
    }

    /// Apply a reading-order command. Returns whether the index changed.
    pub const fn navigate(&mut self, navigation: Navigation) -> bool {
        match navigation {
            Navigation::Next => self.next(),
            Navigation::Previous => self.previous(),
        }
    }

    /// Jump to `index`, clamped into the valid range.
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.max_index());
    }

    /// Change the window size (floored at one) and re-clamp the index.
    pub fn set_items_per_view(&mut self, items_per_view: usize) {
        self.items_per_view = items_per_view.max(1);
        self.clamp_index();
    }

    /// Viewport resize. Only responsive instances change their window size.
    pub fn on_resize(&mut self, viewport_width: u32) {
        if self.responsive {
            self.set_items_per_view(breakpoints::items_per_view(viewport_width));
        }
    }

    /// Replace the sequence length (for example after a locale switch) and re-clamp.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.clamp_index();
    }

    /// Switch layout direction.
    pub const fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    /// Completed horizontal gesture; see [`navigation::swipe_action`].
    ///
    /// Returns the command the gesture mapped to, whether or not it moved the index.
    pub fn on_swipe(&mut self, delta_x: f64) -> Option<Navigation> {
        let navigation = navigation::swipe_action(delta_x, self.direction)?;
        self.navigate(navigation);
        Some(navigation)
    }

    /// Click on the physical button at `side`.
    pub const fn on_button(&mut self, side: Side) -> bool {
        self.navigate(navigation::button_action(side, self.direction))
    }

    /// Whether the physical button at `side` is active.
    #[must_use]
    pub const fn button_enabled(&self, side: Side) -> bool {
        match navigation::button_action(side, self.direction) {
            Navigation::Next => self.can_next(),
            Navigation::Previous => self.can_previous(),
        }
    }

    /// Signed horizontal offset of the card track, in percent of the viewport.
    ///
    /// Cards move left as the index grows in LTR and right in RTL.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn translate_percent(&self) -> f64 {
        let magnitude = self.index as f64 * 100.0 / self.items_per_view as f64;
        if self.direction.is_rtl() || self.index == 0 {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Flex basis of a single card, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn item_basis_percent(&self) -> f64 {
        100.0 / self.items_per_view as f64
    }

    /// Indices currently in view.
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.index + self.items_per_view).min(self.item_count);
        self.index.min(end)..end
    }

    /// Read-only snapshot for rendering.
    #[must_use]
    pub const fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.index,
            items_per_view: self.items_per_view,
            item_count: self.item_count,
            can_previous: self.can_previous(),
            can_next: self.can_next(),
        }
    }

    fn clamp_index(&mut self) {
        self.index = self.index.min(self.max_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamped(item_count: usize, items_per_view: usize) -> CarouselController {
        let mut controller =
            CarouselController::new(BoundaryPolicy::Clamp, item_count, TextDirection::Ltr);
        controller.set_items_per_view(items_per_view);
        controller
    }

    #[test]
    fn clamped_next_stops_at_last_page() {
        let mut carousel = clamped(5, 3);
        assert!(carousel.next());
        assert_eq!(carousel.index(), 1);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.next());
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.can_next());
    }

    #[test]
    fn narrowing_viewport_keeps_valid_index() {
        let mut carousel = clamped(5, 3);
        carousel.go_to(2);
        carousel.set_items_per_view(1);
        assert_eq!(carousel.index(), 2);
        assert!(carousel.can_next());
    }

    #[test]
    fn widening_viewport_pulls_index_back() {
        let mut carousel = clamped(5, 1);
        carousel.go_to(4);
        carousel.set_items_per_view(3);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn next_then_previous_restores_index_away_from_edges() {
        let mut carousel = clamped(6, 2);
        carousel.go_to(1);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 1);

        carousel.go_to(0);
        assert!(!carousel.previous());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn index_invariant_holds_over_operation_sequences() {
        for item_count in 1..=7usize {
            for start_view in 1..=item_count {
                let mut carousel = clamped(item_count, start_view);
                let mut seed = item_count * 31 + start_view;
                for _ in 0..64 {
                    seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345) % 65_536;
                    match seed % 3 {
                        0 => {
                            carousel.next();
                        }
                        1 => {
                            carousel.previous();
                        }
                        _ => carousel.set_items_per_view(1 + seed % item_count),
                    }
                    assert!(
                        carousel.index() <= item_count - carousel.items_per_view(),
                        "count {item_count} view {} index {}",
                        carousel.items_per_view(),
                        carousel.index()
                    );
                }
            }
        }
    }

    #[test]
    fn hero_wraps_both_ways() {
        let mut hero = CarouselController::hero(3, TextDirection::Ltr);
        assert!(hero.previous());
        assert_eq!(hero.index(), 2);
        assert!(hero.next());
        assert_eq!(hero.index(), 0);
        hero.next();
        hero.next();
        hero.next();
        assert_eq!(hero.index(), 0);
    }

    #[test]
    fn hero_with_single_slide_does_not_move() {
        let mut hero = CarouselController::hero(1, TextDirection::Ltr);
        assert!(!hero.next());
        assert!(!hero.previous());
        assert_eq!(hero.index(), 0);
    }

    #[test]
    fn empty_sequences_never_panic() {
        for mut carousel in [
            CarouselController::hero(0, TextDirection::Ltr),
            CarouselController::team(0, 1280, TextDirection::Rtl),
            CarouselController::clients(0, TextDirection::Ltr),
        ] {
            assert!(carousel.is_empty());
            assert!(!carousel.next());
            assert!(!carousel.previous());
            assert!(carousel.on_swipe(-120.0).is_some());
            assert_eq!(carousel.index(), 0);
            carousel.go_to(5);
            carousel.set_items_per_view(3);
            assert_eq!(carousel.index(), 0);
            assert!(carousel.visible_range().is_empty());
            assert!(!carousel.button_enabled(Side::Left));
            assert!(!carousel.button_enabled(Side::Right));
        }
    }

    #[test]
    fn swipe_left_in_ltr_is_exactly_one_next() {
        let mut carousel = clamped(5, 1);
        carousel.go_to(2);
        assert_eq!(carousel.on_swipe(-51.0), Some(Navigation::Next));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn swipe_left_in_rtl_is_exactly_one_previous() {
        let mut carousel = CarouselController::clients(5, TextDirection::Rtl);
        carousel.go_to(2);
        assert_eq!(carousel.on_swipe(-51.0), Some(Navigation::Previous));
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.on_swipe(120.0), Some(Navigation::Next));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn short_swipes_leave_state_untouched() {
        let mut carousel = clamped(5, 1);
        assert_eq!(carousel.on_swipe(-30.0), None);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn team_preset_tracks_viewport_and_clients_does_not() {
        let mut team = CarouselController::team(5, 1280, TextDirection::Ltr);
        assert_eq!(team.items_per_view(), 3);
        team.on_resize(500);
        assert_eq!(team.items_per_view(), 1);

        let mut clients = CarouselController::clients(5, TextDirection::Ltr);
        clients.on_resize(1280);
        assert_eq!(clients.items_per_view(), 1);
        assert_eq!(clients.policy(), BoundaryPolicy::Clamp);
    }

    #[test]
    fn buttons_and_offsets_mirror_in_rtl() {
        let mut ltr = CarouselController::team(5, 1280, TextDirection::Ltr);
        let mut rtl = CarouselController::team(5, 1280, TextDirection::Rtl);
        assert!(ltr.on_button(Side::Right));
        assert!(rtl.on_button(Side::Left));
        assert_eq!(ltr.index(), 1);
        assert_eq!(rtl.index(), 1);
        assert!((ltr.translate_percent() + 100.0 / 3.0).abs() < 1e-9);
        assert!((rtl.translate_percent() - 100.0 / 3.0).abs() < 1e-9);
        assert!(rtl.button_enabled(Side::Right));
        assert!(!CarouselController::clients(3, TextDirection::Rtl).button_enabled(Side::Right));
    }

    #[test]
    fn shrinking_item_count_reclamps() {
        let mut carousel = clamped(6, 2);
        carousel.go_to(4);
        carousel.set_item_count(3);
        assert_eq!(carousel.index(), 1);

        let mut hero = CarouselController::hero(5, TextDirection::Ltr);
        hero.go_to(4);
        hero.set_item_count(2);
        assert_eq!(hero.index(), 1);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut carousel = clamped(4, 2);
        carousel.next();
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.index, 1);
        assert_eq!(snapshot.items_per_view, 2);
        assert_eq!(snapshot.item_count, 4);
        assert!(snapshot.can_previous);
        assert!(snapshot.can_next);
        assert_eq!(carousel.visible_range(), 1..3);
    }
}
