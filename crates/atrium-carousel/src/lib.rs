#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Direction-aware carousel state shared by the hero, team and clients sections.
//!
//! Nothing in here touches the DOM: the UI feeds widths, gestures, clicks and timer ticks
//! in, and renders from [`CarouselSnapshot`] and the offset helpers.

pub mod autoplay;
pub mod breakpoints;
pub mod controller;
pub mod navigation;
pub mod swipe;

pub use autoplay::{AutoAdvance, DEFAULT_HERO_INTERVAL, Rearm};
pub use breakpoints::Breakpoint;
pub use controller::{BoundaryPolicy, CarouselController, CarouselSnapshot};
pub use navigation::{Navigation, SWIPE_THRESHOLD_PX, Side, button_action, button_side, swipe_action};
pub use swipe::SwipeTracker;

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_i18n::TextDirection;

    #[test]
    fn snapshot_serializes_for_the_ui() -> Result<(), serde_json::Error> {
        let mut team = CarouselController::team(5, 800, TextDirection::Rtl);
        team.navigate(Navigation::Next);
        let value = serde_json::to_value(team.snapshot())?;
        assert_eq!(value["index"], 1);
        assert_eq!(value["items_per_view"], 2);
        assert_eq!(value["can_next"], true);
        assert_eq!(serde_json::to_value(BoundaryPolicy::Wrap)?, "wrap");
        Ok(())
    }

    #[test]
    fn touch_gesture_drives_the_controller() {
        let mut clients = CarouselController::clients(3, TextDirection::Ltr);
        let mut tracker = SwipeTracker::new();
        tracker.start(300.0);
        tracker.move_to(200.0);
        if let Some(delta) = tracker.finish() {
            assert_eq!(clients.on_swipe(delta), Some(Navigation::Next));
        }
        assert_eq!(clients.index(), 1);
    }
}
