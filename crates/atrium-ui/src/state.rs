//! Reducer state shared by the carousel components.
//!
//! # Design
//! - Components only dispatch events; all index arithmetic lives in [`CarouselController`].
//! - The reducer is platform-free so it runs under native tests.

use std::rc::Rc;

use atrium_carousel::{CarouselController, Side};
use yew::Reducible;

/// Input events a carousel component forwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    /// A navigation button was pressed.
    Button(Side),
    /// A touch gesture ended with this horizontal displacement.
    Swipe(f64),
    /// The viewport was resized to this width.
    Resize(u32),
    /// A pagination dot was pressed.
    GoTo(usize),
    /// The auto-advance timer fired.
    Tick,
}

/// Wrapper making a controller usable with `use_reducer`.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    /// Current controller.
    pub controller: CarouselController,
}

impl CarouselState {
    /// Wrap a freshly built controller.
    #[must_use]
    pub const fn new(controller: CarouselController) -> Self {
        Self { controller }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        let changed = match action {
            CarouselAction::Button(side) => controller.on_button(side),
            CarouselAction::Swipe(delta) => controller.on_swipe(delta).is_some(),
            CarouselAction::Resize(width) => {
                controller.on_resize(width);
                controller != self.controller
            }
            CarouselAction::GoTo(index) => {
                controller.go_to(index);
                controller != self.controller
            }
            CarouselAction::Tick => controller.next(),
        };
        if changed {
            Rc::new(Self { controller })
        } else {
            self
        }
    }
}
