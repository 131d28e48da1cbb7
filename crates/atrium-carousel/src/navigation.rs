//! Mapping physical input (buttons, swipes) to reading-order navigation.
//!
//! # Design
//! - Navigation is expressed in reading order (`Next`/`Previous`), never left/right.
//! - Every physical-to-logical mapping takes the text direction and mirrors under RTL.

use atrium_i18n::TextDirection;
use serde::Serialize;

/// Minimum horizontal travel, in pixels, for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Reading-order navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    /// Towards the end of the sequence.
    Next,
    /// Towards the start of the sequence.
    Previous,
}

/// Physical side of a navigation button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Left edge of the viewport.
    Left,
    /// Right edge of the viewport.
    Right,
}

/// Command bound to the button on `side`.
///
/// In LTR the left button goes back; in RTL the left button goes forward.
#[must_use]
pub const fn button_action(side: Side, direction: TextDirection) -> Navigation {
    match (side, direction) {
        (Side::Left, TextDirection::Ltr) | (Side::Right, TextDirection::Rtl) => {
            Navigation::Previous
        }
        (Side::Right, TextDirection::Ltr) | (Side::Left, TextDirection::Rtl) => Navigation::Next,
    }
}

/// Physical side hosting the button for `navigation`.
#[must_use]
pub const fn button_side(navigation: Navigation, direction: TextDirection) -> Side {
    match (navigation, direction) {
        (Navigation::Previous, TextDirection::Ltr) | (Navigation::Next, TextDirection::Rtl) => {
            Side::Left
        }
        (Navigation::Next, TextDirection::Ltr) | (Navigation::Previous, TextDirection::Rtl) => {
            Side::Right
        }
    }
}

/// Interpret a completed horizontal gesture.
///
/// `delta_x` is end minus start; negative means the finger moved left. Movements within
/// [`SWIPE_THRESHOLD_PX`] are taps, not swipes.
#[must_use]
pub fn swipe_action(delta_x: f64, direction: TextDirection) -> Option<Navigation> {
    if !delta_x.is_finite() || delta_x.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    let leftward = delta_x < 0.0;
    let navigation = match (leftward, direction) {
        (true, TextDirection::Ltr) | (false, TextDirection::Rtl) => Navigation::Next,
        (false, TextDirection::Ltr) | (true, TextDirection::Rtl) => Navigation::Previous,
    };
    Some(navigation)
}
