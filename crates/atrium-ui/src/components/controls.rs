//! Shared carousel plumbing: side buttons, touch gestures and viewport measurement.

use atrium_carousel::{Navigation, Side, SwipeTracker, button_action};
use atrium_i18n::TextDirection;
use gloo::utils::window;
use web_sys::TouchEvent;
use yew::prelude::*;

use crate::state::{CarouselAction, CarouselState};
use crate::view::nav_button_class;

/// Callback forwarding actions to a carousel reducer.
pub(crate) fn dispatch_callback(
    carousel: &UseReducerHandle<CarouselState>,
) -> Callback<CarouselAction> {
    let dispatcher = carousel.dispatcher();
    Callback::from(move |action| dispatcher.dispatch(action))
}

/// Touch callbacks for a swipeable track.
pub(crate) struct SwipeHandlers {
    pub start: Callback<TouchEvent>,
    pub moved: Callback<TouchEvent>,
    pub end: Callback<TouchEvent>,
    pub cancel: Callback<TouchEvent>,
}

/// Accumulate one horizontal gesture and dispatch it as a [`CarouselAction::Swipe`].
#[hook]
pub(crate) fn use_swipe(dispatch: Callback<CarouselAction>) -> SwipeHandlers {
    let tracker = use_mut_ref(SwipeTracker::new);

    let start = {
        let tracker = tracker.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                tracker.borrow_mut().start(x);
            }
        })
    };
    let moved = {
        let tracker = tracker.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                tracker.borrow_mut().move_to(x);
            }
        })
    };
    let end = {
        let tracker = tracker.clone();
        Callback::from(move |_: TouchEvent| {
            let delta = tracker.borrow_mut().finish();
            if let Some(delta) = delta {
                dispatch.emit(CarouselAction::Swipe(delta));
            }
        })
    };
    let cancel = Callback::from(move |_: TouchEvent| tracker.borrow_mut().cancel());

    SwipeHandlers {
        start,
        moved,
        end,
        cancel,
    }
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches()
        .get(0)
        .map(|touch| f64::from(touch.client_x()))
}

/// Current `innerWidth` in CSS pixels; zero when unavailable.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map_or(0, |width| width.clamp(0.0, f64::from(u32::MAX)) as u32)
}

#[derive(Properties, PartialEq)]
pub(crate) struct NavButtonProps {
    pub side: Side,
    pub dir: TextDirection,
    pub enabled: bool,
    pub on_press: Callback<CarouselAction>,
}

/// Physical side button; its label follows the reading-order action it triggers.
#[function_component(NavButton)]
pub(crate) fn nav_button(props: &NavButtonProps) -> Html {
    let side = props.side;
    let label = match button_action(side, props.dir) {
        Navigation::Previous => "Previous",
        Navigation::Next => "Next",
    };
    let onclick = {
        let on_press = props.on_press.clone();
        Callback::from(move |_: MouseEvent| on_press.emit(CarouselAction::Button(side)))
    };
    html! {
        <button
            type="button"
            class={nav_button_class(side, props.enabled)}
            aria-label={label}
            disabled={!props.enabled}
            {onclick}
        >
            <span aria-hidden="true">{side_glyph(side)}</span>
        </button>
    }
}

const fn side_glyph(side: Side) -> &'static str {
    match side {
        Side::Left => "‹",
        Side::Right => "›",
    }
}
