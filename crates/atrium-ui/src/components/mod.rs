pub(crate) mod clients;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod locale_switcher;
pub(crate) mod navbar;
pub(crate) mod pages;
pub(crate) mod team;

mod controls;

pub(crate) use controls::{NavButton, dispatch_callback, use_swipe, viewport_width};
