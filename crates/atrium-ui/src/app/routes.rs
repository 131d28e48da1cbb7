//! Routing definitions for the Atrium UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/search")]
    Search,
    #[not_found]
    #[at("/404")]
    NotFound,
}
