//! Top navigation with the services menu, search and locale toggle.

use atrium_i18n::Namespace;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::locale_switcher::LocaleSwitcher;
use crate::app::{ApiCtx, LocaleCtx, Route};
use crate::view::{message_list, message_text, search_href};

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let api = use_context::<ApiCtx>();
    let locale = use_context::<LocaleCtx>().unwrap_or_default();
    let messages = use_state(|| Value::Null);
    let search_open = use_state(|| false);
    let input_ref = use_node_ref();

    {
        let messages = messages.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        match api.client.fetch_namespace(Namespace::Navbar).await {
                            Ok(response) => messages.set(response.messages),
                            Err(err) => {
                                gloo::console::warn!(format!("navbar strings unavailable: {err}"));
                            }
                        }
                    });
                }
                || ()
            },
            locale.locale,
        );
    }

    let text = |key: &str| message_text(&messages, Namespace::Navbar, key);
    let services = message_list(&messages, Namespace::Navbar, "servicesList");

    let toggle_search = {
        let search_open = search_open.clone();
        Callback::from(move |_: MouseEvent| search_open.set(!*search_open))
    };
    let onsubmit = {
        let input_ref = input_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let query = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let _ = gloo::utils::window()
                .location()
                .set_href(&search_href(&query));
        })
    };

    html! {
        <header class="sticky top-0 z-40 bg-white/95 backdrop-blur ring-1 ring-black/5">
            <nav class="mx-auto max-w-7xl px-4 h-16 flex items-center gap-6">
                <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold", "text-brand-dark")}>{"Atrium"}</Link<Route>>
                <ul class="hidden lg:flex items-center gap-5 text-sm font-medium">
                    <li><Link<Route> to={Route::Home}>{text("home")}</Link<Route>></li>
                    <li><a href="/#about">{text("about")}</a></li>
                    <li class="relative group">
                        <Link<Route> to={Route::Services}>{text("services")}</Link<Route>>
                        <ul class="absolute hidden group-hover:block mt-2 w-64 rounded-lg bg-white p-2 shadow-lg ring-1 ring-black/5">
                            { for services.iter().map(|service| html! {
                                <li class="px-3 py-2 hover:bg-brand-lighter rounded">
                                    <Link<Route> to={Route::Services}>{service.clone()}</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </li>
                    <li><a href="/#team">{text("ourTeam")}</a></li>
                    <li><a href="/#blogs">{text("blogs")}</a></li>
                    <li><a href="/#contact">{text("contact")}</a></li>
                </ul>
                <div class="ms-auto flex items-center gap-3">
                    <button
                        type="button"
                        class="rounded-full p-2 hover:bg-brand-lighter"
                        aria-label={if *search_open { text("close") } else { text("searchOpen") }}
                        onclick={toggle_search}
                    >
                        {if *search_open { "✕" } else { "⌕" }}
                    </button>
                    <LocaleSwitcher />
                    <a href="/#contact" class="hidden md:inline-flex rounded-full bg-brand px-4 py-2 text-sm font-semibold text-white hover:bg-brand-dark">
                        {text("book")}
                    </a>
                </div>
            </nav>
            if *search_open {
                <form class="mx-auto max-w-7xl px-4 pb-4" role="search" {onsubmit}>
                    <input
                        ref={input_ref}
                        type="search"
                        name="q"
                        class="w-full rounded-lg border border-gray-300 px-4 py-2"
                        placeholder={text("searchPlaceholder")}
                    />
                </form>
            }
        </header>
    }
}
