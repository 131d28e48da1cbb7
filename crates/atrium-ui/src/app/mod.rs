//! Root component, routing and document-level locale wiring.
//!
//! # Design
//! - The server owns locale resolution; the app reads it once from `/v1/locale`.
//! - `dir`/`lang` on `<html>` follow the resolved locale so the stylesheet mirrors.
//! - A locale switch persists through `PUT /v1/locale` and reloads the document.

use atrium_api_models::LocaleResponse;
use atrium_i18n::{DEFAULT_LOCALE, Locale, TextDirection};
use gloo::utils::{document, window};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::ROOT_ELEMENT_ID;
use crate::components::footer::SiteFooter;
use crate::components::navbar::Navbar;
use crate::components::pages::{HomePage, NotFoundPage, SearchPage, ServicesPage};

pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;

mod api;
mod routes;

/// Locale the server resolved for this visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LocaleCtx {
    pub locale: Locale,
    pub dir: TextDirection,
}

impl From<&LocaleResponse> for LocaleCtx {
    fn from(response: &LocaleResponse) -> Self {
        Self {
            locale: response.locale,
            dir: response.dir,
        }
    }
}

impl Default for LocaleCtx {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            dir: DEFAULT_LOCALE.direction(),
        }
    }
}

#[function_component(AtriumApp)]
pub(crate) fn atrium_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let locale = use_state(LocaleCtx::default);

    {
        let client = api_ctx.client.clone();
        let locale = locale.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.fetch_locale().await {
                        Ok(response) => {
                            let resolved = LocaleCtx::from(&response);
                            apply_document_locale(resolved);
                            locale.set(resolved);
                        }
                        Err(err) => gloo::console::warn!(format!("locale lookup failed: {err}")),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<LocaleCtx> context={*locale}>
                <BrowserRouter>
                    <div class="min-h-screen flex flex-col" dir={locale.dir.as_str()}>
                        <Navbar />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <SiteFooter />
                    </div>
                </BrowserRouter>
            </ContextProvider<LocaleCtx>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Services => html! { <ServicesPage /> },
        Route::Search => html! { <SearchPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn apply_document_locale(locale: LocaleCtx) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("dir", locale.dir.as_str());
        let _ = root.set_attribute("lang", locale.locale.code());
    }
}

/// Same-origin API base.
fn api_base_url() -> String {
    window().location().origin().unwrap_or_default()
}

/// Current path, used as the revalidation target of a locale switch.
pub(crate) fn current_path() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

/// Mount the app into `#root`, or the body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id(ROOT_ELEMENT_ID) {
        yew::Renderer::<AtriumApp>::with_root(root).render();
    } else {
        yew::Renderer::<AtriumApp>::new().render();
    }
}
