//! Routed pages. Each fetches its server-rendered view model once per locale.

use atrium_api_models::{HomeResponse, SearchQuery, SearchResponse, ServicesResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::clients::ClientsCarousel;
use super::hero::Hero;
use super::team::TeamCarousel;
use crate::app::{ApiCtx, LocaleCtx, Route};
use crate::view::search_href;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let api = use_context::<ApiCtx>();
    let locale = use_context::<LocaleCtx>().unwrap_or_default();
    let home = use_state(|| None::<HomeResponse>);

    {
        let home = home.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        match api.client.fetch_home().await {
                            Ok(response) => home.set(Some(response)),
                            Err(err) => gloo::console::warn!(format!("home unavailable: {err}")),
                        }
                    });
                }
                || ()
            },
            locale.locale,
        );
    }

    let Some(home) = (*home).clone() else {
        return loading();
    };

    html! {
        <>
            <Hero slides={home.hero.slides} interval_ms={home.hero.interval_ms} dir={home.dir} />
            <TeamCarousel section={home.team} dir={home.dir} />
            <ClientsCarousel section={home.clients} dir={home.dir} />
        </>
    }
}

#[function_component(ServicesPage)]
pub(crate) fn services_page() -> Html {
    let api = use_context::<ApiCtx>();
    let locale = use_context::<LocaleCtx>().unwrap_or_default();
    let services = use_state(|| None::<ServicesResponse>);

    {
        let services = services.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        match api.client.fetch_services().await {
                            Ok(response) => services.set(Some(response)),
                            Err(err) => gloo::console::warn!(format!("services unavailable: {err}")),
                        }
                    });
                }
                || ()
            },
            locale.locale,
        );
    }

    let Some(services) = (*services).clone() else {
        return loading();
    };
    let page = services.page;

    html! {
        <div dir={services.dir.as_str()}>
            <section
                class="bg-cover bg-center text-white"
                style={format!("background-image: url('{}');", page.hero_image)}
            >
                <div class="bg-brand-dark/70">
                    <div class="mx-auto max-w-7xl px-4 py-16">
                        <Link<Route> to={Route::Home} classes={classes!("text-sm", "text-white/80", "hover:text-white")}>{page.back.clone()}</Link<Route>>
                        <h1 class="mt-4 text-3xl md:text-5xl font-bold">{page.title.clone()}</h1>
                        <p class="mt-4 max-w-3xl text-white/80">{page.intro.clone()}</p>
                    </div>
                </div>
            </section>
            <div class="mx-auto max-w-5xl px-4 py-12 space-y-10">
                { for page.sections.iter().map(|section| html! {
                    <section>
                        <h2 class="text-2xl font-semibold text-brand-dark">{section.title.clone()}</h2>
                        if let Some(intro) = &section.intro {
                            <p class="mt-2 text-gray-600">{intro.clone()}</p>
                        }
                        <ul class="mt-4 list-disc ps-6 space-y-1 text-gray-700">
                            { for section.bullets.iter().map(|bullet| html! { <li>{bullet.clone()}</li> }) }
                        </ul>
                    </section>
                }) }
                <p class="text-sm text-gray-500">{page.footer_note.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let api = use_context::<ApiCtx>();
    let locale = use_context::<LocaleCtx>().unwrap_or_default();
    let query = use_location()
        .and_then(|location| location.query::<SearchQuery>().ok())
        .and_then(|query| query.q)
        .unwrap_or_default();
    let results = use_state(|| None::<SearchResponse>);
    let input_ref = use_node_ref();

    {
        let results = results.clone();
        use_effect_with_deps(
            move |(query, _)| {
                let query = query.clone();
                if let Some(api) = api {
                    spawn_local(async move {
                        match api.client.search(&query).await {
                            Ok(response) => results.set(Some(response)),
                            Err(err) => gloo::console::warn!(format!("search failed: {err}")),
                        }
                    });
                }
                || ()
            },
            (query.clone(), locale.locale),
        );
    }

    let Some(results) = (*results).clone() else {
        return loading();
    };
    let labels = &results.labels;
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
        <div class="mx-auto max-w-5xl px-4 py-12" dir={results.dir.as_str()}>
            <Link<Route> to={Route::Home} classes={classes!("text-sm", "text-brand", "hover:text-brand-dark")}>{labels.back.clone()}</Link<Route>>
            <h1 class="mt-4 text-2xl md:text-3xl font-bold text-brand-dark">{results.heading.clone()}</h1>
            <form class="mt-6 flex gap-3" role="search" {onsubmit}>
                <input
                    ref={input_ref}
                    type="search"
                    name="q"
                    value={results.query.clone()}
                    class="flex-1 rounded-lg border border-gray-300 px-4 py-2"
                    placeholder={labels.placeholder.clone()}
                />
                <button type="submit" class="rounded-lg bg-brand px-5 py-2 font-semibold text-white">{labels.submit.clone()}</button>
            </form>
            if results.is_empty_result() {
                <p class="mt-10 text-gray-500">{labels.no_results.clone()}</p>
            } else {
                if !results.team_members.is_empty() {
                    <section class="mt-10">
                        <h2 class="text-xl font-semibold">{labels.team_members.clone()}</h2>
                        <ul class="mt-4 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            { for results.team_members.iter().map(|member| html! {
                                <li class="rounded-xl ring-1 ring-black/5 p-4 flex gap-4 items-center">
                                    if let Some(image) = &member.image_url {
                                        <img src={image.clone()} alt={member.name.clone()} class="h-16 w-16 rounded-full object-cover" />
                                    }
                                    <div>
                                        <p class="font-semibold">{member.name.clone()}</p>
                                        if let Some(position) = &member.position {
                                            <p class="text-sm text-gray-500">{position.clone()}</p>
                                        }
                                        <div class="mt-1 flex gap-2 text-xs">
                                            { for member.social_links.iter().map(|link| html! {
                                                <a href={link.href.clone()} class="text-brand">{link.label.clone()}</a>
                                            }) }
                                        </div>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </section>
                }
                if !results.clients.is_empty() {
                    <section class="mt-10">
                        <h2 class="text-xl font-semibold">{labels.clients.clone()}</h2>
                        <ul class="mt-4 space-y-6">
                            { for results.clients.iter().map(|client| html! {
                                <li class="rounded-xl ring-1 ring-black/5 p-4">
                                    <p class="font-semibold">{client.name.clone()}</p>
                                    if let Some(company) = &client.company {
                                        <p class="text-sm text-gray-500">{company.clone()}</p>
                                    }
                                    if let Some(message) = &client.message {
                                        <blockquote class="mt-2 text-gray-700">{message.clone()}</blockquote>
                                    }
                                </li>
                            }) }
                        </ul>
                    </section>
                }
            }
            <p class="mt-12 text-sm text-gray-500">{labels.footer_note.clone()}</p>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <div class="mx-auto max-w-xl px-4 py-24 text-center">
            <h1 class="text-4xl font-bold text-brand-dark">{"404"}</h1>
            <Link<Route> to={Route::Home} classes={classes!("mt-6", "inline-block", "text-brand")}>{"Home"}</Link<Route>>
        </div>
    }
}

fn loading() -> Html {
    html! { <div class="min-h-[50vh] animate-pulse bg-gray-50" aria-busy="true" /> }
}
