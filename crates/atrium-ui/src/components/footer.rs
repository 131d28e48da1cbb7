//! Site footer: contact links, newsletter strings and copyright.

use atrium_api_models::FooterResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{ApiCtx, LocaleCtx};
use crate::view::copyright;

#[function_component(SiteFooter)]
pub(crate) fn site_footer() -> Html {
    let api = use_context::<ApiCtx>();
    let locale = use_context::<LocaleCtx>().unwrap_or_default();
    let footer = use_state(|| None::<FooterResponse>);

    {
        let footer = footer.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        match api.client.fetch_footer().await {
                            Ok(response) => footer.set(Some(response)),
                            Err(err) => gloo::console::warn!(format!("footer unavailable: {err}")),
                        }
                    });
                }
                || ()
            },
            locale.locale,
        );
    }

    let Some(footer) = (*footer).clone() else {
        return html! { <footer class="bg-brand-dark h-24" /> };
    };

    html! {
        <footer id="contact" class="bg-brand-dark text-white" dir={footer.dir.as_str()}>
            <div class="mx-auto max-w-7xl px-4 py-12 grid gap-10 md:grid-cols-3">
                <div>
                    <h3 class="text-lg font-semibold">{footer.contacts.clone()}</h3>
                    <ul class="mt-4 space-y-2 text-sm text-white/80">
                        { for footer.links.iter().map(|link| html! { <li>{link.clone()}</li> }) }
                    </ul>
                </div>
                <form
                    class="md:col-span-2 flex flex-col sm:flex-row gap-3 self-start"
                    onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}
                >
                    <input
                        type="email"
                        class="flex-1 rounded-lg px-4 py-2 text-gray-900"
                        placeholder={footer.newsletter.placeholder.clone()}
                    />
                    <button type="submit" class="rounded-lg bg-brand px-5 py-2 font-semibold hover:bg-brand-light">
                        {footer.newsletter.subscribe.clone()}
                    </button>
                </form>
            </div>
            <p class="border-t border-white/10 py-4 text-center text-xs text-white/60">
                {copyright(footer.year, &footer.rights)}
            </p>
        </footer>
    }
}
