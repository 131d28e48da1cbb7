//! Two-locale toggle in the top bar.

use gloo::utils::window;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{ApiCtx, LocaleCtx, current_path};
use crate::view::locale_badge;

#[function_component(LocaleSwitcher)]
pub(crate) fn locale_switcher() -> Html {
    let api = use_context::<ApiCtx>();
    let current = use_context::<LocaleCtx>().unwrap_or_default();
    let busy = use_state(|| false);
    let target = current.locale.toggled();

    let onclick = {
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(api) = api.clone() else {
                return;
            };
            if *busy {
                return;
            }
            busy.set(true);
            let busy = busy.clone();
            spawn_local(async move {
                match api.client.set_locale(target, &current_path()).await {
                    Ok(_) => {
                        let _ = window().location().reload();
                    }
                    Err(err) => {
                        gloo::console::warn!(format!("locale switch failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <button
            type="button"
            class="rounded-full px-3 py-1 text-sm font-semibold ring-1 ring-brand/30 hover:bg-brand-lighter"
            aria-label={target.label()}
            title={target.label()}
            disabled={*busy}
            {onclick}
        >
            {locale_badge(target)}
        </button>
    }
}
