//! Hero banner: wrapping carousel with auto-advance.

use std::time::Duration;

use atrium_carousel::{AutoAdvance, CarouselController, Rearm, Side};
use atrium_i18n::{Slide, TextDirection};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::{NavButton, dispatch_callback, use_swipe};
use crate::state::{CarouselAction, CarouselState};
use crate::view::{dot_class, dot_label};

#[derive(Properties, PartialEq)]
pub(crate) struct HeroProps {
    pub slides: Vec<Slide>,
    pub interval_ms: u64,
    pub dir: TextDirection,
}

#[function_component(Hero)]
pub(crate) fn hero(props: &HeroProps) -> Html {
    let carousel = {
        let count = props.slides.len();
        let dir = props.dir;
        use_reducer(move || CarouselState::new(CarouselController::hero(count, dir)))
    };
    let dispatch = dispatch_callback(&carousel);
    let swipe = use_swipe(dispatch.clone());
    let auto = use_mut_ref(AutoAdvance::new);

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |(count, interval_ms)| {
                let rearm = auto
                    .borrow_mut()
                    .sync(*count, Duration::from_millis(*interval_ms));
                let timer = match rearm {
                    Rearm::Start {
                        interval,
                        generation,
                    } => {
                        let live = auto.clone();
                        let millis = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
                        Some(Interval::new(millis, move || {
                            if live.borrow().is_current(generation) {
                                dispatch.emit(CarouselAction::Tick);
                            }
                        }))
                    }
                    Rearm::Stop | Rearm::Keep => None,
                };
                move || {
                    auto.borrow_mut().cancel();
                    drop(timer);
                }
            },
            (props.slides.len(), props.interval_ms),
        );
    }

    let controller = &carousel.controller;
    let Some(slide) = props.slides.get(controller.index()) else {
        return html! {};
    };
    let several = props.slides.len() > 1;

    html! {
        <section
            class="relative overflow-hidden bg-brand-dark text-white"
            dir={props.dir.as_str()}
            ontouchstart={swipe.start}
            ontouchmove={swipe.moved}
            ontouchend={swipe.end}
            ontouchcancel={swipe.cancel}
        >
            <div class="mx-auto max-w-7xl px-4 py-16 md:py-24 grid gap-10 md:grid-cols-2 items-center">
                <div class="space-y-5">
                    if let Some(title) = &slide.title {
                        <h1 class="text-3xl md:text-5xl font-bold leading-tight">{title.clone()}</h1>
                    }
                    if let Some(description) = &slide.description {
                        <p class="text-base md:text-lg text-white/80">{description.clone()}</p>
                    }
                    if let Some((label, href)) = slide.call_to_action() {
                        <a
                            href={href.to_string()}
                            class="inline-flex rounded-full bg-brand px-6 py-3 font-semibold hover:bg-brand-light"
                        >
                            {label.to_string()}
                        </a>
                    }
                </div>
                <div class="flex justify-center">
                    <img
                        src={slide.portrait_url.clone()}
                        alt=""
                        class="max-h-[28rem] w-auto object-contain"
                    />
                </div>
            </div>
            if several {
                <NavButton side={Side::Left} dir={props.dir} enabled={controller.button_enabled(Side::Left)} on_press={dispatch.clone()} />
                <NavButton side={Side::Right} dir={props.dir} enabled={controller.button_enabled(Side::Right)} on_press={dispatch.clone()} />
                <div class="absolute bottom-6 inset-x-0 flex justify-center gap-2">
                    { for (0..props.slides.len()).map(|index| {
                        let dispatch = dispatch.clone();
                        html! {
                            <button
                                type="button"
                                class={dot_class(index == controller.index())}
                                aria-label={dot_label(index)}
                                onclick={Callback::from(move |_: MouseEvent| dispatch.emit(CarouselAction::GoTo(index)))}
                            />
                        }
                    }) }
                </div>
            }
        </section>
    }
}
