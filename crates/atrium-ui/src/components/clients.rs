//! Client testimonials: clamped, one quote per view.

use atrium_carousel::{CarouselController, Side};
use atrium_i18n::{ClientsSection, TextDirection};
use yew::prelude::*;

use super::{NavButton, dispatch_callback, use_swipe};
use crate::state::CarouselState;
use crate::view::{item_basis, track_transform};

#[derive(Properties, PartialEq)]
pub(crate) struct ClientsCarouselProps {
    pub section: ClientsSection,
    pub dir: TextDirection,
}

#[function_component(ClientsCarousel)]
pub(crate) fn clients_carousel(props: &ClientsCarouselProps) -> Html {
    let carousel = {
        let count = props.section.slides.len();
        let dir = props.dir;
        use_reducer(move || CarouselState::new(CarouselController::clients(count, dir)))
    };
    let dispatch = dispatch_callback(&carousel);
    let swipe = use_swipe(dispatch.clone());
    let controller = &carousel.controller;
    let basis = item_basis(controller);

    html! {
        <section id="clients" class="bg-white" dir={props.dir.as_str()}>
            <div class="mx-auto max-w-5xl px-4 py-12 md:py-16">
                <div class="text-center">
                    <h2 class="text-2xl md:text-4xl font-bold text-brand-dark">{props.section.title.clone()}</h2>
                    <p class="mt-3 text-gray-600">{props.section.subtitle.clone()}</p>
                </div>
                <div class="relative mt-8">
                    <NavButton side={Side::Left} dir={props.dir} enabled={controller.button_enabled(Side::Left)} on_press={dispatch.clone()} />
                    <div
                        class="overflow-hidden"
                        ontouchstart={swipe.start}
                        ontouchmove={swipe.moved}
                        ontouchend={swipe.end}
                        ontouchcancel={swipe.cancel}
                    >
                        <div class="flex transition-transform duration-500 ease-out" style={track_transform(controller)}>
                            { for props.section.slides.iter().map(|client| html! {
                                <figure class="px-6 md:px-12 text-center" style={basis.clone()}>
                                    <img src={client.photo.clone()} alt={client.name.clone()} class="mx-auto h-20 w-20 rounded-full object-cover" loading="lazy" />
                                    <blockquote class="mt-6 text-lg text-gray-700">{client.quote.clone()}</blockquote>
                                    <figcaption class="mt-4">
                                        <span class="font-semibold text-brand-dark">{client.name.clone()}</span>
                                        if let Some(role) = &client.role {
                                            <span class="block text-sm text-gray-500">{role.clone()}</span>
                                        }
                                    </figcaption>
                                </figure>
                            }) }
                        </div>
                    </div>
                    <NavButton side={Side::Right} dir={props.dir} enabled={controller.button_enabled(Side::Right)} on_press={dispatch} />
                </div>
            </div>
        </section>
    }
}
