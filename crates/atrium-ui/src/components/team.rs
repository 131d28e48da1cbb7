//! Team carousel: clamped, responsive cards per view.

use atrium_carousel::{CarouselController, Side};
use atrium_i18n::{TeamMember, TeamSection, TextDirection};
use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

use super::{NavButton, dispatch_callback, use_swipe, viewport_width};
use crate::state::{CarouselAction, CarouselState};
use crate::view::{item_basis, track_transform};

#[derive(Properties, PartialEq)]
pub(crate) struct TeamCarouselProps {
    pub section: TeamSection,
    pub dir: TextDirection,
}

#[function_component(TeamCarousel)]
pub(crate) fn team_carousel(props: &TeamCarouselProps) -> Html {
    let carousel = {
        let count = props.section.members.len();
        let dir = props.dir;
        use_reducer(move || {
            CarouselState::new(CarouselController::team(count, viewport_width(), dir))
        })
    };
    let dispatch = dispatch_callback(&carousel);
    let swipe = use_swipe(dispatch.clone());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&window(), "resize", move |_| {
                    dispatch.emit(CarouselAction::Resize(viewport_width()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    let controller = &carousel.controller;
    let basis = item_basis(controller);

    html! {
        <section id="team" class="bg-brand-lighter/40" dir={props.dir.as_str()}>
            <div class="mx-auto max-w-7xl px-4 py-12 md:py-16">
                <div class="text-center max-w-3xl mx-auto">
                    <h2 class="text-2xl md:text-4xl font-bold text-brand-dark">{props.section.title.clone()}</h2>
                    <p class="mt-3 text-gray-600">{props.section.description.clone()}</p>
                </div>
                <div class="relative mt-8 md:mt-10">
                    <NavButton side={Side::Left} dir={props.dir} enabled={controller.button_enabled(Side::Left)} on_press={dispatch.clone()} />
                    <div
                        class="overflow-hidden"
                        ontouchstart={swipe.start}
                        ontouchmove={swipe.moved}
                        ontouchend={swipe.end}
                        ontouchcancel={swipe.cancel}
                    >
                        <div class="flex transition-transform duration-500 ease-out" style={track_transform(controller)}>
                            { for props.section.members.iter().map(|member| html! {
                                <div class="px-3" style={basis.clone()}>
                                    <MemberCard member={member.clone()} />
                                </div>
                            }) }
                        </div>
                    </div>
                    <NavButton side={Side::Right} dir={props.dir} enabled={controller.button_enabled(Side::Right)} on_press={dispatch} />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: TeamMember,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = &props.member;
    let links = [
        ("Phone", member.phone.as_ref()),
        ("WhatsApp", member.whatsapp.as_ref()),
        ("Email", member.email.as_ref()),
    ];
    html! {
        <article class="rounded-2xl bg-white shadow-sm ring-1 ring-black/5 overflow-hidden">
            <img src={member.photo.clone()} alt={member.name.clone()} class="h-72 w-full object-cover" loading="lazy" />
            <div class="p-5 text-center">
                <h3 class="text-lg font-semibold text-brand-dark">{member.name.clone()}</h3>
                <p class="text-sm text-gray-500">{member.position.clone()}</p>
                <div class="mt-3 flex justify-center gap-3">
                    { for links.into_iter().filter_map(|(label, href)| href.map(|href| html! {
                        <a href={href.clone()} aria-label={label} class="text-brand hover:text-brand-dark text-sm">{label}</a>
                    })) }
                </div>
            </div>
        </article>
    }
}
