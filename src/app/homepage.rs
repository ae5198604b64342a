use leptos::{ev, html, prelude::*};
use leptos_meta::{Meta, Title};
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use web_sys::Node;

use super::{
    avatar::ProfileCard,
    nav::NavIcons,
    sections::{ContactSection, ExperienceSection, ReposSection, TimelineSection, ToolsSection},
    use_i18n,
};
use crate::{
    section::SectionId,
    spy::{redirect_wheel, ActiveSection, SectionVisibility, ViewportClass, MOBILE_MEDIA_QUERY},
};

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);
    let viewport = Signal::derive(move || ViewportClass::from_matches(is_mobile.get()));

    let visibility = RwSignal::new(SectionVisibility::default());
    let active = RwSignal::new(ActiveSection::default());
    let panel_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    super::dom::watch_sections(viewport, panel_ref, visibility, active);

    let active_id = Signal::derive(move || active.with(ActiveSection::current));
    let visible = move |id: SectionId| Signal::derive(move || visibility.with(|v| v.is_visible(id)));

    // The desktop page is a fixed frame, so wheel input anywhere on it
    // scrolls the content panel.
    let on_wheel = move |ev: ev::WheelEvent| {
        let Some(panel) = panel_ref.get_untracked() else {
            return;
        };
        let in_panel = ev
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| panel.contains(Some(&node)));
        if let Some(top) =
            redirect_wheel(viewport.get_untracked(), in_panel, panel.scroll_top(), ev.delta_y())
        {
            panel.set_scroll_top(top);
        }
    };

    view! {
        <Title text=move || i18n.t("meta.title") />
        <Meta name="description" content=move || i18n.t("meta.description") />
        <div class="fixed inset-0 -z-10 gradient-background" aria-hidden="true"></div>
        <div class="relative min-h-screen md:h-screen md:overflow-hidden" on:wheel=on_wheel>
            <div class="fixed top-4 left-1/2 z-50 -translate-x-1/2 px-2 py-1 rounded-xl border border-white/10 bg-card/90 backdrop-blur md:hidden">
                <NavIcons active=active_id />
            </div>
            <div class="flex flex-col md:flex-row md:h-full mx-auto max-w-[1400px]">
                <aside class="flex flex-col items-center gap-6 shrink-0 px-5 pt-20 md:w-[340px] md:h-full md:justify-center md:pt-0 md:pl-16 md:pr-0">
                    <ProfileCard />
                    <div class="hidden md:block px-2 py-1 rounded-xl bg-card">
                        <NavIcons active=active_id />
                    </div>
                </aside>
                <div node_ref=panel_ref class="flex-1 md:h-full md:overflow-y-auto no-scrollbar">
                    <ExperienceSection visible=visible(SectionId::Experience) />
                    <TimelineSection visible=visible(SectionId::Timeline) />
                    <ToolsSection visible=visible(SectionId::Tools) />
                    <ReposSection visible=visible(SectionId::Repos) />
                    <ContactSection visible=visible(SectionId::Contact) />
                </div>
            </div>
        </div>
    }
}
