use leptos::prelude::*;

use super::{dom::scroll_to_section, icons::IconView, use_i18n};
use crate::{content::NAV_ITEMS, section::SectionId};

/// One icon button per section. The button for `active` is highlighted.
///
/// Rendered twice on the page: the floating bar on mobile and the bar under
/// the profile card on desktop.
#[component]
pub fn NavIcons(#[prop(into)] active: Signal<SectionId>) -> impl IntoView {
    let i18n = use_i18n();
    let buttons = NAV_ITEMS
        .iter()
        .map(|item| {
            let id = item.id;
            let label_key = item.label_key;
            view! {
                <button
                    type="button"
                    title=move || i18n.t(label_key)
                    aria-label=move || i18n.t(label_key)
                    aria-current=move || (active.get() == id).then_some("true")
                    on:click=move |_| scroll_to_section(id)
                    class=move || {
                        if active.get() == id {
                            "px-3 py-2 rounded-md text-accent hover:bg-white/10 transition-colors duration-200"
                        } else {
                            "px-3 py-2 rounded-md text-white/40 hover:text-accent hover:bg-white/10 transition-colors duration-200"
                        }
                    }
                >
                    <IconView icon=item.icon class="w-[18px] h-[18px]" />
                </button>
            }
        })
        .collect_view();

    view! { <nav class="flex items-center justify-center gap-1">{buttons}</nav> }
}
