use leptos::prelude::*;

use super::{icons::IconView, use_i18n};
use crate::{
    content::{Icon, LINKEDIN_URL, OWNER_NAME, PROFILE_IMAGE},
    i18n::Locale,
};

#[component]
pub fn ProfileCard() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="w-full overflow-hidden rounded-xl bg-card fade-in">
            <img
                src=PROFILE_IMAGE
                alt=move || i18n.t("card.avatar_alt")
                class="block mx-auto mt-8 w-[220px] h-[290px] rounded-md object-cover object-top"
            />
            <div class="flex flex-col items-center gap-4 px-6 pt-4 pb-6 text-center">
                <p class="text-lg font-bold text-accent">{OWNER_NAME}</p>
                <p class="text-sm leading-relaxed text-accent/75">
                    {move || i18n.t("card.description")}
                </p>
                <a
                    href=LINKEDIN_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn"
                    class="text-accent opacity-80 hover:opacity-100 transition-opacity duration-200"
                >
                    <IconView icon=Icon::Linkedin class="text-xl" />
                </a>
                <LocaleSwitcher />
            </div>
        </div>
    }
}

#[component]
fn LocaleSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    let options = Locale::ALL
        .into_iter()
        .enumerate()
        .map(|(i, locale)| {
            view! {
                {(i > 0)
                    .then(|| view! { <span class="text-xs select-none text-white/30">"|"</span> })}
                <button
                    type="button"
                    lang=locale.code()
                    on:click=move |_| i18n.set_locale(locale.code())
                    class=move || {
                        if i18n.locale() == locale {
                            "px-2 text-xs font-bold text-accent"
                        } else {
                            "px-2 text-xs text-white/40 hover:text-white/70"
                        }
                    }
                >
                    {locale.label()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="flex items-center pt-1">{options}</div> }
}
