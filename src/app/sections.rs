use leptos::{either::Either, prelude::*};

use super::{icons::IconView, use_i18n};
use crate::{
    content::{mailto, tech_link, Company, Icon, COMPANIES, LINKEDIN_URL, REPOS, TOOLS},
    i18n::{parse_rich, RichSegment},
    section::SectionId,
};

const HEADING: &str =
    "text-5xl md:text-8xl font-extrabold leading-none tracking-tight text-white";
const HEADING_DIM: &str =
    "text-5xl md:text-8xl font-extrabold leading-none tracking-tight text-white/30";
const LABEL: &str = "text-xs font-semibold uppercase tracking-widest text-accent";

fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "flex flex-col items-start gap-10 transition-all duration-[600ms] ease-out opacity-100 translate-y-0"
    } else {
        "flex flex-col items-start gap-10 transition-all duration-[600ms] ease-out opacity-0 -translate-y-5"
    }
}

/// Section wrapper: carries the DOM id the observers and navigation look for,
/// and fades its content in when revealed.
#[component]
fn SectionFrame(id: SectionId, #[prop(into)] visible: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <section id=id.as_str() class="px-5 md:px-16 pt-16 md:pt-24 pb-28 md:pb-48">
            <div class=move || reveal_class(visible.get())>{children()}</div>
        </section>
    }
}

#[component]
fn SectionHeading(id: SectionId) -> impl IntoView {
    let i18n = use_i18n();
    let first = id.heading_key(1);
    let second = id.heading_key(2);
    view! {
        <div class="flex flex-col">
            <h2 class=HEADING>{move || i18n.t(&first)}</h2>
            <h2 class=HEADING_DIM>{move || i18n.t(&second)}</h2>
        </div>
    }
}

#[component]
fn Divider() -> impl IntoView {
    view! { <div class="w-full h-px bg-white/10"></div> }
}

/// Translated text with `<tag>` markup turned into links.
#[component]
fn RichText(key: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    move || {
        parse_rich(&i18n.t(key))
            .into_iter()
            .map(|segment| match segment {
                RichSegment::Text(text) => Either::Left(text),
                RichSegment::Tagged { tag, text } => Either::Right(view! {
                    <a
                        href=tech_link(&tag).unwrap_or("#")
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-accent hover:underline"
                    >
                        {text}
                    </a>
                }),
            })
            .collect_view()
    }
}

#[component]
fn Stat(value_key: &'static str, label_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="flex flex-col items-start">
            <span class="text-4xl md:text-6xl font-bold leading-none text-white">
                {move || i18n.t(value_key)}
            </span>
            <span class="pt-1 text-xs uppercase tracking-widest text-muted">
                {move || i18n.t(label_key)}
            </span>
        </div>
    }
}

#[component]
fn Blurb(label_key: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="flex flex-col items-start gap-2">
            <span class=LABEL>{move || i18n.t(label_key)}</span>
            <p class="text-sm md:text-lg leading-[1.8] text-body">{children()}</p>
        </div>
    }
}

#[component]
pub fn ExperienceSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <SectionFrame id=SectionId::Experience visible>
            <SectionHeading id=SectionId::Experience />
            <p class="max-w-[520px] text-sm md:text-base leading-relaxed text-body">
                {move || i18n.t("hero.description")}
            </p>
            <div class="flex gap-8 md:gap-16 pt-2">
                <Stat value_key="stats.years_value" label_key="stats.years_label" />
                <Stat value_key="stats.companies_value" label_key="stats.companies_label" />
            </div>
            <Divider />
            <div class="flex flex-col items-start gap-8 max-w-[680px]">
                <Blurb label_key="about.technical_label">
                    <RichText key="about.technical_text" />
                </Blurb>
                <Blurb label_key="about.hobbies_label">{move || i18n.t("about.hobbies_text")}</Blurb>
            </div>
        </SectionFrame>
    }
}

#[component]
pub fn TimelineSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    let entries = COMPANIES
        .iter()
        .enumerate()
        .map(|(i, company)| {
            let spine = Company::spine(i, COMPANIES.len());
            let period = company.period_key();
            let role = company.role_key();
            let desc = company.desc_key();
            view! {
                <div class="flex items-start gap-6 w-full">
                    <div class="flex flex-col items-center self-stretch shrink-0 pt-1">
                        <div class=if spine.above {
                            "w-0.5 h-3 bg-edge"
                        } else {
                            "w-0.5 h-3 bg-transparent"
                        }></div>
                        <div class="w-3 h-3 mt-1 rounded-full shrink-0 bg-accent"></div>
                        <div class=if spine.below {
                            "w-0.5 flex-1 min-h-16 bg-edge"
                        } else {
                            "w-0.5 flex-1 min-h-16 bg-transparent"
                        }></div>
                    </div>
                    <div class="flex flex-col items-start gap-1 pb-8">
                        <div class="flex flex-wrap items-baseline gap-3">
                            <span class="text-lg md:text-xl font-bold text-white">
                                {company.name}
                            </span>
                            <span class="text-xs uppercase tracking-wide text-muted">
                                {move || i18n.t(&period)}
                            </span>
                        </div>
                        <span class="text-sm font-medium text-accent">{move || i18n.t(&role)}</span>
                        <p class="text-sm md:text-base leading-relaxed text-body">
                            {move || i18n.t(&desc)}
                        </p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <SectionFrame id=SectionId::Timeline visible>
            <SectionHeading id=SectionId::Timeline />
            <Divider />
            <div class="flex flex-col items-start w-full max-w-[680px]">{entries}</div>
        </SectionFrame>
    }
}

#[component]
pub fn ToolsSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    let cards = TOOLS
        .iter()
        .map(|tool| {
            let category_key = tool.category_key;
            view! {
                <a href=tool.url target="_blank" rel="noopener noreferrer" class="flex">
                    <div class="flex items-center gap-4 w-full h-20 px-4 rounded-xl border border-edge bg-panel/50 hover:border-accent hover:bg-panel/85 transition-all duration-200">
                        <span class="flex items-center justify-center w-10 h-10 rounded-lg shrink-0 text-accent bg-accent/10">
                            <IconView icon=tool.icon class="w-5 h-5 text-xl" />
                        </span>
                        <div class="flex flex-col items-start">
                            <span class="font-semibold text-white">{tool.name}</span>
                            <span class="text-xs text-muted">{move || i18n.t(category_key)}</span>
                        </div>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <SectionFrame id=SectionId::Tools visible>
            <SectionHeading id=SectionId::Tools />
            <Divider />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 w-full max-w-[640px]">{cards}</div>
        </SectionFrame>
    }
}

#[component]
pub fn ReposSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    let repos = REPOS
        .iter()
        .map(|repo| {
            let desc_key = repo.desc_key;
            view! {
                <a href=repo.url target="_blank" rel="noopener noreferrer" class="flex w-full">
                    <div class="flex items-start gap-4 w-full px-5 py-4 rounded-xl border border-edge bg-panel/50 hover:border-accent hover:bg-panel/85 transition-all duration-200">
                        <span class="pt-1 shrink-0 text-accent">
                            <IconView icon=Icon::Github class="w-6 h-6" />
                        </span>
                        <div class="flex flex-col items-start gap-2 flex-1">
                            <div class="flex items-center justify-between gap-2 w-full">
                                <span class="font-semibold text-white">{repo.name}</span>
                                <span class="text-accent">
                                    <IconView icon=Icon::ExternalLink class="w-3.5 h-3.5" />
                                </span>
                            </div>
                            <p class="text-sm leading-relaxed text-body">{move || i18n.t(desc_key)}</p>
                            <div class="flex flex-wrap gap-2">
                                {repo
                                    .tech
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="px-2 py-0.5 rounded-md text-xs font-medium text-accent bg-accent/10">
                                                {*tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <SectionFrame id=SectionId::Repos visible>
            <SectionHeading id=SectionId::Repos />
            <Divider />
            <div class="flex flex-col items-start gap-4 w-full max-w-[640px]">{repos}</div>
        </SectionFrame>
    }
}

#[component]
pub fn ContactSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <SectionFrame id=SectionId::Contact visible>
            <SectionHeading id=SectionId::Contact />
            <Divider />
            <p class="max-w-[580px] text-base md:text-xl leading-[1.8] text-body">
                {move || i18n.t("contact.text")}
            </p>
            <div class="flex flex-col items-start gap-4">
                <a
                    href=LINKEDIN_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-3 text-accent hover:opacity-75 transition-opacity duration-200"
                >
                    <IconView icon=Icon::Linkedin class="text-xl" />
                    <span class="font-semibold text-base md:text-lg">
                        {move || i18n.t("contact.linkedin")}
                    </span>
                </a>
                <a
                    href=mailto()
                    class="flex items-center gap-3 text-accent hover:opacity-75 transition-opacity duration-200"
                >
                    <IconView icon=Icon::Mail class="w-5 h-5" />
                    <span class="font-semibold text-base md:text-lg">
                        {move || i18n.t("contact.email")}
                    </span>
                </a>
            </div>
        </SectionFrame>
    }
}
