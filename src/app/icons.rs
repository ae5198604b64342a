use leptos::{either::Either, prelude::*};

use crate::content::Icon;

enum Glyph {
    /// A devicon font class.
    Font(&'static str),
    /// Inner markup of a 24x24 stroked outline icon.
    Outline(&'static str),
}

fn glyph(icon: Icon) -> Glyph {
    match icon {
        Icon::Briefcase => Glyph::Outline(
            r#"<rect x="2" y="7" width="20" height="14" rx="2" ry="2"></rect><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"></path>"#,
        ),
        Icon::Calendar => Glyph::Outline(
            r#"<rect x="3" y="4" width="18" height="18" rx="2" ry="2"></rect><line x1="16" y1="2" x2="16" y2="6"></line><line x1="8" y1="2" x2="8" y2="6"></line><line x1="3" y1="10" x2="21" y2="10"></line>"#,
        ),
        Icon::Tool => Glyph::Outline(
            r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"></path>"#,
        ),
        Icon::Mail => Glyph::Outline(
            r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline>"#,
        ),
        Icon::Package => Glyph::Outline(
            r#"<line x1="16.5" y1="9.4" x2="7.5" y2="4.21"></line><path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path><polyline points="3.27 6.96 12 12.01 20.73 6.96"></polyline><line x1="12" y1="22.08" x2="12" y2="12"></line>"#,
        ),
        Icon::Github => Glyph::Outline(
            r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path>"#,
        ),
        Icon::ExternalLink => Glyph::Outline(
            r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path><polyline points="15 3 21 3 21 9"></polyline><line x1="10" y1="14" x2="21" y2="3"></line>"#,
        ),
        // devicon has no Stripe glyph
        Icon::Stripe => Glyph::Outline(
            r#"<rect x="1" y="4" width="22" height="16" rx="2" ry="2"></rect><line x1="1" y1="10" x2="23" y2="10"></line>"#,
        ),
        Icon::Linkedin => Glyph::Font("devicon-linkedin-plain"),
        Icon::Firebase => Glyph::Font("devicon-firebase-plain"),
        Icon::GoogleCloud => Glyph::Font("devicon-googlecloud-plain"),
        Icon::Aws => Glyph::Font("devicon-amazonwebservices-plain-wordmark"),
        Icon::Vite => Glyph::Font("devicon-vitejs-plain"),
        Icon::NestJs => Glyph::Font("devicon-nestjs-plain"),
    }
}

/// Renders `icon` in the current text color. `class` sizes it: width and
/// height for outline icons, font size for devicon glyphs.
#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match glyph(icon) {
        Glyph::Font(font_class) => Either::Left(view! {
            <i class=format!("{font_class} {class}") aria-hidden="true"></i>
        }),
        Glyph::Outline(markup) => Either::Right(view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class=class
                aria-hidden="true"
                inner_html=markup
            ></svg>
        }),
    }
}
