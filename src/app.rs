mod avatar;
mod dom;
mod homepage;
mod icons;
mod locale;
mod nav;
mod sections;

pub use locale::{provide_i18n, use_i18n, I18n};

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::OWNER_NAME, i18n::Locale};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans text-body bg-page">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let i18n = provide_i18n(Locale::FALLBACK);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(locale) = locale::browser_locale() {
            i18n.set(locale);
        }
    });

    view! {
        <Html {..} lang=move || i18n.locale().code() />
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <main class="w-full">
                <Routes fallback=move || i18n.t("page.not_found")>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
