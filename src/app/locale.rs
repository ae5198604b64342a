use leptos::prelude::*;

use crate::i18n::{translate, Locale};

/// Current locale, shared through context. Every `t` call made inside a
/// reactive scope re-runs when the locale changes.
#[derive(Debug, Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
}

impl I18n {
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key)
    }

    pub fn set(&self, locale: Locale) {
        if self.locale.get_untracked() != locale {
            self.locale.set(locale);
        }
    }

    /// Switches to the locale named by `code`; unsupported codes are ignored.
    pub fn set_locale(&self, code: &str) {
        match code.parse::<Locale>() {
            Ok(locale) => self.set(locale),
            Err(e) => log::warn!("{e}"),
        }
    }
}

pub fn provide_i18n(initial: Locale) -> I18n {
    let i18n = I18n {
        locale: RwSignal::new(initial),
    };
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

/// The first supported entry of `navigator.languages`.
#[cfg(feature = "hydrate")]
pub fn browser_locale() -> Option<Locale> {
    let tags = window()
        .navigator()
        .languages()
        .iter()
        .filter_map(|tag| tag.as_string())
        .collect::<Vec<_>>();
    Locale::negotiate(tags.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::referenced_keys;

    fn labels(i18n: I18n) -> Vec<String> {
        referenced_keys().iter().map(|key| i18n.t(key)).collect()
    }

    #[test]
    fn test_set_locale_round_trip() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = provide_i18n(Locale::En);
            assert_eq!(use_i18n().locale(), Locale::En);
            let english = labels(i18n);
            assert_eq!(i18n.t("nav.experience"), "Experience");

            i18n.set_locale("it");
            assert_eq!(i18n.locale(), Locale::It);
            let italian = labels(i18n);
            assert_ne!(english, italian);
            assert_eq!(i18n.t("nav.experience"), "Esperienza");

            // unsupported codes leave the locale alone
            i18n.set_locale("xx");
            assert_eq!(i18n.locale(), Locale::It);
            assert_eq!(labels(i18n), italian);

            i18n.set_locale("en-US");
            assert_eq!(use_i18n().locale(), Locale::En);
            assert_eq!(labels(i18n), english);
        });
    }

    #[test]
    fn test_context_is_shared() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = provide_i18n(Locale::It);
            use_i18n().set(Locale::En);
            assert_eq!(i18n.locale(), Locale::En);
            assert_eq!(i18n.t("page.not_found"), translate(Locale::En, "page.not_found"));
        });
    }
}
