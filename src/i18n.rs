mod rich;

pub use rich::{parse_rich, RichSegment};

use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

static CATALOG_CACHE: LazyLock<DashMap<Locale, Arc<Catalog>>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "locales"]
struct CatalogFiles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    It,
}

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("no catalog embedded for locale {0}")]
    MissingCatalog(Locale),
    #[error("catalog for locale {locale} is not valid JSON")]
    MalformedCatalog {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for locale {0} must be a JSON object")]
    NotAnObject(Locale),
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::It];
    /// Consulted when the current locale has no entry for a key.
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::It => "it",
        }
    }

    /// Text shown on the locale switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::It => "IT",
        }
    }

    /// First supported locale among language tags in preference order.
    pub fn negotiate<'a, I>(tags: I) -> Option<Locale>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().find_map(|tag| tag.parse().ok())
    }

    fn file_name(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    /// Accepts a bare code or a full language tag (`it`, `en-US`, `it_IT`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| {
                tag.strip_prefix(locale.code())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with(['-', '_']))
            })
            .ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

/// One node of a catalog file as written on disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    List(Vec<Entry>),
    Table(HashMap<String, Entry>),
    Empty,
}

/// Flattened translation table: nested JSON objects become dotted keys.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(locale: Locale, json: &str) -> Result<Self, I18nError> {
        let root: Entry = serde_json::from_str(json)
            .map_err(|source| I18nError::MalformedCatalog { locale, source })?;
        let Entry::Table(table) = root else {
            return Err(I18nError::NotAnObject(locale));
        };
        let mut entries = HashMap::new();
        for (key, entry) in table {
            flatten(key, entry, &mut entries);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(path: String, entry: Entry, out: &mut HashMap<String, String>) {
    match entry {
        Entry::Text(text) => {
            out.insert(path, text);
        }
        Entry::Number(n) => {
            out.insert(path, n.to_string());
        }
        Entry::Flag(b) => {
            out.insert(path, b.to_string());
        }
        Entry::List(items) => {
            for (i, entry) in items.into_iter().enumerate() {
                flatten(format!("{path}.{i}"), entry, out);
            }
        }
        Entry::Table(table) => {
            for (key, entry) in table {
                flatten(format!("{path}.{key}"), entry, out);
            }
        }
        Entry::Empty => {}
    }
}

fn load_catalog(locale: Locale) -> Result<Catalog, I18nError> {
    let file = CatalogFiles::get(&locale.file_name()).ok_or(I18nError::MissingCatalog(locale))?;
    Catalog::from_json(locale, &String::from_utf8_lossy(&file.data))
}

/// The parsed catalog for `locale`, loaded once and shared afterwards.
///
/// A catalog that fails to load is logged and replaced by an empty one, so
/// lookups fall through to the fallback locale or the key itself.
pub fn catalog(locale: Locale) -> Arc<Catalog> {
    let cache = &*CATALOG_CACHE;
    if let Some(catalog) = cache.get(&locale) {
        return catalog.clone();
    }
    cache
        .entry(locale)
        .or_insert_with(|| {
            let catalog = load_catalog(locale).unwrap_or_else(|e| {
                log::warn!("translations unavailable: {e}");
                Catalog::default()
            });
            Arc::new(catalog)
        })
        .clone()
}

/// Resolves `key` in `locale`, then in [`Locale::FALLBACK`], then to the key itself.
pub fn translate(locale: Locale, key: &str) -> String {
    if let Some(s) = catalog(locale).get(key) {
        return s.to_string();
    }
    if locale != Locale::FALLBACK {
        if let Some(s) = catalog(Locale::FALLBACK).get(key) {
            log::debug!("missing {locale} translation for {key}, using {}", Locale::FALLBACK);
            return s.to_string();
        }
    }
    log::debug!("missing translation for {key}");
    key.to_string()
}

/// Every key the page looks up: component keys plus the content tables.
#[cfg(test)]
pub(crate) fn referenced_keys() -> Vec<String> {
    use crate::content::{COMPANIES, NAV_ITEMS, REPOS, TOOLS};
    use crate::section::SectionId;

    const PAGE_KEYS: &[&str] = &[
        "meta.title",
        "meta.description",
        "page.not_found",
        "card.description",
        "card.avatar_alt",
        "hero.description",
        "stats.years_value",
        "stats.years_label",
        "stats.companies_value",
        "stats.companies_label",
        "about.technical_label",
        "about.technical_text",
        "about.hobbies_label",
        "about.hobbies_text",
        "contact.text",
        "contact.linkedin",
        "contact.email",
    ];

    let mut keys = PAGE_KEYS.iter().map(|k| k.to_string()).collect::<Vec<_>>();
    keys.extend(NAV_ITEMS.iter().map(|item| item.label_key.to_string()));
    keys.extend(TOOLS.iter().map(|tool| tool.category_key.to_string()));
    keys.extend(REPOS.iter().map(|repo| repo.desc_key.to_string()));
    for company in COMPANIES {
        keys.push(company.period_key());
        keys.push(company.role_key());
        keys.push(company.desc_key());
    }
    for id in SectionId::ALL {
        keys.push(id.heading_key(1));
        keys.push(id.heading_key(2));
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().ok(), Some(Locale::En));
        assert_eq!("it".parse::<Locale>().ok(), Some(Locale::It));
        assert_eq!("en-US".parse::<Locale>().ok(), Some(Locale::En));
        assert_eq!("it_IT".parse::<Locale>().ok(), Some(Locale::It));
        assert_eq!(" IT ".parse::<Locale>().ok(), Some(Locale::It));

        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale(ref s) if s == "de"));
        // a prefix match must end at a subtag boundary
        assert!("ens".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_negotiate_takes_first_supported_tag() {
        assert_eq!(
            Locale::negotiate(["de-DE", "it-IT", "en-US"]),
            Some(Locale::It)
        );
        assert_eq!(Locale::negotiate(["fr", "es"]), None);
        assert_eq!(Locale::negotiate(std::iter::empty()), None);
    }

    #[test]
    fn test_catalog_flattens_nested_objects() {
        let json = r#"{
            "nav": { "experience": "Experience", "deep": { "er": "yes" } },
            "stats": { "count": 5, "list": ["a", "b"], "nothing": null, "shown": true }
        }"#;
        let catalog = Catalog::from_json(Locale::En, json).unwrap();
        assert_eq!(catalog.get("nav.experience"), Some("Experience"));
        assert_eq!(catalog.get("nav.deep.er"), Some("yes"));
        assert_eq!(catalog.get("stats.count"), Some("5"));
        assert_eq!(catalog.get("stats.list.1"), Some("b"));
        assert_eq!(catalog.get("stats.list.0"), Some("a"));
        assert_eq!(catalog.get("stats.shown"), Some("true"));
        assert_eq!(catalog.get("stats.nothing"), None);
        assert_eq!(catalog.get("nav"), None);
        assert_eq!(catalog.keys().count(), 6);
    }

    #[test]
    fn test_catalog_rejects_bad_input() {
        assert!(matches!(
            Catalog::from_json(Locale::It, "{ not json"),
            Err(I18nError::MalformedCatalog {
                locale: Locale::It,
                ..
            })
        ));
        assert!(matches!(
            Catalog::from_json(Locale::En, r#"["a", "b"]"#),
            Err(I18nError::NotAnObject(Locale::En))
        ));
    }

    #[test]
    fn test_embedded_catalogs_share_keys() {
        let en = catalog(Locale::En);
        let it = catalog(Locale::It);
        assert!(!en.is_empty());
        let mut en_keys = en.keys().collect::<Vec<_>>();
        let mut it_keys = it.keys().collect::<Vec<_>>();
        en_keys.sort_unstable();
        it_keys.sort_unstable();
        assert_eq!(en_keys, it_keys);
    }

    #[test]
    fn test_every_referenced_key_is_translated() {
        for locale in Locale::ALL {
            let catalog = catalog(locale);
            for key in referenced_keys() {
                assert!(
                    catalog.get(&key).is_some(),
                    "{key} missing from {locale} catalog"
                );
            }
        }
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(translate(Locale::It, "nope.not_here"), "nope.not_here");
        assert_eq!(translate(Locale::En, "nope.not_here"), "nope.not_here");
    }

    #[test]
    fn test_locale_round_trip_restores_labels() {
        let keys = referenced_keys();
        let english = keys
            .iter()
            .map(|k| translate(Locale::En, k))
            .collect::<Vec<_>>();
        let italian = keys
            .iter()
            .map(|k| translate(Locale::It, k))
            .collect::<Vec<_>>();
        assert_ne!(english, italian);

        let back = keys
            .iter()
            .map(|k| translate("en".parse().unwrap(), k))
            .collect::<Vec<_>>();
        assert_eq!(english, back);
    }

    #[test]
    fn test_technical_text_links_known_tech() {
        for locale in Locale::ALL {
            let segments = parse_rich(&translate(locale, "about.technical_text"));
            let tags = segments
                .iter()
                .filter_map(|s| match s {
                    RichSegment::Tagged { tag, .. } => Some(tag.as_str()),
                    RichSegment::Text(_) => None,
                })
                .collect::<Vec<_>>();
            assert_eq!(tags, vec!["react", "angular", "nodejs"], "{locale}");
            for tag in tags {
                assert!(crate::content::tech_link(tag).is_some());
            }
        }
    }
}
