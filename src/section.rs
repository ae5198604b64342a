use std::{fmt, str::FromStr};

use thiserror::Error;

/// One of the five page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Experience,
    Timeline,
    Tools,
    Repos,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Experience,
        SectionId::Timeline,
        SectionId::Tools,
        SectionId::Repos,
        SectionId::Contact,
    ];

    /// The DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Experience => "experience",
            SectionId::Timeline => "timeline",
            SectionId::Tools => "tools",
            SectionId::Repos => "repos",
            SectionId::Contact => "contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Translation key of one of the two heading lines (`1` or `2`).
    ///
    /// The experience section opens the page, so its heading lives under `hero`.
    pub fn heading_key(self, line: u8) -> String {
        let namespace = match self {
            SectionId::Experience => "hero",
            other => other.as_str(),
        };
        format!("{namespace}.title_line{line}")
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids_parse_back() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "about".parse::<SectionId>(),
            Err(UnknownSection("about".to_string()))
        );
        // ids are case sensitive, like the DOM
        assert!("Contact".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_index_follows_display_order() {
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_heading_keys() {
        assert_eq!(SectionId::Experience.heading_key(1), "hero.title_line1");
        assert_eq!(SectionId::Repos.heading_key(2), "repos.title_line2");
    }
}
