use crate::section::SectionId;

pub const OWNER_NAME: &str = "Mattia Gallinaro";
pub const EMAIL: &str = "mattia.gallinaro93@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/mattiagallinaro";
pub const PROFILE_IMAGE: &str = "/profile.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Briefcase,
    Calendar,
    Tool,
    Mail,
    Package,
    Github,
    ExternalLink,
    Linkedin,
    Stripe,
    Firebase,
    GoogleCloud,
    Aws,
    Vite,
    NestJs,
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: SectionId,
    pub icon: Icon,
    pub label_key: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: SectionId::Experience,
        icon: Icon::Briefcase,
        label_key: "nav.experience",
    },
    NavItem {
        id: SectionId::Timeline,
        icon: Icon::Calendar,
        label_key: "nav.timeline",
    },
    NavItem {
        id: SectionId::Tools,
        icon: Icon::Tool,
        label_key: "nav.tools",
    },
    NavItem {
        id: SectionId::Repos,
        icon: Icon::Github,
        label_key: "nav.repos",
    },
    NavItem {
        id: SectionId::Contact,
        icon: Icon::Mail,
        label_key: "nav.contact",
    },
];

/// A timeline entry. Period, role and description are translated.
#[derive(Debug, Clone, Copy)]
pub struct Company {
    pub id: &'static str,
    pub name: &'static str,
}

/// Which halves of the timeline spine are drawn around an entry's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spine {
    pub above: bool,
    pub below: bool,
}

impl Company {
    pub fn period_key(&self) -> String {
        format!("timeline.{}_period", self.id)
    }

    pub fn role_key(&self) -> String {
        format!("timeline.{}_role", self.id)
    }

    pub fn desc_key(&self) -> String {
        format!("timeline.{}_desc", self.id)
    }

    pub fn spine(index: usize, len: usize) -> Spine {
        Spine {
            above: index > 0,
            below: index + 1 < len,
        }
    }
}

pub const COMPANIES: &[Company] = &[
    Company {
        id: "exabyte",
        name: "Exabyte",
    },
    Company {
        id: "m31",
        name: "M31",
    },
    Company {
        id: "scai",
        name: "SCAI ITEC",
    },
    Company {
        id: "remedia",
        name: "reMedia",
    },
    Company {
        id: "trizeta",
        name: "Trizeta",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub name: &'static str,
    pub icon: Icon,
    pub url: &'static str,
    pub category_key: &'static str,
}

pub const TOOLS: &[Tool] = &[
    Tool {
        name: "Stripe",
        icon: Icon::Stripe,
        url: "https://stripe.com",
        category_key: "tools.cat_payments",
    },
    Tool {
        name: "RevenueCat",
        icon: Icon::Package,
        url: "https://www.revenuecat.com",
        category_key: "tools.cat_subscriptions",
    },
    Tool {
        name: "Firebase",
        icon: Icon::Firebase,
        url: "https://firebase.google.com",
        category_key: "tools.cat_backend_db",
    },
    Tool {
        name: "Google Cloud",
        icon: Icon::GoogleCloud,
        url: "https://cloud.google.com",
        category_key: "tools.cat_cloud",
    },
    Tool {
        name: "AWS",
        icon: Icon::Aws,
        url: "https://aws.amazon.com",
        category_key: "tools.cat_cloud",
    },
    Tool {
        name: "Vite",
        icon: Icon::Vite,
        url: "https://vitejs.dev",
        category_key: "tools.cat_build",
    },
    Tool {
        name: "NestJS",
        icon: Icon::NestJs,
        url: "https://nestjs.com",
        category_key: "tools.cat_backend_fw",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Repo {
    pub name: &'static str,
    pub url: &'static str,
    pub desc_key: &'static str,
    pub tech: &'static [&'static str],
}

pub const REPOS: &[Repo] = &[
    Repo {
        name: "know-about-me",
        url: "https://github.com/Hiru93/know-about-me",
        desc_key: "repos.knowaboutme_desc",
        tech: &["React", "TypeScript", "Vite"],
    },
    Repo {
        name: "mssqlImporter",
        url: "https://github.com/Hiru93/mssqlImporter",
        desc_key: "repos.mssqlimporter_desc",
        tech: &["Node.js", "MSSQL", "CLI"],
    },
    Repo {
        name: "merger-lg-csv",
        url: "https://github.com/Hiru93/merger-lg-csv",
        desc_key: "repos.merger_desc",
        tech: &["Node.js", "CSV"],
    },
];

/// Link target for a tag used in translated rich text (`<react>React</react>`).
pub fn tech_link(tag: &str) -> Option<&'static str> {
    match tag {
        "react" => Some("https://react.dev"),
        "angular" => Some("https://angular.dev"),
        "nodejs" => Some("https://nodejs.org"),
        _ => None,
    }
}

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_static_assets_are_shipped() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [PROFILE_IMAGE, "/favicon.svg"] {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "{} is missing", path.display());
        }
    }

    #[test]
    fn test_nav_items_cover_every_section_in_order() {
        let ids = NAV_ITEMS.iter().map(|item| item.id).collect::<Vec<_>>();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_spine_is_truncated_at_both_ends() {
        let len = COMPANIES.len();
        assert_eq!(
            Company::spine(0, len),
            Spine {
                above: false,
                below: true
            }
        );
        assert_eq!(
            Company::spine(2, len),
            Spine {
                above: true,
                below: true
            }
        );
        assert_eq!(
            Company::spine(len - 1, len),
            Spine {
                above: true,
                below: false
            }
        );
        // a single entry has no spine at all
        assert_eq!(
            Company::spine(0, 1),
            Spine {
                above: false,
                below: false
            }
        );
    }

    #[test]
    fn test_company_keys() {
        let scai = COMPANIES[2];
        assert_eq!(scai.period_key(), "timeline.scai_period");
        assert_eq!(scai.role_key(), "timeline.scai_role");
        assert_eq!(scai.desc_key(), "timeline.scai_desc");
    }

    #[test]
    fn test_tech_links() {
        assert_eq!(tech_link("nodejs"), Some("https://nodejs.org"));
        assert_eq!(tech_link("cobol"), None);
        assert_eq!(mailto(), "mailto:mattia.gallinaro93@gmail.com");
    }

    #[test]
    fn test_outbound_links_are_absolute() {
        let urls = TOOLS
            .iter()
            .map(|t| t.url)
            .chain(REPOS.iter().map(|r| r.url))
            .chain(std::iter::once(LINKEDIN_URL));
        for url in urls {
            assert!(url.starts_with("https://"), "{url} should be https");
        }
    }
}
