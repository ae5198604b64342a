/// Media query matching the stacked (mobile) layout. Widths from 768px up
/// get the side-by-side layout.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

/// The scroll container whose viewport the section observers measure against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationRoot {
    /// The page itself scrolls.
    Document,
    /// The content panel scrolls; the page does not.
    Panel,
}

impl ViewportClass {
    /// From the result of evaluating [`MOBILE_MEDIA_QUERY`].
    pub fn from_matches(matches_mobile: bool) -> Self {
        if matches_mobile {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }

    pub fn observation_root(self) -> ObservationRoot {
        match self {
            ViewportClass::Mobile => ObservationRoot::Document,
            ViewportClass::Desktop => ObservationRoot::Panel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // What the browser evaluates for MOBILE_MEDIA_QUERY at a given width.
    fn classify(width: u32) -> ViewportClass {
        let max = MOBILE_MEDIA_QUERY
            .trim_start_matches("(max-width: ")
            .trim_end_matches("px)")
            .parse::<u32>()
            .unwrap();
        ViewportClass::from_matches(width <= max)
    }

    #[test]
    fn test_breakpoint() {
        assert_eq!(classify(320), ViewportClass::Mobile);
        assert_eq!(classify(767), ViewportClass::Mobile);
        assert_eq!(classify(768), ViewportClass::Desktop);
        assert_eq!(classify(1920), ViewportClass::Desktop);
    }

    #[test]
    fn test_root_follows_class() {
        assert_eq!(
            ViewportClass::from_matches(true).observation_root(),
            ObservationRoot::Document
        );
        assert_eq!(
            ViewportClass::from_matches(false).observation_root(),
            ObservationRoot::Panel
        );
        assert!(ViewportClass::Mobile.is_mobile());
        assert!(!ViewportClass::Desktop.is_mobile());
    }
}
