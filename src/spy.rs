//! Scroll-linked section tracking: which sections are revealed, which one is
//! highlighted in the navigation, and which scroll container is observed.
//!
//! Nothing here touches the DOM. The browser side implements [`ObserverHost`]
//! and feeds [`IntersectionSample`]s into the trackers.

mod navigate;
mod observer;
mod tracker;
mod viewport;

pub use navigate::{scroll_to, SectionLocator};
pub use observer::{
    ObserverHost, ObserverKind, ObserverSpec, ScrollSpy, ACTIVE_BAND_MARGIN, VISIBILITY_THRESHOLD,
};
pub use tracker::{ActiveSection, IntersectionSample, SectionVisibility};
pub use viewport::{ObservationRoot, ViewportClass, MOBILE_MEDIA_QUERY};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpyError {
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("observation root element is not mounted")]
    MissingRoot,
}

/// New `scrollTop` for the content panel after a wheel event, if the event
/// should be redirected to it.
///
/// On desktop the page itself never scrolls, so wheel input over the profile
/// column or the background is applied to the panel. Events inside the panel
/// already scroll it, and on mobile the page scrolls normally.
pub fn redirect_wheel(
    class: ViewportClass,
    target_in_panel: bool,
    scroll_top: i32,
    delta_y: f64,
) -> Option<i32> {
    if class.is_mobile() || target_in_panel || delta_y == 0.0 {
        return None;
    }
    let delta = delta_y.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32;
    Some(scroll_top.saturating_add(delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_outside_panel_scrolls_panel() {
        assert_eq!(
            redirect_wheel(ViewportClass::Desktop, false, 120, 100.0),
            Some(220)
        );
        assert_eq!(
            redirect_wheel(ViewportClass::Desktop, false, 120, -33.4),
            Some(87)
        );
    }

    #[test]
    fn test_wheel_left_alone() {
        assert_eq!(redirect_wheel(ViewportClass::Desktop, true, 0, 100.0), None);
        assert_eq!(redirect_wheel(ViewportClass::Mobile, false, 0, 100.0), None);
        assert_eq!(redirect_wheel(ViewportClass::Desktop, false, 50, 0.0), None);
    }

    #[test]
    fn test_wheel_delta_saturates() {
        assert_eq!(
            redirect_wheel(ViewportClass::Desktop, false, i32::MAX - 1, 1e12),
            Some(i32::MAX)
        );
    }
}
