use crate::section::SectionId;

/// Finds section elements and scrolls them into view.
pub trait SectionLocator {
    type Element;

    fn locate(&self, id: SectionId) -> Option<Self::Element>;

    /// Smoothly brings `element` into view in whichever container scrolls.
    fn scroll_into_view(&self, element: &Self::Element);
}

/// Scrolls to `id`. Returns `false` and does nothing if the section is not mounted.
pub fn scroll_to<L: SectionLocator>(locator: &L, id: SectionId) -> bool {
    let Some(element) = locator.locate(id) else {
        log::debug!("no element for section {id}");
        return false;
    };
    locator.scroll_into_view(&element);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDocument {
        mounted: Vec<SectionId>,
        scrolled: RefCell<Vec<SectionId>>,
    }

    impl FakeDocument {
        fn with(mounted: &[SectionId]) -> Self {
            Self {
                mounted: mounted.to_vec(),
                scrolled: RefCell::default(),
            }
        }
    }

    impl SectionLocator for FakeDocument {
        type Element = SectionId;

        fn locate(&self, id: SectionId) -> Option<SectionId> {
            self.mounted.contains(&id).then_some(id)
        }

        fn scroll_into_view(&self, element: &SectionId) {
            self.scrolled.borrow_mut().push(*element);
        }
    }

    #[test]
    fn test_scrolls_to_mounted_section() {
        let doc = FakeDocument::with(&SectionId::ALL);
        assert!(scroll_to(&doc, SectionId::Repos));
        assert!(scroll_to(&doc, SectionId::Experience));
        assert_eq!(
            *doc.scrolled.borrow(),
            vec![SectionId::Repos, SectionId::Experience]
        );
    }

    #[test]
    fn test_absent_section_is_noop() {
        let doc = FakeDocument::with(&[SectionId::Experience]);
        assert!(!scroll_to(&doc, SectionId::Contact));
        assert!(doc.scrolled.borrow().is_empty());

        let empty = FakeDocument::with(&[]);
        for id in SectionId::ALL {
            assert!(!scroll_to(&empty, id));
        }
        assert!(empty.scrolled.borrow().is_empty());
    }
}
