use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    section::SectionId,
    spy::{scroll_to, SectionLocator},
};

/// Looks sections up by DOM id in the current document.
struct DocumentLocator;

impl SectionLocator for DocumentLocator {
    type Element = Element;

    fn locate(&self, id: SectionId) -> Option<Element> {
        document().get_element_by_id(id.as_str())
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smoothly scrolls `id` into view. Does nothing if the section is not in the document.
pub fn scroll_to_section(id: SectionId) {
    scroll_to(&DocumentLocator, id);
}

#[cfg(feature = "hydrate")]
pub use observe::watch_sections;

#[cfg(feature = "hydrate")]
mod observe {
    use std::rc::Rc;

    use js_sys::Array;
    use leptos::{html, prelude::*};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::section::SectionId;
    use crate::spy::{
        ActiveSection, IntersectionSample, ObservationRoot, ObserverHost, ObserverKind,
        ObserverSpec, ScrollSpy, SectionVisibility, SpyError, ViewportClass,
    };

    type SampleSink = Rc<dyn Fn(ObserverKind, Vec<IntersectionSample>)>;

    /// Browser [`ObserverHost`] backed by `IntersectionObserver`.
    pub struct DomObserverHost {
        panel: Element,
        sink: SampleSink,
    }

    pub struct DomObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    }

    impl DomObserverHost {
        pub fn new(panel: Element, sink: SampleSink) -> Self {
            Self { panel, sink }
        }
    }

    fn sample(entry: &IntersectionObserverEntry) -> Option<IntersectionSample> {
        let section = entry.target().id().parse::<SectionId>().ok()?;
        Some(IntersectionSample {
            section,
            is_intersecting: entry.is_intersecting(),
            coverage: entry.intersection_rect().height(),
        })
    }

    impl ObserverHost for DomObserverHost {
        type Handle = DomObserver;

        fn observe(&mut self, spec: ObserverSpec) -> Result<DomObserver, SpyError> {
            let init = IntersectionObserverInit::new();
            match spec.root {
                ObservationRoot::Document => init.set_root(None),
                ObservationRoot::Panel => {
                    if !self.panel.is_connected() {
                        return Err(SpyError::MissingRoot);
                    }
                    init.set_root(Some(&self.panel));
                }
            }
            init.set_root_margin(spec.root_margin);
            init.set_threshold(&JsValue::from_f64(spec.threshold));

            let sink = self.sink.clone();
            let kind = spec.kind;
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _: IntersectionObserver| {
                    let samples = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .filter_map(|entry| sample(&entry))
                        .collect::<Vec<_>>();
                    if !samples.is_empty() {
                        sink(kind, samples);
                    }
                },
            );
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                    .map_err(|e| SpyError::ObserverUnavailable(format!("{e:?}")))?;

            let document = document();
            for id in SectionId::ALL {
                match document.get_element_by_id(id.as_str()) {
                    Some(el) => observer.observe(&el),
                    None => log::debug!("section {id} is not mounted"),
                }
            }
            Ok(DomObserver {
                observer,
                _callback: callback,
            })
        }

        fn disconnect(&mut self, handle: DomObserver) {
            handle.observer.disconnect();
        }
    }

    /// Keeps `visibility` and `active` in sync with scrolling for as long as
    /// the calling component is mounted, re-rooting the observers whenever
    /// the viewport class changes.
    pub fn watch_sections(
        viewport: Signal<ViewportClass>,
        panel_ref: NodeRef<html::Div>,
        visibility: RwSignal<SectionVisibility>,
        active: RwSignal<ActiveSection>,
    ) {
        let spy = StoredValue::new_local(None::<ScrollSpy<DomObserverHost>>);

        Effect::new(move |_| {
            let class = viewport.get();
            let Some(panel) = panel_ref.get() else {
                return;
            };
            spy.update_value(|spy| {
                let spy = spy.get_or_insert_with(|| {
                    let sink: SampleSink = Rc::new(
                        move |kind: ObserverKind, samples: Vec<IntersectionSample>| match kind {
                            ObserverKind::Visibility => {
                                visibility.maybe_update(|v| v.apply(&samples));
                            }
                            ObserverKind::Active => {
                                active.maybe_update(|a| a.apply(&samples));
                            }
                        },
                    );
                    ScrollSpy::new(DomObserverHost::new(panel.into(), sink))
                });
                if spy.attach(class) {
                    log::debug!("observing sections for {class:?} layout");
                }
            });
        });

        on_cleanup(move || {
            spy.update_value(|spy| {
                if let Some(mut spy) = spy.take() {
                    spy.detach();
                }
            });
        });
    }
}
