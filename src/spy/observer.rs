use super::{ObservationRoot, SpyError, ViewportClass};

/// Fraction of a section that must be on screen for it to be revealed.
pub const VISIBILITY_THRESHOLD: f64 = 0.15;
/// Root margin that shrinks the observed area to the central band.
pub const ACTIVE_BAND_MARGIN: &str = "-40% 0px -50% 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    /// Drives the fade-in reveal.
    Visibility,
    /// Drives the navigation highlight.
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSpec {
    pub kind: ObserverKind,
    pub root: ObservationRoot,
    pub root_margin: &'static str,
    pub threshold: f64,
}

impl ObserverKind {
    pub const ALL: [ObserverKind; 2] = [ObserverKind::Visibility, ObserverKind::Active];

    pub fn spec(self, root: ObservationRoot) -> ObserverSpec {
        match self {
            ObserverKind::Visibility => ObserverSpec {
                kind: self,
                root,
                root_margin: "0px",
                threshold: VISIBILITY_THRESHOLD,
            },
            ObserverKind::Active => ObserverSpec {
                kind: self,
                root,
                root_margin: ACTIVE_BAND_MARGIN,
                threshold: 0.0,
            },
        }
    }
}

/// Something that can watch the section elements for intersections.
pub trait ObserverHost {
    type Handle;

    /// Starts observing every section element with the given options.
    fn observe(&mut self, spec: ObserverSpec) -> Result<Self::Handle, SpyError>;

    fn disconnect(&mut self, handle: Self::Handle);
}

/// Owns the visibility and active-section observers for one page.
///
/// The pair is rebuilt whenever the viewport class changes, and released
/// on [`ScrollSpy::detach`] or drop.
pub struct ScrollSpy<H: ObserverHost> {
    host: H,
    attached: Option<ViewportClass>,
    live: Vec<H::Handle>,
}

impl<H: ObserverHost> ScrollSpy<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            attached: None,
            live: Vec::with_capacity(ObserverKind::ALL.len()),
        }
    }

    #[cfg(test)]
    pub fn attached(&self) -> Option<ViewportClass> {
        self.attached
    }

    /// Observes the sections for `class`. Returns `false` if already attached for it.
    pub fn attach(&mut self, class: ViewportClass) -> bool {
        if self.attached == Some(class) {
            return false;
        }
        self.detach();
        let root = class.observation_root();
        for kind in ObserverKind::ALL {
            match self.host.observe(kind.spec(root)) {
                Ok(handle) => self.live.push(handle),
                Err(e) => log::warn!("{kind:?} observer unavailable: {e}"),
            }
        }
        self.attached = Some(class);
        true
    }

    pub fn detach(&mut self) {
        for handle in self.live.drain(..) {
            self.host.disconnect(handle);
        }
        self.attached = None;
    }
}

impl<H: ObserverHost> Drop for ScrollSpy<H> {
    fn drop(&mut self) {
        self.detach();
    }
}
