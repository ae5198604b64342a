use crate::section::SectionId;

/// One intersection notification for a section element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub section: SectionId,
    pub is_intersecting: bool,
    /// Height in pixels of the part of the section inside the observed area.
    pub coverage: f64,
}

#[cfg(test)]
impl IntersectionSample {
    pub fn entering(section: SectionId, coverage: f64) -> Self {
        Self {
            section,
            is_intersecting: true,
            coverage,
        }
    }

    pub fn leaving(section: SectionId) -> Self {
        Self {
            section,
            is_intersecting: false,
            coverage: 0.0,
        }
    }
}

/// Per-section "revealed" flags. Flags are independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionVisibility([bool; 5]);

impl SectionVisibility {
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.0[id.index()]
    }

    pub fn set(&mut self, id: SectionId, visible: bool) {
        self.0[id.index()] = visible;
    }

    /// Records each sample's intersection state. Returns whether any flag changed.
    pub fn apply(&mut self, samples: &[IntersectionSample]) -> bool {
        let before = *self;
        for sample in samples {
            self.set(sample.section, sample.is_intersecting);
        }
        *self != before
    }

    #[cfg(test)]
    pub fn visible_sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        SectionId::ALL
            .into_iter()
            .filter(move |id| self.is_visible(*id))
    }
}

/// The single section highlighted in the navigation.
///
/// Tracks which sections are inside the central band in the order they
/// entered it. The most recent entrant still inside is active; when the band
/// empties the last active section stays active.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSection {
    current: SectionId,
    in_band: Vec<SectionId>,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new(SectionId::Experience)
    }
}

impl ActiveSection {
    pub fn new(initial: SectionId) -> Self {
        Self {
            current: initial,
            in_band: Vec::with_capacity(SectionId::ALL.len()),
        }
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    #[cfg(test)]
    pub fn is_active(&self, id: SectionId) -> bool {
        self.current == id
    }

    #[cfg(test)]
    pub fn in_band(&self) -> &[SectionId] {
        &self.in_band
    }

    /// Applies one batch of notifications. Returns whether the active section changed.
    ///
    /// Only the last sample per section counts. Arrivals in the same batch
    /// enter in order of increasing coverage, so the best-covered one wins;
    /// equal coverage keeps delivery order.
    pub fn apply(&mut self, samples: &[IntersectionSample]) -> bool {
        let before = self.current;

        let mut latest: Vec<IntersectionSample> = Vec::with_capacity(samples.len());
        for sample in samples {
            latest.retain(|s| s.section != sample.section);
            latest.push(*sample);
        }

        let (mut arrivals, departures): (Vec<_>, Vec<_>) =
            latest.into_iter().partition(|s| s.is_intersecting);
        for sample in departures {
            self.in_band.retain(|id| *id != sample.section);
        }
        arrivals.sort_by(|a, b| a.coverage.total_cmp(&b.coverage));
        for sample in arrivals {
            self.in_band.retain(|id| *id != sample.section);
            self.in_band.push(sample.section);
        }

        if let Some(last) = self.in_band.last() {
            self.current = *last;
        }
        self.current != before
    }
}
