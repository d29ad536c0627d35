//! Reveal-once scroll animations.
//!
//! Sections start hidden and are revealed the first time enough of them
//! enters the viewport. A revealed section is never hidden again and is no
//! longer observed.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle for an observed page section (its element id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// When a section counts as visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the section that must intersect the viewport (0.0 to 1.0).
    pub threshold: f64,
    /// CSS margin applied to the viewport. A negative bottom margin triggers
    /// slightly before the section is fully in view.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// A visibility change notification for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub section: SectionId,
    /// Fraction of the section currently intersecting the viewport.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn new(section: impl Into<SectionId>, ratio: f64) -> Self {
        Self {
            section: section.into(),
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Provider of visibility notifications (a browser intersection observer,
/// or a fake in tests).
pub trait VisibilitySource {
    /// Start watching `section`. Returns `false` when the facility is
    /// unavailable; the section then simply stays unrevealed.
    fn observe(&mut self, section: &SectionId, options: &RevealOptions) -> bool;

    /// Stop watching `section`.
    fn unobserve(&mut self, section: &SectionId);
}

/// A section and its reveal flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealableSection {
    id: SectionId,
    is_visible: bool,
}

impl RevealableSection {
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

/// Owns a [`VisibilitySource`] and the reveal flags of the sections it watches.
///
/// `is_visible` only ever goes from `false` to `true`. Each section is
/// unobserved as soon as it is revealed, and [`stop`](Self::stop) (also run
/// on drop) releases whatever is still being observed.
pub struct ScrollRevealController<S: VisibilitySource> {
    source: S,
    options: RevealOptions,
    sections: Vec<RevealableSection>,
    observing: HashSet<SectionId>,
}

impl<S: VisibilitySource> ScrollRevealController<S> {
    pub fn new(source: S, options: RevealOptions) -> Self {
        Self {
            source,
            options,
            sections: Vec::new(),
            observing: HashSet::new(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Register and observe `sections`. Returns how many are now being
    /// observed. Sections already registered are left alone.
    pub fn start<I, T>(&mut self, sections: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<SectionId>,
    {
        for id in sections {
            let id = id.into();
            if self.sections.iter().any(|s| s.id == id) {
                continue;
            }

            if self.source.observe(&id, &self.options) {
                self.observing.insert(id.clone());
            } else {
                tracing::debug!("Visibility source unavailable for section {}", id);
            }
            self.sections.push(RevealableSection {
                id,
                is_visible: false,
            });
        }
        self.observing.len()
    }

    /// Apply visibility notifications. Returns the sections revealed by this
    /// batch, in notification order.
    ///
    /// Notifications for unknown, unobserved or already revealed sections
    /// are ignored.
    pub fn on_intersection(&mut self, entries: &[Intersection]) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for entry in entries {
            if !self.observing.contains(&entry.section) || !entry.crosses(self.options.threshold) {
                continue;
            }

            if let Some(section) = self.sections.iter_mut().find(|s| s.id == entry.section) {
                section.is_visible = true;
            }
            self.observing.remove(&entry.section);
            self.source.unobserve(&entry.section);
            tracing::trace!("Revealed section {}", entry.section);
            revealed.push(entry.section.clone());
        }
        revealed
    }

    pub fn is_visible(&self, section: &SectionId) -> bool {
        self.sections
            .iter()
            .any(|s| &s.id == section && s.is_visible)
    }

    /// Whether `section` is still waiting to be revealed.
    pub fn is_observing(&self, section: &SectionId) -> bool {
        self.observing.contains(section)
    }

    pub fn sections(&self) -> &[RevealableSection] {
        &self.sections
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Stop observing every section that has not been revealed yet.
    pub fn stop(&mut self) {
        let mut pending: Vec<SectionId> = self.observing.drain().collect();
        pending.sort();
        for id in &pending {
            self.source.unobserve(id);
        }
        if !pending.is_empty() {
            tracing::debug!("Stopped observing {} sections", pending.len());
        }
    }
}

impl<S: VisibilitySource> Drop for ScrollRevealController<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Records which sections the page asks the browser to watch.
///
/// The browser's intersection observer is the real facility; the rendered
/// page marks every section observed here so its reveal script picks it up.
#[derive(Debug, Default)]
pub struct PageVisibility {
    enabled: bool,
    observed: Vec<SectionId>,
}

impl PageVisibility {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            observed: Vec::new(),
        }
    }

    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }
}

impl VisibilitySource for PageVisibility {
    fn observe(&mut self, section: &SectionId, _options: &RevealOptions) -> bool {
        if self.enabled {
            self.observed.push(section.clone());
        }
        self.enabled
    }

    fn unobserve(&mut self, section: &SectionId) {
        self.observed.retain(|s| s != section);
    }
}
