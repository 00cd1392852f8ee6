//! Subject filtering for out-of-office and PTO events
//!
//! Events whose subject contains an exclusion marker (case-insensitive
//! substring match) are dropped from aggregation and reported as filtered.

/// Subject filter that determines which events to aggregate
#[derive(Debug, Clone)]
pub struct SubjectFilter {
    /// Lowercase substrings that mark an event as non-work time
    markers: Vec<String>,
}

impl SubjectFilter {
    /// Create the standard filter excluding OoO and PTO events
    pub fn standard() -> Self {
        Self::with_markers(&["ooo", "pto"])
    }

    /// Create a filter from explicit markers (stored lowercased)
    pub fn with_markers(markers: &[&str]) -> Self {
        Self {
            markers: markers.iter().map(|m| m.to_lowercase()).collect(),
        }
    }

    /// Check if an event subject should be excluded from aggregation
    pub fn is_excluded(&self, subject: &str) -> bool {
        let lowered = subject.to_lowercase();
        self.markers.iter().any(|m| lowered.contains(m))
    }
}

impl Default for SubjectFilter {
    fn default() -> Self {
        Self::standard()
    }
}
