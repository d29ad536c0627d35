use serde::{Deserialize, Serialize};

/// One card on the experience timeline.
///
/// The same shape serves work history, education and certifications: a
/// heading (`title`), who it was with (`organization`), when (`duration`), a
/// list of bullet points and the technologies involved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub duration: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// The experience section, grouped by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeline {
    pub work: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
    pub certifications: Vec<TimelineEntry>,
}
