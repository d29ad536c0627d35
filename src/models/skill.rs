use serde::{Deserialize, Serialize};

/// A tab of the skills section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    /// Tab key used in URLs, e.g. `frontend`.
    pub key: String,
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

/// A single skill with a self-assessed proficiency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, clamped to 0..=100 when rendered.
    pub level: u8,
    pub icon: String,
}

impl Skill {
    pub fn level_percent(&self) -> u8 {
        self.level.min(100)
    }
}
