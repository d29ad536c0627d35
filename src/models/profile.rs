use serde::{Deserialize, Serialize};

/// Who the portfolio is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// Role titles cycled by the hero typewriter, in display order.
    pub roles: Vec<String>,
    /// Paragraph under the hero role line.
    pub tagline: String,
    /// About-section paragraphs.
    pub bio: Vec<String>,
    pub education: String,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub values: Vec<Value>,
    /// Closing paragraph of the skills section.
    #[serde(default)]
    pub learning: String,
}

/// A headline number in the about section, e.g. `4+ Years Experience`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

/// A working principle card in the about section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Value {
    pub title: String,
    pub description: String,
}
