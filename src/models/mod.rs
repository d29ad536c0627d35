//! Portfolio content types.
//!
//! Everything here is static content: loaded once at startup (built in or
//! from a JSON file) and only read afterwards.
//!
//! - [`Profile`]: name, hero role titles, bio, stats and values.
//! - [`SkillCategory`]: one tab of the skills section.
//! - [`Project`]: a showcased project, filterable by category.
//! - [`Timeline`]: work history, education and certifications.
//! - [`ContactInfo`], [`SocialLink`], [`FooterColumn`]: ways to get in touch.
//! - [`ContactMessage`]: the (simulated) contact form submission.

mod contact;
mod profile;
mod project;
mod skill;
mod timeline;

pub use contact::*;
pub use profile::*;
pub use project::*;
pub use skill::*;
pub use timeline::*;

use serde::{Deserialize, Serialize};

/// The complete content of the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub project_categories: Vec<CategoryTab>,
    pub projects: Vec<Project>,
    pub timeline: Timeline,
    pub contact: Vec<ContactInfo>,
    pub social: Vec<SocialLink>,
    pub footer: Vec<FooterColumn>,
}

impl Portfolio {
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn skill_category(&self, key: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|c| c.key == key)
    }
}
