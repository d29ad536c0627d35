//! HTML views.
//!
//! Every view is a pure function of [`PageState`]: the same state always
//! renders the same markup. Interactive bits (tabs, the project detail
//! modal, the contact banner) are selected by state, not by client code.

mod script;
mod sections;

use std::collections::HashSet;

use chrono::{Datelike, Utc};

use crate::config::SiteConfig;
use crate::effects::{
    Frame, PageVisibility, Phase, ProjectFilter, RevealOptions, ScrollRevealController, SectionId,
    Typewriter, VisibilitySource,
};
use crate::models::{ContactMessage, Portfolio};

pub use sections::{
    render_about, render_contact, render_experience, render_footer, render_hero, render_nav,
    render_project_detail, render_projects, render_skills,
};

/// Page sections in document order. Each is observed for scroll reveal.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "projects", "experience", "contact"];

/// Skills tab shown when none is selected.
pub const DEFAULT_SKILLS_TAB: &str = "frontend";

/// Reveal flags of the page sections, as seen by the views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealFlags {
    observed: HashSet<SectionId>,
    visible: HashSet<SectionId>,
}

impl RevealFlags {
    pub fn from_controller<S: VisibilitySource>(controller: &ScrollRevealController<S>) -> Self {
        let mut flags = Self::default();
        for section in controller.sections() {
            if section.is_visible() {
                flags.visible.insert(section.id().clone());
                flags.observed.insert(section.id().clone());
            } else if controller.is_observing(section.id()) {
                flags.observed.insert(section.id().clone());
            }
        }
        flags
    }

    /// Extra classes for a section: observed sections animate in, revealed
    /// ones carry `is-visible`, unobserved ones are plain.
    pub fn classes(&self, id: &str) -> &'static str {
        let id = SectionId::new(id);
        if self.visible.contains(&id) {
            " animate-on-scroll is-visible"
        } else if self.observed.contains(&id) {
            " animate-on-scroll"
        } else {
            ""
        }
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(&SectionId::new(id))
    }
}

/// The contact form as the view sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Values to pre-fill (kept when a submission was rejected).
    pub values: ContactMessage,
    pub banner: ContactBanner,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactBanner {
    #[default]
    Hidden,
    Sent,
    Missing(Vec<String>),
}

/// Client script settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub reveal: RevealOptions,
    /// SSE endpoint streaming typewriter frames; `None` for static exports.
    pub roles_stream: Option<String>,
    pub banner_ms: u64,
}

/// Everything a page render depends on.
#[derive(Debug, Clone)]
pub struct PageState<'a> {
    pub portfolio: &'a Portfolio,
    pub filter: ProjectFilter,
    pub skills_tab: String,
    /// Project shown in the detail modal.
    pub selected_project: Option<u32>,
    pub hero: Frame,
    pub reveal: RevealFlags,
    pub contact: ContactForm,
    pub options: PageOptions,
    /// Year shown in the footer copyright line.
    pub year: i32,
}

impl<'a> PageState<'a> {
    /// Initial state: all projects, default skills tab, the typewriter at its
    /// starting frame, and every section observed for reveal (unless reveal
    /// is disabled in `config`).
    pub fn new(portfolio: &'a Portfolio, config: &SiteConfig) -> Self {
        let mut reveal = ScrollRevealController::new(
            PageVisibility::new(config.reveal.enabled),
            config.reveal.options(),
        );
        reveal.start(SECTION_IDS);

        let hero = Typewriter::new(&portfolio.profile.roles, config.typewriter)
            .map(|tw| tw.frame())
            .unwrap_or(Frame {
                text: String::new(),
                index: 0,
                phase: Phase::Typing,
            });

        Self {
            portfolio,
            filter: ProjectFilter::default(),
            skills_tab: DEFAULT_SKILLS_TAB.to_string(),
            selected_project: None,
            hero,
            reveal: RevealFlags::from_controller(&reveal),
            contact: ContactForm::default(),
            options: PageOptions {
                reveal: reveal.options().clone(),
                roles_stream: None,
                banner_ms: config.contact.banner_ms,
            },
            year: Utc::now().year(),
        }
    }

    pub fn with_filter(mut self, filter: ProjectFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_skills_tab(mut self, tab: impl Into<String>) -> Self {
        self.skills_tab = tab.into();
        self
    }

    pub fn with_selected_project(mut self, id: Option<u32>) -> Self {
        self.selected_project = id;
        self
    }

    pub fn with_contact(mut self, contact: ContactForm) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_roles_stream(mut self, url: impl Into<String>) -> Self {
        self.options.roles_stream = Some(url.into());
        self
    }

    /// Show the first role in full, for pages with no live typewriter.
    pub fn with_static_hero(mut self) -> Self {
        if let Some(first) = self.portfolio.profile.roles.first() {
            self.hero = Frame {
                text: first.clone(),
                index: 0,
                phase: Phase::PausedFull,
            };
        }
        self
    }
}

/// Render the complete HTML document.
pub fn render_page(state: &PageState) -> String {
    let name = escape(&state.portfolio.profile.name);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{} | Portfolio</title>\n", name));
    out.push_str("<script src=\"https://cdn.tailwindcss.com\"></script>\n");
    out.push_str(script::STYLE);
    out.push_str("</head>\n");
    out.push_str("<body class=\"App min-h-screen bg-white dark:bg-gray-900 transition-colors duration-300\">\n");
    out.push_str(&render_nav(state));
    out.push_str("<main class=\"relative\">\n");
    out.push_str(&render_hero(state));
    out.push_str(&render_about(state));
    out.push_str(&render_skills(state));
    out.push_str(&render_projects(state));
    out.push_str(&render_experience(state));
    out.push_str(&render_contact(state));
    out.push_str("</main>\n");
    out.push_str(&render_footer(state));
    if let Some(id) = state.selected_project {
        if let Some(project) = state.portfolio.project(id) {
            out.push_str(&render_project_detail(project, &state.filter, &state.skills_tab));
        }
    }
    out.push_str(&script::render_script(&state.options));
    out.push_str("</body>\n</html>\n");
    out
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn new_state_observes_every_section() {
        let portfolio = builtin();
        let state = PageState::new(&portfolio, &SiteConfig::default());
        for id in SECTION_IDS {
            assert!(state.reveal.is_observed(id));
            assert_eq!(state.reveal.classes(id), " animate-on-scroll");
        }
    }

    #[test]
    fn disabled_reveal_renders_plain_sections() {
        let portfolio = builtin();
        let mut config = SiteConfig::default();
        config.reveal.enabled = false;
        let state = PageState::new(&portfolio, &config);
        assert_eq!(state.reveal.classes("about"), "");
        assert!(!render_page(&state).contains("animate-on-scroll\""));
    }

    #[test]
    fn hero_starts_empty_and_static_hero_shows_first_role() {
        let portfolio = builtin();
        let state = PageState::new(&portfolio, &SiteConfig::default());
        assert_eq!(state.hero.text, "");
        let state = state.with_static_hero();
        assert_eq!(state.hero.text, "Full-Stack Developer");
    }

    #[test]
    fn rendering_is_pure() {
        let portfolio = builtin();
        let state = PageState::new(&portfolio, &SiteConfig::default());
        assert_eq!(render_page(&state), render_page(&state));
    }

    #[test]
    fn selected_project_renders_detail_modal() {
        let portfolio = builtin();
        let state = PageState::new(&portfolio, &SiteConfig::default()).with_selected_project(Some(4));
        let html = render_page(&state);
        assert!(html.contains("id=\"project-modal\""));
        assert!(html.contains("Camunda Modeler"));
    }

    #[test]
    fn unknown_selected_project_renders_no_modal() {
        let portfolio = builtin();
        let state =
            PageState::new(&portfolio, &SiteConfig::default()).with_selected_project(Some(99));
        assert!(!render_page(&state).contains("id=\"project-modal\""));
    }
}
