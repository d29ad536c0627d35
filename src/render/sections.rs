//! One view function per page section.

use super::{escape, ContactBanner, PageState, DEFAULT_SKILLS_TAB};
use crate::effects::ProjectFilter;
use crate::models::{Project, TimelineEntry};

const TAB_ACTIVE: &str = "bg-gradient-to-r from-primary-500 to-purple-600 text-white shadow-lg";
const TAB_IDLE: &str = "glass text-gray-700 dark:text-gray-300 hover:bg-white/20 dark:hover:bg-black/30";

/// Opening tag of a page section, wired up for scroll reveal when observed.
fn section_open(state: &PageState, id: &str, classes: &str) -> String {
    let reveal_attr = if state.reveal.is_observed(id) {
        " data-reveal"
    } else {
        ""
    };
    format!(
        "<section id=\"{}\" class=\"{}{}\"{}>\n",
        id,
        classes,
        state.reveal.classes(id),
        reveal_attr
    )
}

fn section_header(title: &str, subtitle: &str) -> String {
    format!(
        "<div class=\"text-center mb-16\">\n<h2 class=\"text-4xl sm:text-5xl font-bold mb-4\"><span class=\"gradient-text\">{}</span></h2>\n<p class=\"text-lg text-gray-600 dark:text-gray-300\">{}</p>\n</div>\n",
        escape(title),
        escape(subtitle)
    )
}

/// Query string that keeps both tab selections. Values are percent-encoded,
/// so the result is also safe inside an attribute.
fn page_link(filter: &str, skills: &str, extra: &str, anchor: &str) -> String {
    let mut link = format!(
        "?category={}&amp;skills={}",
        urlencoding::encode(filter),
        urlencoding::encode(skills)
    );
    link.push_str(extra);
    link.push('#');
    link.push_str(anchor);
    link
}

fn external_attrs(external: bool) -> &'static str {
    if external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    }
}

fn tags(items: &[String], class: &str) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("<span class=\"{}\">{}</span>", class, escape(item)));
    }
    out
}

pub fn render_nav(state: &PageState) -> String {
    let mut out = String::new();
    out.push_str("<nav class=\"fixed top-0 w-full z-50 glass\">\n<div class=\"max-w-7xl mx-auto px-4 flex justify-between items-center h-16\">\n");
    out.push_str(&format!(
        "<a href=\"#home\" class=\"text-xl font-bold gradient-text\">{}</a>\n<ul class=\"hidden md:flex space-x-8\">\n",
        escape(&state.portfolio.profile.name)
    ));
    for id in super::SECTION_IDS {
        let label = capitalize(id);
        out.push_str(&format!("<li><a href=\"#{}\">{}</a></li>\n", id, label));
    }
    out.push_str("</ul>\n</div>\n</nav>\n");
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_hero(state: &PageState) -> String {
    let profile = &state.portfolio.profile;
    let mut out = section_open(
        state,
        "home",
        "min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-gray-50 via-white to-blue-50 dark:from-gray-900 dark:via-gray-800 dark:to-blue-900",
    );
    out.push_str("<div class=\"absolute inset-0 overflow-hidden\" aria-hidden=\"true\">\n");
    out.push_str("<div class=\"blob blob-a absolute top-1/4 left-1/4 w-64 h-64 rounded-full blur-3xl\"></div>\n");
    out.push_str("<div class=\"blob blob-b absolute top-3/4 right-1/4 w-80 h-80 rounded-full blur-3xl\"></div>\n");
    out.push_str("</div>\n");
    out.push_str("<div class=\"relative z-10 text-center px-4 max-w-5xl mx-auto\">\n");
    out.push_str("<p class=\"text-lg sm:text-xl text-gray-600 dark:text-gray-300 mb-4\">Hello, I'm</p>\n");
    out.push_str(&format!(
        "<h1 class=\"text-5xl sm:text-7xl lg:text-8xl font-bold mb-6\"><span class=\"gradient-text\">{}</span></h1>\n",
        escape(&profile.name)
    ));
    out.push_str(&format!(
        "<div class=\"text-2xl sm:text-4xl font-semibold mb-4\">I'm a <span class=\"gradient-text\"><span id=\"typewriter\" data-role-index=\"{}\">{}</span><span class=\"cursor text-primary-500\">|</span></span></div>\n",
        state.hero.index,
        escape(&state.hero.text)
    ));
    out.push_str(&format!(
        "<p class=\"text-lg sm:text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto leading-relaxed\">{}</p>\n",
        escape(&profile.tagline)
    ));
    out.push_str("<div class=\"flex flex-col sm:flex-row gap-4 justify-center items-center mt-8 mb-16\">\n");
    out.push_str("<a href=\"#about\" class=\"px-8 py-4 rounded-full font-medium text-lg text-white bg-gradient-to-r from-primary-500 to-purple-600\">View My Work</a>\n");
    if let Some(cv) = &profile.cv_url {
        out.push_str(&format!(
            "<a href=\"{}\"{} class=\"px-8 py-4 glass rounded-full font-medium text-lg\">Download CV</a>\n",
            escape(cv),
            external_attrs(true)
        ));
    }
    out.push_str("</div>\n");
    out.push_str("<a href=\"#about\" class=\"scroll-indicator absolute bottom-8 left-1/2 text-sm text-gray-500\">Scroll to explore</a>\n");
    out.push_str("</div>\n</section>\n");
    out
}

pub fn render_about(state: &PageState) -> String {
    let profile = &state.portfolio.profile;
    let mut out = section_open(state, "about", "py-20 bg-white dark:bg-gray-900");
    out.push_str("<div class=\"max-w-7xl mx-auto px-4\">\n");
    out.push_str(&section_header(
        "About Me",
        "Passionate developer with a love for creating exceptional digital experiences",
    ));
    out.push_str("<div class=\"grid lg:grid-cols-2 gap-12 items-center\">\n<div>\n");
    out.push_str("<h3 class=\"text-2xl font-bold mb-4\">Get to know me</h3>\n");
    for paragraph in &profile.bio {
        out.push_str(&format!(
            "<p class=\"text-gray-600 dark:text-gray-300 mb-4 leading-relaxed\">{}</p>\n",
            escape(paragraph)
        ));
    }
    out.push_str("<h3 class=\"text-2xl font-bold mb-4\">Education &amp; Growth</h3>\n");
    out.push_str(&format!(
        "<p class=\"text-gray-600 dark:text-gray-300 mb-6 leading-relaxed\">{}</p>\n",
        escape(&profile.education)
    ));
    if let Some(cv) = &profile.cv_url {
        out.push_str(&format!(
            "<a href=\"{}\"{} class=\"inline-flex px-6 py-3 rounded-full text-white bg-gradient-to-r from-primary-500 to-purple-600\">Download CV</a>\n",
            escape(cv),
            external_attrs(true)
        ));
    }
    out.push_str("</div>\n<div class=\"grid grid-cols-2 gap-6\">\n");
    for stat in &profile.stats {
        out.push_str(&format!(
            "<div class=\"glass p-6 rounded-2xl text-center\"><div class=\"text-3xl font-bold gradient-text\">{}</div><div class=\"text-gray-600 dark:text-gray-300\">{}</div></div>\n",
            escape(&stat.number),
            escape(&stat.label)
        ));
    }
    out.push_str("</div>\n</div>\n<div class=\"grid md:grid-cols-2 lg:grid-cols-4 gap-6 mt-16\">\n");
    for value in &profile.values {
        out.push_str(&format!(
            "<div class=\"glass p-6 rounded-2xl\"><h4 class=\"text-xl font-semibold mb-2\">{}</h4><p class=\"text-gray-600 dark:text-gray-300\">{}</p></div>\n",
            escape(&value.title),
            escape(&value.description)
        ));
    }
    out.push_str("</div>\n</div>\n</section>\n");
    out
}

pub fn render_skills(state: &PageState) -> String {
    let portfolio = state.portfolio;
    let active = portfolio
        .skill_category(&state.skills_tab)
        .or_else(|| portfolio.skill_category(DEFAULT_SKILLS_TAB))
        .or_else(|| portfolio.skills.first());

    let mut out = section_open(state, "skills", "py-20 bg-gray-50 dark:bg-gray-800");
    out.push_str("<div class=\"max-w-7xl mx-auto px-4\">\n");
    out.push_str(&section_header(
        "Skills & Expertise",
        "A comprehensive toolkit of modern technologies and frameworks",
    ));

    out.push_str("<div class=\"flex flex-wrap justify-center gap-4 mb-12\" role=\"tablist\">\n");
    for category in &portfolio.skills {
        let is_active = active.is_some_and(|a| a.key == category.key);
        out.push_str(&format!(
            "<a role=\"tab\" aria-selected=\"{}\" href=\"{}\" class=\"px-6 py-3 rounded-full font-medium {}\">{} {}</a>\n",
            is_active,
            page_link(state.filter.selected(), &category.key, "", "skills"),
            if is_active { TAB_ACTIVE } else { TAB_IDLE },
            escape(&category.icon),
            escape(&category.title)
        ));
    }
    out.push_str("</div>\n");

    if let Some(category) = active {
        out.push_str(&format!(
            "<div class=\"grid md:grid-cols-2 lg:grid-cols-3 gap-6\" data-skills=\"{}\">\n",
            escape(&category.key)
        ));
        for skill in &category.skills {
            let level = skill.level_percent();
            out.push_str(&format!(
                "<div class=\"glass p-6 rounded-2xl\">\n<div class=\"flex justify-between mb-4\"><span>{} {}</span><span class=\"font-bold\">{}%</span></div>\n<div class=\"h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden\"><div class=\"progress h-full rounded-full bg-gradient-to-r from-primary-500 to-purple-600\" style=\"width: {}%\"></div></div>\n</div>\n",
                escape(&skill.icon),
                escape(&skill.name),
                level,
                level
            ));
        }
        out.push_str("</div>\n");
    }

    if !portfolio.profile.learning.is_empty() {
        out.push_str(&format!(
            "<div class=\"glass p-8 rounded-2xl mt-16 text-center\"><h3 class=\"text-2xl font-bold mb-4\">Always Learning</h3><p class=\"text-gray-600 dark:text-gray-300\">{}</p></div>\n",
            escape(&portfolio.profile.learning)
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

pub fn render_projects(state: &PageState) -> String {
    let portfolio = state.portfolio;
    let mut out = section_open(state, "projects", "py-20 bg-white dark:bg-gray-900");
    out.push_str("<div class=\"max-w-7xl mx-auto px-4\">\n");
    out.push_str(&section_header(
        "Featured Projects",
        "A showcase of my recent work and creative solutions",
    ));

    out.push_str("<div class=\"flex flex-wrap justify-center gap-4 mb-12\" role=\"tablist\">\n");
    for tab in &portfolio.project_categories {
        let is_active = state.filter.is_selected(tab);
        out.push_str(&format!(
            "<a role=\"tab\" aria-selected=\"{}\" href=\"{}\" class=\"px-6 py-3 rounded-full font-medium {}\">{}</a>\n",
            is_active,
            page_link(&tab.id, &state.skills_tab, "", "projects"),
            if is_active { TAB_ACTIVE } else { TAB_IDLE },
            escape(&tab.label)
        ));
    }
    out.push_str("</div>\n");

    let visible = state.filter.apply(&portfolio.projects);
    out.push_str(&format!(
        "<div class=\"grid md:grid-cols-2 lg:grid-cols-3 gap-8\" data-category=\"{}\">\n",
        escape(state.filter.selected())
    ));
    for project in &visible {
        out.push_str(&render_project_card(project, state));
    }
    out.push_str("</div>\n");
    if visible.is_empty() {
        out.push_str("<p class=\"text-center text-gray-500\">No projects in this category yet.</p>\n");
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn render_project_card(project: &Project, state: &PageState) -> String {
    let (shown, hidden) = project.tech_preview();
    let mut out = format!(
        "<a href=\"{}\" class=\"project-card glass rounded-2xl overflow-hidden block\" data-project-id=\"{}\">\n",
        page_link(
            state.filter.selected(),
            &state.skills_tab,
            &format!("&amp;project={}", project.id),
            "projects"
        ),
        project.id
    );
    if let Some(image) = &project.image {
        out.push_str(&format!(
            "<div class=\"relative h-48 overflow-hidden\"><img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\" loading=\"lazy\">",
            escape(image),
            escape(&project.title)
        ));
        if project.featured {
            out.push_str("<span class=\"absolute top-4 left-4 px-3 py-1 rounded-full text-xs text-white bg-gradient-to-r from-yellow-400 to-orange-500\">Featured</span>");
        }
        out.push_str("</div>\n");
    } else if project.featured {
        out.push_str("<span class=\"px-3 py-1 rounded-full text-xs\">Featured</span>\n");
    }
    out.push_str(&format!(
        "<div class=\"p-6\">\n<div class=\"flex justify-between items-start mb-2\"><h3 class=\"text-xl font-bold\">{}</h3><span class=\"text-sm text-gray-500\">{}</span></div>\n<p class=\"text-gray-600 dark:text-gray-300 mb-4\">{}</p>\n<div class=\"flex flex-wrap gap-2\">{}",
        escape(&project.title),
        escape(&project.date),
        escape(&project.description),
        tags(shown, "px-3 py-1 text-xs rounded-full bg-primary-100 text-primary-700")
    ));
    if hidden > 0 {
        out.push_str(&format!(
            "<span class=\"px-3 py-1 text-xs rounded-full bg-gray-100 text-gray-600\">+{}</span>",
            hidden
        ));
    }
    out.push_str("</div>\n</div>\n</a>\n");
    out
}

/// Detail modal for one project. Closing returns to the grid with the same
/// tab selections.
pub fn render_project_detail(project: &Project, filter: &ProjectFilter, skills_tab: &str) -> String {
    let close = page_link(filter.selected(), skills_tab, "", "projects");
    let mut out = format!(
        "<div id=\"project-modal\" class=\"fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4\" role=\"dialog\" aria-modal=\"true\">\n<div class=\"bg-white dark:bg-gray-800 rounded-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto\">\n<div class=\"flex justify-between items-center p-6 border-b\"><h2 class=\"text-2xl font-bold\">{}</h2><a href=\"{}\" aria-label=\"Close\">&times;</a></div>\n",
        escape(&project.title),
        close
    );
    if let Some(image) = &project.image {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"w-full h-64 object-cover\">\n",
            escape(image),
            escape(&project.title)
        ));
    }
    out.push_str(&format!(
        "<div class=\"p-6 grid md:grid-cols-3 gap-8\">\n<div class=\"md:col-span-2\"><h3 class=\"text-xl font-semibold mb-4\">About This Project</h3><p class=\"text-gray-600 dark:text-gray-300 leading-relaxed\">{}</p></div>\n<div>\n<h3 class=\"text-xl font-semibold mb-4\">Technologies Used</h3><div class=\"flex flex-wrap gap-2 mb-6\">{}</div>\n<p class=\"mb-2\">{}</p><p class=\"mb-6 capitalize\">{}</p>\n",
        escape(&project.long_description),
        tags(&project.tech, "px-3 py-1 text-sm rounded-full bg-primary-100 text-primary-700"),
        escape(&project.date),
        escape(&project.category)
    ));
    if let Some(url) = &project.live_url {
        out.push_str(&format!(
            "<a href=\"{}\"{} class=\"block text-center px-4 py-2 mb-2 rounded-lg text-white bg-gradient-to-r from-primary-500 to-purple-600\">Live Demo</a>\n",
            escape(url),
            external_attrs(true)
        ));
    }
    if let Some(url) = &project.github_url {
        out.push_str(&format!(
            "<a href=\"{}\"{} class=\"block text-center px-4 py-2 rounded-lg border\">View Code</a>\n",
            escape(url),
            external_attrs(true)
        ));
    }
    out.push_str("</div>\n</div>\n</div>\n</div>\n");
    out
}

fn render_timeline_entry(entry: &TimelineEntry) -> String {
    let mut out = format!(
        "<div class=\"relative pl-8 pb-8 border-l-2 border-primary-400\">\n<div class=\"glass p-6 rounded-2xl\">\n<h4 class=\"text-xl font-bold\">{}</h4>\n<p class=\"text-primary-600 font-medium\">{}</p>\n<p class=\"text-sm text-gray-500 mb-4\">{}</p>\n<ul class=\"space-y-2 mb-4\">\n",
        escape(&entry.title),
        escape(&entry.organization),
        escape(&entry.duration)
    );
    for point in &entry.points {
        out.push_str(&format!(
            "<li class=\"text-gray-600 dark:text-gray-300\">{}</li>\n",
            escape(point)
        ));
    }
    out.push_str("</ul>\n");
    out.push_str(&format!(
        "<div class=\"flex flex-wrap gap-2\">{}</div>\n",
        tags(&entry.technologies, "px-2 py-1 text-xs rounded bg-gray-100 dark:bg-gray-700")
    ));
    out.push_str("</div>\n</div>\n");
    out
}

pub fn render_experience(state: &PageState) -> String {
    let timeline = &state.portfolio.timeline;
    let mut out = section_open(state, "experience", "py-20 bg-gray-50 dark:bg-gray-800");
    out.push_str("<div class=\"max-w-7xl mx-auto px-4\">\n");
    out.push_str(&section_header("Experience", "My professional journey"));
    out.push_str("<div class=\"grid lg:grid-cols-2 gap-12\">\n");

    out.push_str("<div>\n<h3 class=\"text-2xl font-bold mb-8\">Work Experience</h3>\n");
    for entry in &timeline.work {
        out.push_str(&render_timeline_entry(entry));
    }
    out.push_str("</div>\n<div>\n<h3 class=\"text-2xl font-bold mb-8\">Education</h3>\n");
    for entry in &timeline.education {
        out.push_str(&render_timeline_entry(entry));
    }
    out.push_str("</div>\n</div>\n");

    if !timeline.certifications.is_empty() {
        out.push_str("<h3 class=\"text-2xl font-bold text-center mt-16 mb-8\">Certifications</h3>\n<div class=\"grid md:grid-cols-3 gap-6\">\n");
        for entry in &timeline.certifications {
            out.push_str(&render_timeline_entry(entry));
        }
        out.push_str("</div>\n");
    }

    out.push_str("<div class=\"glass p-8 rounded-2xl mt-16 text-center\">\n<h3 class=\"text-2xl font-bold mb-4\">Ready for New Challenges</h3>\n<p class=\"text-gray-600 dark:text-gray-300 mb-6\">I'm always excited to take on new projects and collaborate with amazing teams. Let's build something incredible together!</p>\n<a href=\"#contact\" class=\"px-8 py-3 rounded-full text-white bg-gradient-to-r from-primary-500 to-purple-600\">Get In Touch</a>\n</div>\n");
    out.push_str("</div>\n</section>\n");
    out
}

fn form_field(name: &str, label: &str, kind: &str, value: &str) -> String {
    if kind == "textarea" {
        format!(
            "<div class=\"relative\"><textarea id=\"contact-{0}\" name=\"{0}\" rows=\"5\" required class=\"w-full px-4 py-3 rounded-lg border\">{1}</textarea><label for=\"contact-{0}\">{2}</label></div>\n",
            name,
            escape(value),
            label
        )
    } else {
        format!(
            "<div class=\"relative\"><input id=\"contact-{0}\" type=\"{1}\" name=\"{0}\" value=\"{2}\" required class=\"w-full px-4 py-3 rounded-lg border\"><label for=\"contact-{0}\">{3}</label></div>\n",
            name,
            kind,
            escape(value),
            label
        )
    }
}

pub fn render_contact(state: &PageState) -> String {
    let portfolio = state.portfolio;
    let form = &state.contact;
    let mut out = section_open(state, "contact", "py-20 bg-white dark:bg-gray-900");
    out.push_str("<div class=\"max-w-7xl mx-auto px-4\">\n");
    out.push_str(&section_header(
        "Get In Touch",
        "Ready to start a project or just want to chat? I'd love to hear from you!",
    ));
    out.push_str("<div class=\"grid lg:grid-cols-2 gap-12\">\n<div>\n");
    out.push_str("<h3 class=\"text-2xl font-bold mb-4\">Let's Connect</h3>\n<p class=\"text-gray-600 dark:text-gray-300 mb-8\">I'm always open to discussing new opportunities, creative projects, or potential collaborations. Whether you have a question about my work or just want to say hello, feel free to reach out!</p>\n");
    for info in &portfolio.contact {
        out.push_str(&format!(
            "<a href=\"{}\"{} class=\"flex items-center p-4 mb-4 glass rounded-xl\"><div><p class=\"text-sm text-gray-500\">{}</p><p class=\"font-medium\">{}</p></div></a>\n",
            escape(&info.link),
            external_attrs(info.is_external()),
            escape(&info.label),
            escape(&info.value)
        ));
    }
    if !portfolio.social.is_empty() {
        out.push_str("<h4 class=\"text-lg font-semibold mt-8 mb-4\">Follow Me</h4>\n<div class=\"flex space-x-4\">\n");
        for social in &portfolio.social {
            out.push_str(&format!(
                "<a href=\"{}\"{} aria-label=\"{}\" class=\"p-3 glass rounded-full\">{}</a>\n",
                escape(&social.url),
                external_attrs(true),
                escape(&social.name),
                escape(&social.name)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n<div class=\"glass p-8 rounded-2xl\">\n<h3 class=\"text-2xl font-bold mb-6\">Send a Message</h3>\n");

    match &form.banner {
        ContactBanner::Hidden => {}
        ContactBanner::Sent => out.push_str(&format!(
            "<div id=\"contact-banner\" class=\"mb-6 p-4 rounded-lg bg-green-100 text-green-700\" role=\"status\" data-dismiss-after-ms=\"{}\">Message sent successfully! I'll get back to you soon.</div>\n",
            state.options.banner_ms
        )),
        ContactBanner::Missing(fields) => out.push_str(&format!(
            "<div id=\"contact-banner\" class=\"mb-6 p-4 rounded-lg bg-red-100 text-red-700\" role=\"alert\">Please fill in: {}</div>\n",
            escape(&fields.join(", "))
        )),
    }

    out.push_str("<form method=\"post\" action=\"/contact#contact\" class=\"space-y-6\">\n");
    out.push_str(&form_field("name", "Your Name", "text", &form.values.name));
    out.push_str(&form_field("email", "Email Address", "email", &form.values.email));
    out.push_str(&form_field("subject", "Subject", "text", &form.values.subject));
    out.push_str(&form_field("message", "Your Message", "textarea", &form.values.message));
    out.push_str("<button type=\"submit\" class=\"w-full px-8 py-4 rounded-lg text-white font-medium bg-gradient-to-r from-primary-500 to-purple-600\">Send Message</button>\n");
    out.push_str("</form>\n</div>\n</div>\n</div>\n</section>\n");
    out
}

pub fn render_footer(state: &PageState) -> String {
    let portfolio = state.portfolio;
    let name = escape(&portfolio.profile.name);
    let mut out = String::new();
    out.push_str("<footer class=\"bg-gray-900 text-white\">\n<div class=\"max-w-7xl mx-auto px-4 py-16 grid md:grid-cols-4 gap-8\">\n");
    out.push_str(&format!(
        "<div><h3 class=\"text-2xl font-bold gradient-text mb-4\">{}</h3><p class=\"text-gray-400 mb-6\">Full-Stack Developer passionate about creating exceptional digital experiences with modern technologies and creative solutions.</p><a href=\"#home\" aria-label=\"Back to top\" class=\"p-3 rounded-full bg-primary-500\">&uarr;</a></div>\n",
        name
    ));
    for column in &portfolio.footer {
        out.push_str(&format!(
            "<div><h4 class=\"text-lg font-semibold mb-4\">{}</h4><ul class=\"space-y-2\">\n",
            escape(&column.title)
        ));
        for link in &column.links {
            out.push_str(&format!(
                "<li><a href=\"{}\"{} class=\"text-gray-400 hover:text-white\">{}</a></li>\n",
                escape(&link.href),
                external_attrs(link.external),
                escape(&link.name)
            ));
        }
        out.push_str("</ul></div>\n");
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"border-t border-gray-800 py-6 text-center text-gray-400\"><p>&copy; {} {}. All rights reserved.</p><p><a href=\"#privacy\">Privacy Policy</a> &middot; <a href=\"#terms\">Terms of Service</a></p></div>\n",
        state.year, name
    ));
    out.push_str("</footer>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::builtin;
    use crate::models::Portfolio;
    use crate::render::ContactForm;

    fn state(portfolio: &Portfolio) -> PageState<'_> {
        PageState::new(portfolio, &SiteConfig::default())
    }

    #[test]
    fn project_grid_follows_filter() {
        let portfolio = builtin();
        let html = render_projects(&state(&portfolio).with_filter(ProjectFilter::new("backend")));
        assert!(html.contains("data-project-id=\"4\""));
        assert!(!html.contains("data-project-id=\"1\""));
        assert!(html.contains("aria-selected=\"true\" href=\"?category=backend"));
    }

    #[test]
    fn empty_category_shows_placeholder() {
        let portfolio = builtin();
        let html = render_projects(&state(&portfolio).with_filter(ProjectFilter::new("mobile")));
        assert!(html.contains("No projects in this category yet."));
    }

    #[test]
    fn project_card_shows_overflow_badge() {
        let portfolio = builtin();
        let html = render_projects(&state(&portfolio));
        // Formsflow lists six technologies: three tags and "+3".
        assert!(html.contains(">+3</span>"));
        assert!(html.contains(">Featured</span>"));
    }

    #[test]
    fn skills_tab_falls_back_to_default() {
        let portfolio = builtin();
        let html = render_skills(&state(&portfolio).with_skills_tab("nonsense"));
        assert!(html.contains("data-skills=\"frontend\""));
        let html = render_skills(&state(&portfolio).with_skills_tab("cloud"));
        assert!(html.contains("data-skills=\"cloud\""));
        assert!(html.contains("Route53"));
    }

    #[test]
    fn hero_shows_current_frame() {
        let portfolio = builtin();
        let mut page = state(&portfolio);
        page.hero.text = "Full-St".to_string();
        let html = render_hero(&page);
        assert!(html.contains("<span id=\"typewriter\" data-role-index=\"0\">Full-St</span>"));
    }

    #[test]
    fn contact_banner_states() {
        let portfolio = builtin();
        let sent = render_contact(&state(&portfolio).with_contact(ContactForm {
            values: Default::default(),
            banner: ContactBanner::Sent,
        }));
        assert!(sent.contains("Message sent successfully!"));
        assert!(sent.contains("data-dismiss-after-ms=\"5000\""));

        let missing = render_contact(&state(&portfolio).with_contact(ContactForm {
            values: crate::models::ContactMessage {
                name: "<Ada>".to_string(),
                ..Default::default()
            },
            banner: ContactBanner::Missing(vec!["email".to_string(), "message".to_string()]),
        }));
        assert!(missing.contains("Please fill in: email, message"));
        assert!(missing.contains("value=\"&lt;Ada&gt;\""));
    }

    #[test]
    fn tab_links_percent_encode_query_values() {
        let portfolio = builtin();
        let html = render_projects(
            &state(&portfolio)
                .with_filter(ProjectFilter::new("web & mobile #1"))
                .with_skills_tab("cloud"),
        );
        assert!(html.contains("data-category=\"web &amp; mobile #1\""));
        assert!(html.contains("href=\"?category=all&amp;skills=cloud#projects\""));

        let link = page_link("web & mobile #1", "dev ops", "", "skills");
        assert_eq!(link, "?category=web%20%26%20mobile%20%231&amp;skills=dev%20ops#skills");
    }

    #[test]
    fn detail_close_link_keeps_both_tabs() {
        let portfolio = builtin();
        let project = portfolio.project(1).unwrap();
        let html = render_project_detail(project, &ProjectFilter::new("fullstack"), "cloud");
        assert!(html.contains(
            "<a href=\"?category=fullstack&amp;skills=cloud#projects\" aria-label=\"Close\">"
        ));
    }

    #[test]
    fn external_footer_links_open_in_new_tab() {
        let portfolio = builtin();
        let html = render_footer(&state(&portfolio));
        assert!(html.contains(
            "href=\"https://github.com/abilpraju-aot\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
        assert!(html.contains("<a href=\"#about\" class"));
    }

    #[test]
    fn sections_carry_reveal_hooks() {
        let portfolio = builtin();
        let html = render_about(&state(&portfolio));
        assert!(html.starts_with(
            "<section id=\"about\" class=\"py-20 bg-white dark:bg-gray-900 animate-on-scroll\" data-reveal>"
        ));
    }
}
