//! Inline style and client script.
//!
//! The browser's intersection observer reveals the sections marked
//! `data-reveal`, and an `EventSource` swaps in typewriter frames streamed by
//! the server. Both are optional: without them the page is fully readable.

use super::{escape, PageOptions};

pub const STYLE: &str = r#"<style>
.gradient-text { background: linear-gradient(90deg, #3b82f6, #9333ea); -webkit-background-clip: text; background-clip: text; color: transparent; }
.glass { background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(10px); border: 1px solid rgba(255, 255, 255, 0.2); }
.animate-on-scroll { opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease-out, transform 0.6s ease-out; }
.animate-on-scroll.is-visible { opacity: 1; transform: none; }
.cursor { animation: blink 0.8s infinite; }
@keyframes blink { 50% { opacity: 0; } }
.blob-a { background: linear-gradient(90deg, rgba(96, 165, 250, 0.2), rgba(192, 132, 252, 0.2)); }
.blob-b { background: linear-gradient(90deg, rgba(244, 114, 182, 0.2), rgba(250, 204, 21, 0.2)); }
html { scroll-behavior: smooth; }
</style>
"#;

/// Render the client script for `options`.
pub fn render_script(options: &PageOptions) -> String {
    let mut out = String::from("<script>\n(function () {\n");
    out.push_str(&format!(
        "  var revealOptions = {{ threshold: {}, rootMargin: \"{}\" }};\n",
        options.reveal.threshold,
        escape(&options.reveal.root_margin)
    ));
    out.push_str(
        r#"  var sections = document.querySelectorAll('[data-reveal]');
  if (sections.length && 'IntersectionObserver' in window) {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          entry.target.classList.add('is-visible');
          observer.unobserve(entry.target);
        }
      });
    }, revealOptions);
    sections.forEach(function (section) { observer.observe(section); });
  }
"#,
    );
    if let Some(url) = &options.roles_stream {
        out.push_str(&format!(
            "  var typewriter = document.getElementById('typewriter');\n  if (typewriter && 'EventSource' in window) {{\n    var source = new EventSource(\"{}\");\n    source.addEventListener('frame', function (event) {{\n      var frame = JSON.parse(event.data);\n      typewriter.textContent = frame.text;\n      typewriter.dataset.roleIndex = frame.index;\n    }});\n    window.addEventListener('pagehide', function () {{ source.close(); }});\n  }}\n",
            escape(url)
        ));
    }
    out.push_str(
        r#"  var banner = document.getElementById('contact-banner');
  if (banner && banner.dataset.dismissAfterMs) {
    setTimeout(function () { banner.remove(); }, Number(banner.dataset.dismissAfterMs));
  }
"#,
    );
    out.push_str("})();\n</script>\n");
    out
}
