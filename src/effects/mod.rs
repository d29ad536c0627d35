//! Runtime behaviour of the page.
//!
//! - [`reveal`]: reveal-once visibility flags for page sections.
//! - [`typewriter`]: the hero role-title typing/deleting animation.
//! - [`filter`]: category filter over the project list.
//!
//! Each behaviour is an owned object with explicit state. Views read that
//! state; nothing here renders.

pub mod filter;
pub mod reveal;
pub mod typewriter;

pub use filter::{filter, ProjectFilter, ALL_CATEGORIES};
pub use reveal::{
    Intersection, PageVisibility, RevealOptions, RevealableSection, ScrollRevealController,
    SectionId, VisibilitySource,
};
pub use typewriter::{
    Frame, FrameStream, Phase, Typewriter, TypewriterCycler, TypewriterHandle, TypewriterTiming,
};
