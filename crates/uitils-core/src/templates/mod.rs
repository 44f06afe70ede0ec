//! Source text rendering for generated artifacts
//!
//! This module provides:
//! - Component source rendering for every style variant and prop shape
//! - The re-export line shared by a component's index and the barrel file
//! - Storybook story rendering
//! - The starter stylesheet for CSS modules
//!
//! Everything here is pure: identical input always yields identical text.

pub mod component;
pub mod story;

pub use component::component_template;
pub use story::story_template;

/// Starter content for `<Name>.module.css`
const STARTER_STYLESHEET: &str = "";

/// One-line re-export of a component, written to its own index file and
/// appended to the barrel file
pub fn export_template(name: &str) -> String {
    format!("export * from \"./{}\";\n", name)
}

/// Starter stylesheet written next to a CSS module component
pub fn style_template() -> &'static str {
    STARTER_STYLESHEET
}
