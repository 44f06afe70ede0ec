//! UI Tils Core - Shared library for React component scaffolding CLIs
//!
//! This library generates boilerplate for React components and their Storybook
//! stories. It is designed to be driven by a thin CLI binary that parses
//! arguments and supplies a [`ProjectConfig`] describing the target project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure Operations** - Path planning and template rendering
//! - **Layer 2: Validation and Generation** - Precondition checks and the write pipeline
//! - **Layer 3: CLI Runners** - Colored reporting on top of the local filesystem
//!
//! # Example Usage
//!
//! ```ignore
//! use uitils_core::{cli, ComponentArgs};
//!
//! let args = ComponentArgs {
//!     name: "Button".to_string(),
//!     css_module: true,
//!     ..ComponentArgs::default()
//! };
//! let report = cli::run_component(&MyConfig, args)?;
//! ```

pub mod cli;
pub mod error;
pub mod fs;
pub mod generate;
pub mod logging;
pub mod paths;
pub mod project;
pub mod request;
pub mod templates;
pub mod validate;

// Re-export main types for convenience
pub use cli::{run_component, run_story};
pub use error::ScaffoldError;
pub use fs::{Filesystem, LocalFs};
pub use generate::{create_component, create_story, Artifact, ArtifactKind, Report};
pub use paths::{plan_component_paths, ComponentPaths};
pub use project::ProjectConfig;
pub use request::{
    ComponentArgs, ComponentRequest, PropShape, StoryArgs, StoryRequest, StyleVariant,
};
pub use validate::{PathOrigin, ResolvedPath};
