//! Project configuration trait for CLI binaries
//!
//! This trait describes the conventions of the project being scaffolded into:
//! where components and stories live by default, and which file extensions the
//! generated sources use.

use std::path::PathBuf;

/// Configuration trait for the target project layout
///
/// A binary implements this trait to define:
/// - Tool identity (command name, help text)
/// - Default directories for components and stories
/// - File extensions for generated sources
pub trait ProjectConfig {
    /// Internal tool name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Directory used when `--components-dir-path` is not given
    fn default_components_dir(&self) -> PathBuf;

    /// Directory used when `--stories-dir-path` is not given
    fn default_stories_dir(&self) -> PathBuf;

    /// Extension of the generated component source file
    fn component_extension(&self) -> &'static str;

    /// Extension of index (barrel) files
    fn module_extension(&self) -> &'static str;

    /// Extension of the generated story file, appended after `.stories`
    fn story_extension(&self) -> &'static str {
        self.component_extension()
    }
}
