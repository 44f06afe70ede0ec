//! Raw and validated inputs for the generation commands

use std::fmt;
use std::path::PathBuf;

/// Styling strategy for a generated component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleVariant {
    #[default]
    None,
    StyledComponent,
    CssModule,
}

impl StyleVariant {
    pub fn display_name(&self) -> &'static str {
        match self {
            StyleVariant::None => "none",
            StyleVariant::StyledComponent => "styled-component",
            StyleVariant::CssModule => "css-module",
        }
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Props declared by a generated component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropShape {
    #[default]
    None,
    Example,
    Children,
}

impl PropShape {
    pub fn display_name(&self) -> &'static str {
        match self {
            PropShape::None => "none",
            PropShape::Example => "props",
            PropShape::Children => "children",
        }
    }
}

impl fmt::Display for PropShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Options of the `component` command
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    /// Component name, must be capitalized
    pub name: String,

    /// Use styled-components boilerplate
    pub styled_component: bool,

    /// Use CSS modules boilerplate
    pub css_module: bool,

    /// Add a `Props` type with an `example` key
    pub props: bool,

    /// Add a `Props` type with a `children` key
    pub children: bool,

    /// Components directory, defaults to the project's components directory
    pub components_dir_path: Option<PathBuf>,
}

/// Options of the `story` command
#[derive(Debug, Clone, Default)]
pub struct StoryArgs {
    /// Name of the component the story is for
    pub name: String,

    /// Stories directory, defaults to the project's stories directory
    pub stories_dir_path: Option<PathBuf>,

    /// Component import path, defaults to `<components>/<name>`
    pub component_file_path: Option<PathBuf>,
}

/// A component to generate, built by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    pub name: String,
    pub style: StyleVariant,
    pub props: PropShape,
    /// Existing directory the component is created in
    pub components_dir: PathBuf,
}

impl ComponentRequest {
    /// Whether the run writes a `.module.css` file
    pub fn writes_stylesheet(&self) -> bool {
        self.style == StyleVariant::CssModule
    }
}

/// A story to generate, built by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRequest {
    pub name: String,
    /// Import path of the component, as written into the story
    pub component_file_path: PathBuf,
    /// Existing directory the story is written to
    pub stories_dir: PathBuf,
}
