//! Precondition checks run before anything is written
//!
//! Rules are checked in a fixed order and the first failure ends validation.
//! Directory checks happen in two stages: [`resolve_path`] records whether a
//! path came from the project default or from a flag, then [`ensure_exists`]
//! runs the one shared existence check and picks the message from that tag.

use crate::error::ScaffoldError;
use crate::fs::Filesystem;
use crate::paths;
use crate::project::ProjectConfig;
use crate::request::{
    ComponentArgs, ComponentRequest, PropShape, StoryArgs, StoryRequest, StyleVariant,
};
use std::path::{Path, PathBuf};

/// Where a resolved path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOrigin {
    Default,
    Explicit,
}

/// A path tagged with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub origin: PathOrigin,
}

/// Pick the explicit path when given, otherwise the default
pub fn resolve_path(explicit: Option<&Path>, default: impl FnOnce() -> PathBuf) -> ResolvedPath {
    match explicit {
        Some(path) => ResolvedPath {
            path: path.to_path_buf(),
            origin: PathOrigin::Explicit,
        },
        None => ResolvedPath {
            path: default(),
            origin: PathOrigin::Default,
        },
    }
}

/// Fail with [`ScaffoldError::MissingDirectory`] unless the resolved path exists
pub fn ensure_exists<F: Filesystem + ?Sized>(
    fs: &F,
    resolved: ResolvedPath,
    what: &'static str,
    flag: &'static str,
) -> Result<PathBuf, ScaffoldError> {
    if fs.exists(&resolved.path) {
        Ok(resolved.path)
    } else {
        Err(ScaffoldError::MissingDirectory {
            what,
            path: resolved.path,
            origin: resolved.origin,
            flag,
        })
    }
}

/// Component names must start with an uppercase letter
pub fn check_name(name: &str, subject: &'static str) -> Result<(), ScaffoldError> {
    match name.chars().next() {
        Some(first) if first.is_uppercase() => Ok(()),
        _ => Err(ScaffoldError::Naming { subject }),
    }
}

fn style_variant(args: &ComponentArgs) -> Result<StyleVariant, ScaffoldError> {
    match (args.styled_component, args.css_module) {
        (true, true) => Err(ScaffoldError::Conflict {
            first: StyleVariant::StyledComponent.display_name(),
            second: StyleVariant::CssModule.display_name(),
        }),
        (true, false) => Ok(StyleVariant::StyledComponent),
        (false, true) => Ok(StyleVariant::CssModule),
        (false, false) => Ok(StyleVariant::None),
    }
}

fn prop_shape(args: &ComponentArgs) -> Result<PropShape, ScaffoldError> {
    match (args.props, args.children) {
        (true, true) => Err(ScaffoldError::Conflict {
            first: PropShape::Example.display_name(),
            second: PropShape::Children.display_name(),
        }),
        (true, false) => Ok(PropShape::Example),
        (false, true) => Ok(PropShape::Children),
        (false, false) => Ok(PropShape::None),
    }
}

/// Validate the `component` command's options
pub fn validate_component<C, F>(
    config: &C,
    fs: &F,
    args: &ComponentArgs,
) -> Result<ComponentRequest, ScaffoldError>
where
    C: ProjectConfig + ?Sized,
    F: Filesystem + ?Sized,
{
    check_name(&args.name, "React")?;
    let style = style_variant(args)?;
    let props = prop_shape(args)?;

    let components_dir = ensure_exists(
        fs,
        resolve_path(args.components_dir_path.as_deref(), || {
            config.default_components_dir()
        }),
        "components directory",
        "components-dir-path",
    )?;

    Ok(ComponentRequest {
        name: args.name.clone(),
        style,
        props,
        components_dir,
    })
}

/// Validate the `story` command's options
pub fn validate_story<C, F>(config: &C, fs: &F, args: &StoryArgs) -> Result<StoryRequest, ScaffoldError>
where
    C: ProjectConfig + ?Sized,
    F: Filesystem + ?Sized,
{
    check_name(&args.name, "Story")?;

    let stories_dir = ensure_exists(
        fs,
        resolve_path(args.stories_dir_path.as_deref(), || {
            config.default_stories_dir()
        }),
        "stories directory",
        "stories-dir-path",
    )?;

    let component_file_path = ensure_exists(
        fs,
        resolve_path(args.component_file_path.as_deref(), || {
            paths::default_component_file_path(config, &args.name)
        }),
        "component file",
        "component-file-path",
    )?;

    Ok(StoryRequest {
        name: args.name.clone(),
        component_file_path,
        stories_dir,
    })
}
