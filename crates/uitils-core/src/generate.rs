//! Component and story generation
//!
//! Each command runs one linear pipeline: validate, plan paths, render, write.
//! The first failing filesystem operation stops the run. Files written before
//! the failure are left on disk.

use crate::error::ScaffoldError;
use crate::fs::Filesystem;
use crate::paths;
use crate::project::ProjectConfig;
use crate::request::{ComponentArgs, StoryArgs};
use crate::templates;
use crate::validate;
use std::path::{Path, PathBuf};

/// Kind of file produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Component,
    Index,
    BarrelExport,
    Stylesheet,
    Story,
}

impl ArtifactKind {
    /// Name used in error messages
    pub fn description(&self) -> &'static str {
        match self {
            ArtifactKind::Component => "component file",
            ArtifactKind::Index => "component index file",
            ArtifactKind::BarrelExport => "components directory export",
            ArtifactKind::Stylesheet => "style file",
            ArtifactKind::Story => "story file",
        }
    }
}

/// A file written (or appended to) by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

/// Outcome of a successful run, artifacts in the order they were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub artifacts: Vec<Artifact>,
}

impl Report {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            artifacts: Vec::new(),
        }
    }

    fn record(&mut self, kind: ArtifactKind, path: &Path) {
        self.artifacts.push(Artifact {
            kind,
            path: path.to_path_buf(),
        });
    }

    /// Paths of every artifact, in write order
    pub fn paths(&self) -> Vec<&Path> {
        self.artifacts.iter().map(|a| a.path.as_path()).collect()
    }
}

/// Create a component directory, its source, index, barrel export and
/// optional stylesheet
pub fn create_component<C, F>(
    config: &C,
    fs: &F,
    args: &ComponentArgs,
) -> Result<Report, ScaffoldError>
where
    C: ProjectConfig + ?Sized,
    F: Filesystem + ?Sized,
{
    let request = validate::validate_component(config, fs, args)?;
    let paths = paths::plan_component_paths(config, &request.components_dir, &request.name);

    let component_code = templates::component_template(&request);
    let export_code = templates::export_template(&request.name);

    let mut report = Report::new(&request.name);

    fs.create_dir(&paths.component_dir)
        .map_err(|e| ScaffoldError::write("component directory", &paths.component_dir, e))?;

    write_artifact(fs, &mut report, ArtifactKind::Component, &paths.component_file, &component_code)?;
    write_artifact(fs, &mut report, ArtifactKind::Index, &paths.index_file, &export_code)?;

    fs.append(&paths.parent_index_file, &export_code).map_err(|e| {
        ScaffoldError::write(
            ArtifactKind::BarrelExport.description(),
            &paths.parent_index_file,
            e,
        )
    })?;
    report.record(ArtifactKind::BarrelExport, &paths.parent_index_file);

    if request.writes_stylesheet() {
        write_artifact(
            fs,
            &mut report,
            ArtifactKind::Stylesheet,
            &paths.style_file,
            templates::style_template(),
        )?;
    }

    Ok(report)
}

/// Create a story file for an existing component
pub fn create_story<C, F>(config: &C, fs: &F, args: &StoryArgs) -> Result<Report, ScaffoldError>
where
    C: ProjectConfig + ?Sized,
    F: Filesystem + ?Sized,
{
    let request = validate::validate_story(config, fs, args)?;
    let story_path = paths::story_file_path(config, &request.stories_dir, &request.name);
    let story_code = templates::story_template(&request.name, &request.component_file_path);

    let mut report = Report::new(&request.name);
    write_artifact(fs, &mut report, ArtifactKind::Story, &story_path, &story_code)?;

    Ok(report)
}

fn write_artifact<F: Filesystem + ?Sized>(
    fs: &F,
    report: &mut Report,
    kind: ArtifactKind,
    path: &Path,
    contents: &str,
) -> Result<(), ScaffoldError> {
    fs.write(path, contents)
        .map_err(|e| ScaffoldError::write(kind.description(), path, e))?;
    report.record(kind, path);
    Ok(())
}
