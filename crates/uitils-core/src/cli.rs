//! Command runners shared by CLI binaries
//!
//! Binaries parse their own arguments and convert them into [`ComponentArgs`]
//! or [`StoryArgs`]. The runners generate the files against the local
//! filesystem and print one success line per artifact.

use crate::fs::LocalFs;
use crate::generate::{self, Artifact, ArtifactKind, Report};
use crate::logging;
use crate::project::ProjectConfig;
use anyhow::Result;

pub use crate::request::{ComponentArgs, StoryArgs};

/// Run the `component` command
pub fn run_component<C: ProjectConfig + ?Sized>(config: &C, args: ComponentArgs) -> Result<Report> {
    let report = generate::create_component(config, &LocalFs, &args)?;

    logging::success(format!("Created component files for {}\n", report.name));
    print_artifacts(&report);

    Ok(report)
}

/// Run the `story` command
pub fn run_story<C: ProjectConfig + ?Sized>(config: &C, args: StoryArgs) -> Result<Report> {
    let report = generate::create_story(config, &LocalFs, &args)?;

    logging::success(format!("Created story file for {}", report.name));
    print_artifacts(&report);

    Ok(report)
}

fn print_artifacts(report: &Report) {
    for artifact in &report.artifacts {
        logging::success(artifact_line(artifact));
    }
}

fn artifact_line(artifact: &Artifact) -> String {
    let label = match artifact.kind {
        ArtifactKind::Component => "Component path:",
        ArtifactKind::Index => "Index path:",
        ArtifactKind::BarrelExport => "Added an export to your components directory:",
        ArtifactKind::Stylesheet => "Style path:",
        ArtifactKind::Story => "Story path:",
    };
    format!("{} {}", label, artifact.path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::testing::TestConfig;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_artifact_line() {
        let artifact = Artifact {
            kind: ArtifactKind::BarrelExport,
            path: PathBuf::from("src/components/index.ts"),
        };
        assert_eq!(
            artifact_line(&artifact),
            "Added an export to your components directory: src/components/index.ts"
        );
    }

    #[test]
    fn test_run_component_reports_written_files() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/components")).unwrap();
        let config = TestConfig::rooted(dir.path());
        let args = ComponentArgs {
            name: "Button".to_string(),
            styled_component: true,
            ..ComponentArgs::default()
        };

        let report = run_component(&config, args).unwrap();

        assert_eq!(report.artifacts.len(), 3);
        for path in report.paths() {
            assert!(path.exists(), "{} was not written", path.display());
        }
    }

    #[test]
    fn test_run_story_propagates_errors() {
        let dir = tempdir().unwrap();
        let config = TestConfig::rooted(dir.path());
        let args = StoryArgs {
            name: "Button".to_string(),
            ..StoryArgs::default()
        };

        let err = run_story(&config, args).unwrap_err();
        assert!(err.to_string().contains("default stories directory"));
    }
}
