//! Output path planning for generated files

use crate::project::ProjectConfig;
use std::path::{Path, PathBuf};

/// Every path touched when creating a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPaths {
    /// `<components>/<Name>`
    pub component_dir: PathBuf,
    /// `<components>/<Name>/<Name>.<ext>`
    pub component_file: PathBuf,
    /// `<components>/<Name>/index.<ext>`
    pub index_file: PathBuf,
    /// `<components>/index.<ext>`, the barrel file
    pub parent_index_file: PathBuf,
    /// `<components>/<Name>/<Name>.module.css`, only written for CSS modules
    pub style_file: PathBuf,
}

/// Derive the output paths for a component. Performs no I/O.
pub fn plan_component_paths<C: ProjectConfig + ?Sized>(
    config: &C,
    components_dir: &Path,
    name: &str,
) -> ComponentPaths {
    let component_dir = component_dir_path(components_dir, name);
    let module_ext = config.module_extension();

    ComponentPaths {
        component_file: component_dir.join(format!("{}.{}", name, config.component_extension())),
        index_file: component_dir.join(format!("index.{}", module_ext)),
        parent_index_file: components_dir.join(format!("index.{}", module_ext)),
        style_file: component_dir.join(format!("{}.module.css", name)),
        component_dir,
    }
}

/// `<components>/<Name>`, shared by the component and story commands
pub fn component_dir_path(components_dir: &Path, name: &str) -> PathBuf {
    components_dir.join(name)
}

/// Where the story command looks for the component when no path is given
pub fn default_component_file_path<C: ProjectConfig + ?Sized>(config: &C, name: &str) -> PathBuf {
    component_dir_path(&config.default_components_dir(), name)
}

/// `<stories>/<Name>.stories.<ext>`
pub fn story_file_path<C: ProjectConfig + ?Sized>(
    config: &C,
    stories_dir: &Path,
    name: &str,
) -> PathBuf {
    stories_dir.join(format!("{}.stories.{}", name, config.story_extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::testing::TestConfig;

    #[test]
    fn test_plan_component_paths() {
        let config = TestConfig::rooted(Path::new("/app"));
        let paths = plan_component_paths(&config, Path::new("src/components"), "Button");

        assert_eq!(paths.component_dir, PathBuf::from("src/components/Button"));
        assert_eq!(
            paths.component_file,
            PathBuf::from("src/components/Button/Button.tsx")
        );
        assert_eq!(paths.index_file, PathBuf::from("src/components/Button/index.ts"));
        assert_eq!(paths.parent_index_file, PathBuf::from("src/components/index.ts"));
        assert_eq!(
            paths.style_file,
            PathBuf::from("src/components/Button/Button.module.css")
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let config = TestConfig::rooted(Path::new("/app"));
        let first = plan_component_paths(&config, Path::new("ui"), "Card");
        let second = plan_component_paths(&config, Path::new("ui"), "Card");
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_component_file_path_uses_default_dir() {
        let config = TestConfig::rooted(Path::new("/app"));
        assert_eq!(
            default_component_file_path(&config, "Button"),
            PathBuf::from("/app/src/components/Button")
        );
        assert_eq!(
            default_component_file_path(&config, "Button"),
            plan_component_paths(&config, &config.default_components_dir(), "Button").component_dir
        );
    }

    #[test]
    fn test_story_file_path() {
        let config = TestConfig::rooted(Path::new("/app"));
        assert_eq!(
            story_file_path(&config, Path::new("src/stories"), "Button"),
            PathBuf::from("src/stories/Button.stories.tsx")
        );
    }
}
