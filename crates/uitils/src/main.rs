//! UI Tils CLI - Boilerplate for React components and Storybook stories

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use uitils_core::{logging, ComponentArgs, ProjectConfig, StoryArgs};

/// React + TypeScript project layout
#[derive(Clone)]
pub struct ReactConfig;

impl ProjectConfig for ReactConfig {
    fn name(&self) -> &'static str {
        "ui-tils"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding React components and Storybook stories"
    }

    fn default_components_dir(&self) -> PathBuf {
        PathBuf::from("src/components")
    }

    fn default_stories_dir(&self) -> PathBuf {
        PathBuf::from("src/stories")
    }

    fn component_extension(&self) -> &'static str {
        "tsx"
    }

    fn module_extension(&self) -> &'static str {
        "ts"
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a React component with an index file and a components directory export
    Component(CliComponentArgs),
    /// Create a Storybook story for an existing component
    Story(CliStoryArgs),
}

#[derive(Parser, Debug)]
pub struct CliComponentArgs {
    /// Name of the component
    pub name: String,

    /// Use styled-components boilerplate
    #[arg(short = 's', long = "styled-component")]
    pub styled_component: bool,

    /// Use css-modules boilerplate
    #[arg(short = 'm', long = "css-module")]
    pub css_module: bool,

    /// Add `Props` type with children key to component
    #[arg(short, long)]
    pub children: bool,

    /// Add `Props` type to component
    #[arg(short, long)]
    pub props: bool,

    /// Path to components directory, defaults to `src/components`
    #[arg(short = 'd', long = "components-dir-path")]
    pub components_dir_path: Option<PathBuf>,
}

impl From<CliComponentArgs> for ComponentArgs {
    fn from(args: CliComponentArgs) -> Self {
        ComponentArgs {
            name: args.name,
            styled_component: args.styled_component,
            css_module: args.css_module,
            props: args.props,
            children: args.children,
            components_dir_path: args.components_dir_path,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliStoryArgs {
    /// Name of the component to create a story for
    pub name: String,

    /// Path to stories directory, defaults to `src/stories`
    #[arg(short = 'p', long = "stories-dir-path")]
    pub stories_dir_path: Option<PathBuf>,

    /// Path to component file, defaults to `src/components/[name]`
    #[arg(short = 'c', long = "component-file-path")]
    pub component_file_path: Option<PathBuf>,
}

impl From<CliStoryArgs> for StoryArgs {
    fn from(args: CliStoryArgs) -> Self {
        StoryArgs {
            name: args.name,
            stories_dir_path: args.stories_dir_path,
            component_file_path: args.component_file_path,
        }
    }
}

/// Parse arguments, taking the command name and help text from the config
fn parse_args<C, I, T>(config: &C, argv: I) -> Result<Args, clap::Error>
where
    C: ProjectConfig,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Args::command()
        .name(config.name())
        .about(config.cli_description())
        .try_get_matches_from(argv)?;
    Args::from_arg_matches(&matches)
}

/// Help and version output exit with 0, every other parse failure with 1
fn parse_failure_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn run<C: ProjectConfig>(config: &C, args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Component(component_args) => {
            uitils_core::run_component(config, component_args.into())?;
        }
        Command::Story(story_args) => {
            uitils_core::run_story(config, story_args.into())?;
        }
    }

    Ok(())
}

/// Run a parsed command and map the outcome to an exit status
fn execute<C: ProjectConfig>(config: &C, args: Args) -> u8 {
    match run(config, args) {
        Ok(()) => 0,
        Err(err) => {
            logging::report_error(err);
            1
        }
    }
}

fn main() -> ExitCode {
    let config = ReactConfig;

    let args = match parse_args(&config, std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_failure_status(&err));
        }
    };

    ExitCode::from(execute(&config, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_flags() {
        let args = parse_args(
            &ReactConfig,
            ["ui-tils", "component", "Card", "-m", "-c", "-d", "web/ui"],
        )
        .unwrap();

        match args.command {
            Command::Component(cmd) => {
                let core: ComponentArgs = cmd.into();
                assert_eq!(core.name, "Card");
                assert!(core.css_module);
                assert!(core.children);
                assert!(!core.styled_component);
                assert!(!core.props);
                assert_eq!(core.components_dir_path, Some(PathBuf::from("web/ui")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_component_long_flags() {
        let args = parse_args(&ReactConfig, [
            "ui-tils",
            "component",
            "Button",
            "--styled-component",
            "--props",
        ])
        .unwrap();

        match args.command {
            Command::Component(cmd) => {
                assert!(cmd.styled_component);
                assert!(cmd.props);
                assert_eq!(cmd.components_dir_path, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_story_flags() {
        let args = parse_args(&ReactConfig, [
            "ui-tils",
            "story",
            "Button",
            "-p",
            "docs/stories",
            "--component-file-path",
            "lib/Button",
        ])
        .unwrap();

        match args.command {
            Command::Story(cmd) => {
                let core: StoryArgs = cmd.into();
                assert_eq!(core.name, "Button");
                assert_eq!(core.stories_dir_path, Some(PathBuf::from("docs/stories")));
                assert_eq!(core.component_file_path, Some(PathBuf::from("lib/Button")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_name_is_required() {
        assert!(parse_args(&ReactConfig, ["ui-tils", "story"]).is_err());
    }

    #[test]
    fn test_react_config_layout() {
        let config = ReactConfig;
        let paths = uitils_core::plan_component_paths(
            &config,
            &config.default_components_dir(),
            "Button",
        );
        assert_eq!(
            paths.component_file,
            PathBuf::from("src/components/Button/Button.tsx")
        );
        assert_eq!(paths.parent_index_file, PathBuf::from("src/components/index.ts"));
    }

    #[test]
    fn test_lowercase_component_fails() {
        let args = parse_args(&ReactConfig, ["ui-tils", "component", "button"]).unwrap();
        let err = run(&ReactConfig, args).unwrap_err();
        assert!(err.to_string().contains("capitalized"));
    }

    #[test]
    fn test_validation_failure_exits_with_one() {
        let args = parse_args(&ReactConfig, ["ui-tils", "component", "button"]).unwrap();
        assert_eq!(execute(&ReactConfig, args), 1);

        let args =
            parse_args(&ReactConfig, ["ui-tils", "component", "Button", "-s", "-m"]).unwrap();
        assert_eq!(execute(&ReactConfig, args), 1);
    }

    #[test]
    fn test_argument_errors_exit_with_one() {
        let missing_name = parse_args(&ReactConfig, ["ui-tils", "component"]).unwrap_err();
        assert_eq!(parse_failure_status(&missing_name), 1);

        let unknown_flag =
            parse_args(&ReactConfig, ["ui-tils", "component", "Button", "-x"]).unwrap_err();
        assert_eq!(parse_failure_status(&unknown_flag), 1);

        let no_command = parse_args(&ReactConfig, ["ui-tils"]).unwrap_err();
        assert_eq!(parse_failure_status(&no_command), 1);
    }

    #[test]
    fn test_help_and_version_exit_successfully() {
        let help = parse_args(&ReactConfig, ["ui-tils", "--help"]).unwrap_err();
        assert_eq!(parse_failure_status(&help), 0);
        assert!(help.to_string().contains(ReactConfig.cli_description()));

        let version = parse_args(&ReactConfig, ["ui-tils", "--version"]).unwrap_err();
        assert_eq!(parse_failure_status(&version), 0);
    }
}
