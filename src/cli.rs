//! Command-line interface implementation for Ignite.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::FlagOptions;
use crate::constants::LOG_FILE;
use crate::error::Error;

/// Command-line arguments structure for Ignite.
#[derive(Parser, Debug)]
#[command(
    name = "ignite",
    author,
    version,
    about = "Ignite: bootstrap a Go service project",
    long_about = None,
    after_help = concat!(
        "Examples:\n",
        "  ignite my_project\n",
        "  ignite my_project --interactive\n",
        "  ignite my_project -d postgres -c http -p ./path/to/project\n",
        "\n",
        "Supported databases: postgres, mysql\n",
        "Supported controllers: grpc, http",
    )
)]
pub struct Args {
    /// Name of the project, also used as the Go module path
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Path to create the project in (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Database type (one of: postgres, mysql)
    #[arg(short, long, requires = "controller")]
    pub database: Option<String>,

    /// Controller type (one of: grpc, http)
    #[arg(short, long, requires = "database")]
    pub controller: Option<String>,

    /// Include a GitHub Actions workflow
    #[arg(long = "withWorkflow")]
    pub with_workflow: bool,

    /// Include a Dockerfile
    #[arg(long = "withDockerfile")]
    pub with_dockerfile: bool,

    /// Ask for the configuration interactively
    #[arg(long)]
    pub interactive: bool,

    /// Mirror log output to stdout
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to load template assets from instead of the built-in ones
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// File the log is appended to
    #[arg(long, value_name = "FILE", default_value = LOG_FILE)]
    pub log_file: PathBuf,

    /// Skip `go mod init` and `git init`
    #[arg(long)]
    pub skip_init: bool,
}

impl Args {
    /// True when the configuration has to be collected by prompting.
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.database.as_deref().map_or(true, str::is_empty)
    }

    /// Flag values for validation; database and controller are lowercased.
    pub fn flag_options(&self, path: PathBuf) -> FlagOptions {
        FlagOptions {
            path,
            project_name: self.project_name.clone(),
            database: self.database.as_deref().unwrap_or_default().to_lowercase(),
            controller: self.controller.as_deref().unwrap_or_default().to_lowercase(),
            with_workflow: self.with_workflow,
            with_dockerfile: self.with_dockerfile,
            verbose: self.verbose,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                && e.to_string().contains("<PROJECT_NAME>")
            {
                eprintln!("{}\n", Error::MissingProjectName);
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
