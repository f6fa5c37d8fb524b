//! Ignite's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration collection and
//! project generation.

use std::path::Path;

use ignite::{
    cli::{get_args, Args},
    config::collect_from_flags,
    error::{default_error_handler, Error, Result},
    initializer::{list_entries, ProjectInitializer, SystemCommandRunner},
    loader::{get_asset_loader, AssetSource},
    logger::init_logger,
    prompt::{collect_interactive, DialoguerPrompter},
    registry::TemplateRegistry,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    if let Err(err) = init_logger(args.verbose, &args.log_file) {
        eprintln!("Error opening log file: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects the configuration interactively or from flags
/// 2. Resolves the template asset source
/// 3. Builds the project tree in the target directory
/// 4. Initializes the Go module and git repository
fn run(args: Args) -> Result<()> {
    log::debug!("{:?}", args);

    let path = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir().map_err(Error::IoError)?,
    };

    let config = if args.is_interactive() {
        let prompter = DialoguerPrompter::new();
        collect_interactive(&prompter, path, args.project_name.clone(), args.verbose)?
    } else {
        collect_from_flags(args.flag_options(path))?
    };
    log::debug!("{:?}", config);

    let loader = get_asset_loader(AssetSource::from_option(args.templates.clone()))?;
    let registry = TemplateRegistry::builtin();
    let renderer = MiniJinjaRenderer::new();
    let runner = SystemCommandRunner::new();

    let project_dir = ProjectInitializer::new(&registry, &*loader, &renderer, &runner)
        .skip_init(args.skip_init)
        .run(&config)?;

    if args.verbose {
        print_summary(&project_dir)?;
    }

    println!("Project initialized successfully!");
    Ok(())
}

fn print_summary(project_dir: &Path) -> Result<()> {
    for entry in list_entries(project_dir)? {
        if entry.starts_with(".git") {
            continue;
        }
        println!("created: '{}'", entry.display());
    }
    Ok(())
}
