use clap::Parser;
use ignite::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("ignite")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["my_project"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project_name, "my_project");
    assert_eq!(parsed.path, None);
    assert_eq!(parsed.database, None);
    assert_eq!(parsed.controller, None);
    assert!(!parsed.with_workflow);
    assert!(!parsed.with_dockerfile);
    assert!(!parsed.interactive);
    assert!(!parsed.verbose);
    assert!(!parsed.skip_init);
    assert_eq!(parsed.log_file, PathBuf::from(".logs"));
    assert!(parsed.is_interactive());
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "my_project",
        "--path",
        "./out",
        "--database",
        "postgres",
        "--controller",
        "grpc",
        "--withWorkflow",
        "--withDockerfile",
        "--verbose",
        "--templates",
        "./templates",
        "--skip-init",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.path, Some(PathBuf::from("./out")));
    assert_eq!(parsed.database.as_deref(), Some("postgres"));
    assert_eq!(parsed.controller.as_deref(), Some("grpc"));
    assert!(parsed.with_workflow);
    assert!(parsed.with_dockerfile);
    assert!(parsed.verbose);
    assert_eq!(parsed.templates, Some(PathBuf::from("./templates")));
    assert!(parsed.skip_init);
    assert!(!parsed.is_interactive());
}

#[test]
fn test_short_flags() {
    let args = make_args(&["my_project", "-p", "./out", "-d", "mysql", "-c", "http", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.path, Some(PathBuf::from("./out")));
    assert_eq!(parsed.database.as_deref(), Some("mysql"));
    assert_eq!(parsed.controller.as_deref(), Some("http"));
    assert!(parsed.verbose);
}

#[test]
fn test_interactive_flag_wins_over_database() {
    let args = make_args(&["my_project", "-d", "mysql", "-c", "http", "--interactive"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(parsed.is_interactive());
}

#[test]
fn test_empty_database_is_interactive() {
    let args = make_args(&["my_project", "-d", "", "-c", "http"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert_eq!(parsed.database.as_deref(), Some(""));
    assert!(parsed.is_interactive());
}

#[test]
fn test_flag_options_lowercase_choices() {
    let args = make_args(&["my_project", "-d", "Postgres", "-c", "GRPC"]);
    let parsed = Args::try_parse_from(args).unwrap();

    let options = parsed.flag_options(PathBuf::from("/tmp/project"));
    assert_eq!(options.database, "postgres");
    assert_eq!(options.controller, "grpc");
    assert_eq!(options.project_name, "my_project");
    assert_eq!(options.path, PathBuf::from("/tmp/project"));
}

#[test]
fn test_database_requires_controller() {
    assert!(Args::try_parse_from(make_args(&["my_project", "-d", "mysql"])).is_err());
    assert!(Args::try_parse_from(make_args(&["my_project", "-c", "http"])).is_err());
}

#[test]
fn test_missing_project_name() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["my_project", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
