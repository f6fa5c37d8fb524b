//! Common constants used throughout the Ignite application.

/// Database backends a project can be generated for
pub const SUPPORTED_DATABASES: [&str; 2] = ["postgres", "mysql"];

/// Controller styles a project can be generated for
pub const SUPPORTED_CONTROLLERS: [&str; 2] = ["grpc", "http"];

/// Controller that adds the `gapi` tree
pub const GRPC_CONTROLLER: &str = "grpc";

/// Database that switches generated code to the dedicated SQL driver package
pub const SQL_PACKAGE_DATABASE: &str = "postgres";

/// Log file written in the invocation directory
pub const LOG_FILE: &str = ".logs";

/// Extension of template assets
pub const TEMPLATE_EXTENSION: &str = "txt";
