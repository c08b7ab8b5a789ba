use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How error responses are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorFormat {
    /// JSON `{error, message}` with a status code matching the error
    Envelope,
    /// Plain text. Unknown users get `Unknown user ID` with a 200, the way
    /// older clients expect
    Plain,
}

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    /// Directory holding `views/index.html` and the `public` folder
    #[clap(long, env, default_value = "assets")]
    pub assets_dir: PathBuf,
    #[clap(long, env, default_value = "exercise.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env = "PORT", default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    #[clap(long, env, value_enum, default_value = "envelope")]
    pub error_format: ErrorFormat,

    /// Deletes the database before starting the main program for debug purposes
    #[arg(long, env, default_value = "false")]
    pub debug_delete_database: bool,
}
