// CLI module for administrative operations

pub mod bootstrap;

use clap::{Parser, Subcommand};

/// RT/RW performance tracker backend CLI
#[derive(Parser)]
#[command(name = "rtrw-kinerja")]
#[command(about = "Aplikasi Kinerja RT RW backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (the default)
    Serve,

    /// Seed the admin credentials record if it does not exist yet
    Bootstrap,
}
