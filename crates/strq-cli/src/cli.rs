use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "strq",
    about = "StrQ — string analysis and query service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the StrQ HTTP server
    Serve(ServeArgs),
    /// Analyze a string locally and print its derived properties
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address; overrides STRQ_BIND and the default 127.0.0.1:5000
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// The text to analyze
    pub text: String,
    /// Print the property set as JSON
    #[arg(long)]
    pub json: bool,
}
