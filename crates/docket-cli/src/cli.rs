use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docket",
    about = "Docket — a gated in-process registry for typed text items",
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
    /// Run a scripted walkthrough of the registry surface
    Demo(DemoArgs),
    /// Check a content string against the shape rule for a kind
    Check(CheckArgs),
}

#[derive(Args)]
pub struct DemoArgs {}

#[derive(Args)]
pub struct CheckArgs {
    /// The content string to validate
    pub content: String,

    /// Content kind code (1 = json, 2 = xml)
    #[arg(short, long)]
    pub kind: u32,
}
