use anyhow::Context;
use colored::Colorize;

use docket_registry::{validate_content, Registry};
use docket_types::ContentKind;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(_) => cmd_demo(),
        Command::Check(args) => cmd_check(args),
    }
}

/// Scripted walkthrough: one registry, one JSON item, one XML item, every
/// public operation exercised once.
fn cmd_demo() -> anyhow::Result<()> {
    let registry = Registry::new();
    registry.initialize();
    println!("{} Registry initialized", "✓".green().bold());

    registry.register_coded("json1", r#"{"name":"test"}"#, 1)?;
    registry.register_coded("xml1", "<root>xml test</root>", 2)?;
    println!(
        "{} Registered {} and {}",
        "✓".green(),
        "json1".yellow(),
        "xml1".yellow()
    );

    println!(
        "  {} = {} ({})",
        "json1".yellow(),
        registry.retrieve("json1")?,
        format!("kind {}", registry.kind_code("json1")?).cyan()
    );
    println!(
        "  {} = {} ({})",
        "xml1".yellow(),
        registry.retrieve("xml1")?,
        format!("kind {}", registry.kind_code("xml1")?).cyan()
    );

    registry.deregister("json1")?;
    registry.deregister("xml1")?;
    println!("{} Deregistered both items", "✓".green());

    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let kind = ContentKind::from_code(args.kind)
        .with_context(|| format!("unrecognized content kind code: {}", args.kind))?;

    match validate_content(&args.content, kind) {
        Ok(()) => {
            println!("{} Valid {} shape", "✓".green().bold(), kind.to_string().cyan());
            Ok(())
        }
        Err(err) => {
            println!("{} {}", "✗".red().bold(), err);
            std::process::exit(1);
        }
    }
}
