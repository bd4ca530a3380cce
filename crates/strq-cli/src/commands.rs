use anyhow::Context;
use colored::Colorize;

use strq_analyze::{derive_properties, normalize};
use strq_server::{ServerConfig, StrqServer};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Analyze(args) => cmd_analyze(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env()
        .context("server configuration failed (is GEMINI_API_KEY set?)")?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }
    println!(
        "{} StrQ server on {}",
        "▶".green().bold(),
        config.bind_addr.to_string().bold()
    );
    StrqServer::new(config).serve().await?;
    Ok(())
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let value = normalize(&args.text);
    let props = derive_properties(&value);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&props)?);
        return Ok(());
    }

    println!("{}  {}", "value:".bold(), value);
    println!("  length:            {}", props.length.to_string().cyan());
    println!(
        "  palindrome:        {}",
        if props.is_palindrome {
            "yes".green().to_string()
        } else {
            "no".red().to_string()
        }
    );
    println!("  unique characters: {}", props.unique_characters.to_string().cyan());
    println!("  word count:        {}", props.word_count.to_string().cyan());
    println!("  sha256:            {}", props.sha256_hash.dimmed());
    Ok(())
}
