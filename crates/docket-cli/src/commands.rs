use std::fs;
use std::io::Write;

use colored::Colorize;
use docket_ledger::FileStateStore;
use docket_store::{DecodePolicy, RecordStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let state = FileStateStore::open(&cli.ledger)?;
    let policy = if cli.strict_decode {
        DecodePolicy::Strict
    } else {
        DecodePolicy::Lenient
    };
    let store = RecordStore::with_policy(state, policy);

    match cli.command {
        Command::Create(args) => cmd_create(&store, args),
        Command::Read(args) => cmd_read(&store, args),
        Command::List(_) => cmd_list(&store, &cli.format),
        Command::Describe(args) => cmd_describe(&store, args, &cli.format),
        Command::Invoke(args) => cmd_invoke(&store, args),
    }
}

fn cmd_create(store: &RecordStore<FileStateStore>, args: CreateArgs) -> anyhow::Result<()> {
    let payload = match args.file {
        Some(path) => fs::read(&path)?,
        None => args.payload.unwrap_or_default().into_bytes(),
    };
    store.create(&args.key, &args.tag, &payload)?;
    println!(
        "{} Stored {} ({} bytes, tag {})",
        "✓".green().bold(),
        args.key.bold(),
        payload.len(),
        args.tag.yellow(),
    );
    Ok(())
}

fn cmd_read(store: &RecordStore<FileStateStore>, args: ReadArgs) -> anyhow::Result<()> {
    let payload = store.read(&args.key)?;
    std::io::stdout().write_all(&payload)?;
    Ok(())
}

fn cmd_list(store: &RecordStore<FileStateStore>, format: &OutputFormat) -> anyhow::Result<()> {
    let results = store.list_keys()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No records.");
            }
            for result in &results {
                println!("{}  {}", result.key.bold(), result.tag.yellow());
            }
        }
    }
    Ok(())
}

fn cmd_describe(
    store: &RecordStore<FileStateStore>,
    args: DescribeArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let result = store.describe(&args.key)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => println!("{}  {}", result.key.bold(), result.tag.yellow()),
    }
    Ok(())
}

fn cmd_invoke(store: &RecordStore<FileStateStore>, args: InvokeArgs) -> anyhow::Result<()> {
    let payload = store.invoke(&args.function, &args.args)?;
    std::io::stdout().write_all(&payload)?;
    Ok(())
}
