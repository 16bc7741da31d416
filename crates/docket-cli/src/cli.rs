use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docket",
    about = "Docket — key-addressed records on an ordered ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the ledger state file
    #[arg(long, global = true, default_value = "docket.json")]
    pub ledger: PathBuf,

    /// Fail on malformed stored records instead of reading them as empty
    #[arg(long, global = true)]
    pub strict_decode: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store a new record under a key
    Create(CreateArgs),
    /// Print a record's payload bytes
    Read(ReadArgs),
    /// List every stored key with its tag
    List(ListArgs),
    /// Show one record's key and tag without its payload
    Describe(DescribeArgs),
    /// Invoke an operation by contract function name
    Invoke(InvokeArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    pub key: String,
    pub tag: String,
    /// Inline payload; omit for an empty record
    pub payload: Option<String>,
    /// Read the payload from a file instead
    #[arg(long, conflicts_with = "payload")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReadArgs {
    pub key: String,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct DescribeArgs {
    pub key: String,
}

#[derive(Args)]
pub struct InvokeArgs {
    /// Contract function name (create/upload, read/download, list,
    /// describe/show/find)
    pub function: String,
    /// Positional string arguments for the function
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}
