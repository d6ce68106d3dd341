use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "auric", bin_name = "auric")]
#[command(about = "Runtime engine for GOLD-format grammar tables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse an input against a compiled grammar table file
    #[command(after_help = r#"EXAMPLES:
  auric parse expr.egt input.txt
  auric parse expr.egt --text "a == 3 + b"
  auric parse expr.egt input.txt --json --pretty
  auric parse expr.egt input.txt --trace"#)]
    Parse(ParseArgs),

    /// Inspect a compiled grammar table file
    #[command(after_help = r#"EXAMPLES:
  auric dump expr.egt
  auric dump expr.egt --json"#)]
    Dump(DumpArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Grammar table file (.cgt or .egt)
    pub table: PathBuf,

    /// File to parse (omit when using --text)
    pub input: Option<PathBuf>,

    /// Parse this text instead of a file
    #[arg(long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Emit the parse tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,

    /// Print token/shift/reduce events to stderr
    #[arg(long)]
    pub trace: bool,
}

#[derive(Args)]
pub struct DumpArgs {
    /// Grammar table file (.cgt or .egt)
    pub table: PathBuf,

    /// Emit the whole grammar as JSON
    #[arg(long)]
    pub json: bool,
}
