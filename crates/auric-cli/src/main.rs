mod cli;
mod commands;

use clap::Parser as _;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Command::Parse(args) => commands::parse::run(&args),
        Command::Dump(args) => commands::dump::run(&args),
    };
    std::process::exit(code);
}
