//! Tabulet CLI - interactive named-table spreadsheet shell

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

mod command;
mod executor;
mod parser;
mod render;

use command::Command;
use executor::Executor;

#[derive(Parser)]
#[command(name = "tabulet")]
#[command(
    author,
    version,
    about = "Interactive spreadsheet with named rows, columns and formulas"
)]
struct Cli {
    /// Run commands from a script file instead of the interactive prompt
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.script {
        Some(path) => run_script(&path),
        None => repl(),
    }
}

fn repl() -> Result<()> {
    let mut executor = Executor::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("tabulet - type 'help' for commands, 'exit' to quit");
    loop {
        write!(stdout, "> ").context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            // EOF
            break;
        }

        match parser::parse(&line) {
            Some(Command::Exit) => break,
            Some(command) => println!("{}", executor.execute(command)),
            None => {
                if !line.trim().is_empty() {
                    println!("Unrecognized command. Type 'help' for a list of commands.");
                }
            }
        }
    }
    Ok(())
}

fn run_script(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script '{}'", path.display()))?;

    let mut executor = Executor::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser::parse(line) {
            Some(Command::Exit) => break,
            Some(command) => println!("{}", executor.execute(command)),
            None => eprintln!("Line {}: unrecognized command: {line}", number + 1),
        }
    }
    Ok(())
}
