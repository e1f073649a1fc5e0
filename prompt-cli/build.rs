use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the target names from prompt-babel's Target enum
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_TARGETS: &[&str] = &["claude-code", "gemini", "github-copilot", "cursor"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("promptsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sync a directory of markdown prompts into AI assistant formats")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-targets")
                .long("list-targets")
                .help("List available targets")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a promptsync.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("sync")
                .about("Convert every prompt under a directory")
                .arg(
                    Arg::new("source")
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(Arg::new("to").long("to").short('t'))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::DirPath),
                )
                .arg(Arg::new("dry-run").long("dry-run").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("interactive")
                        .long("interactive")
                        .short('i')
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a single prompt document")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_TARGETS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "promptsync", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "promptsync", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "promptsync", &outdir)?;

    Ok(())
}
