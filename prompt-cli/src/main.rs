// Command-line interface for promptsync
//
// promptsync keeps one directory of markdown prompts and writes them out in the prompt-file
// formats of several AI coding assistants. The conversion itself lives in prompt-babel; this
// binary handles arguments, configuration, logging, the interactive mode and reporting.
//
// Usage:
//  promptsync [<source>] --to <targets> [-o <dir>]        - Sync a prompt directory (default)
//  promptsync sync [<source>] --to <targets> [-o <dir>]   - Same as above (explicit)
//  promptsync sync --interactive                          - Ask for source, targets and output
//  promptsync convert <file> --to <target> [-o <file>]    - Convert a single prompt
//  promptsync --list-targets                              - List available targets
//
// Targets are given as a comma-separated list of names or menu numbers, e.g. "gemini,cursor",
// "1,3" or "all". Values not given on the command line come from promptsync.toml.

mod interactive;
mod report;

use clap::{Arg, ArgAction, Command, ValueHint};
use interactive::Prompter;
use prompt_babel::selection::ALL_TARGETS_INDEX;
use prompt_babel::sync::discover_sources;
use prompt_babel::{convert, parse_selection, FormatError, SyncPlan, Target};
use prompt_config::{LoadError, Loader, PromptConfig, PROJECT_CONFIG_FILE};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["sync", "convert", "help"];

fn build_cli() -> Command {
    Command::new("promptsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sync a directory of markdown prompts into AI assistant formats")
        .long_about(
            "promptsync converts markdown prompt documents into the prompt-file formats of\n\
            several AI coding assistants.\n\n\
            Targets:\n  \
            1. claude-code     Claude Code commands (.md)\n  \
            2. gemini          Gemini CLI commands (.toml)\n  \
            3. github-copilot  GitHub Copilot prompt files (.prompt.md)\n  \
            4. cursor          Cursor commands (.md)\n  \
            5. all             Every target\n\n\
            Examples:\n  \
            promptsync prompts --to all                 # Sync ./prompts for every target\n  \
            promptsync sync --to 1,3 -o dist            # Claude Code and Copilot into ./dist\n  \
            promptsync sync --interactive               # Answer questions instead of flags\n  \
            promptsync convert review.md --to gemini    # Print one converted prompt",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .value_name("PATH")
                .help("Path to a promptsync.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (-v for each converted file, -vv for debug output)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("sync")
                .about("Convert every prompt under a directory (default command)")
                .long_about(
                    "Convert every .md prompt under the source directory for each selected\n\
                    target. Each target writes into its own subdirectory of the output\n\
                    directory, mirroring the source layout.\n\n\
                    A file that cannot be read or written is reported and skipped; the\n\
                    other files are still converted.",
                )
                .arg(
                    Arg::new("source")
                        .help("Source prompts directory (defaults to sync.source from config)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .value_name("TARGETS")
                        .help("Targets: names or numbers, comma-separated, or 'all'")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .help("Base output directory (defaults to sync.output from config)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would be written without writing anything")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("interactive")
                        .long("interactive")
                        .short('i')
                        .help("Ask for source, targets and output directory")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a single prompt document")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Target format name")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(target_names()))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn target_names() -> Vec<&'static str> {
    Target::ALL.iter().map(|t| t.name()).collect()
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let matches = match build_cli().try_get_matches_from(inject_default_subcommand(&args)) {
        Ok(m) => m,
        Err(e) => e.exit(),
    };

    if matches.get_flag("list-targets") {
        print_targets();
        return ExitCode::SUCCESS;
    }

    let overrides = match matches.subcommand() {
        Some(("sync", sub_matches)) => SyncOverrides {
            source: sub_matches.get_one::<String>("source").cloned(),
            selection: sub_matches.get_one::<String>("to").cloned(),
            output: sub_matches.get_one::<String>("output").cloned(),
        },
        _ => SyncOverrides::default(),
    };
    let explicit_config = matches.get_one::<String>("config").map(|s| s.as_str());
    let config = match load_cli_config(explicit_config, &overrides) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.logging.level, matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("sync", sub_matches)) => {
            let dry_run = sub_matches.get_flag("dry-run");
            let interactive = sub_matches.get_flag("interactive");
            handle_sync_command(&config, dry_run, interactive)
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output)
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            ExitCode::FAILURE
        }
    }
}

/// Insert `sync` when the first argument is neither a flag nor a subcommand.
fn inject_default_subcommand(args: &[String]) -> Vec<String> {
    match args.get(1) {
        Some(first) if !first.starts_with('-') && !SUBCOMMANDS.contains(&first.as_str()) => {
            let mut injected = vec![args[0].clone(), "sync".to_string()];
            injected.extend_from_slice(&args[1..]);
            injected
        }
        _ => args.to_vec(),
    }
}

/// Sync values given on the command line. Each one overrides its `sync.*` config key.
#[derive(Debug, Default)]
struct SyncOverrides {
    source: Option<String>,
    selection: Option<String>,
    output: Option<String>,
}

fn load_cli_config(
    explicit_path: Option<&str>,
    overrides: &SyncOverrides,
) -> Result<PromptConfig, LoadError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = explicit_path {
        loader = loader.with_file(path);
    }
    if let Some(source) = &overrides.source {
        loader = loader.set_override("sync.source", source.as_str())?;
    }
    if let Some(output) = &overrides.output {
        loader = loader.set_override("sync.output", output.as_str())?;
    }
    if let Some(selection) = &overrides.selection {
        loader = loader.set_override("sync.targets", selection_entries(selection))?;
    }
    loader.build()
}

/// Split `--to` into the entries stored under `sync.targets`.
fn selection_entries(selection: &str) -> Vec<String> {
    selection
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn init_logging(level: &str, verbosity: u8) {
    let fallback = match verbosity {
        0 => level,
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

/// Fully resolved sync request.
#[derive(Debug, PartialEq)]
struct ResolvedSync {
    source: PathBuf,
    targets: Vec<Target>,
    output: PathBuf,
}

fn handle_sync_command(config: &PromptConfig, dry_run: bool, interactive: bool) -> ExitCode {
    let resolved = if interactive {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        resolve_interactive(&mut prompter, config)
    } else {
        resolve_from_config(config)
    };

    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    debug!(
        source = %resolved.source.display(),
        output = %resolved.output.display(),
        targets = ?resolved.targets,
        dry_run,
        "starting sync"
    );
    let mut plan = SyncPlan::new(&resolved.source).with_dry_run(dry_run);
    for target in &resolved.targets {
        plan = plan.with_target(*target, config.targets.dir_for(&resolved.output, *target));
    }

    let report = match plan.run() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut stdout = io::stdout().lock();
    if let Err(err) = report::write_summary(
        &mut stdout,
        &report,
        &resolved.targets,
        &resolved.output,
        &cwd,
        dry_run,
    ) {
        eprintln!("Error writing summary: {err}");
        return ExitCode::FAILURE;
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        eprintln!("Some files could not be converted:");
        if let Err(err) = report::write_failures(&mut io::stderr(), &report) {
            eprintln!("Error writing failures: {err}");
        }
        ExitCode::FAILURE
    }
}

fn resolve_from_config(config: &PromptConfig) -> Result<ResolvedSync, String> {
    let targets = match config.sync.default_targets() {
        Some(result) => result.map_err(|e| e.to_string())?,
        None => {
            return Err(
                "No targets selected. Use --to <targets>, --interactive, or set sync.targets"
                    .to_string(),
            )
        }
    };

    Ok(ResolvedSync {
        source: config.sync.source.clone(),
        targets,
        output: config.sync.output.clone(),
    })
}

/// Ask for source, targets and output; configured values are the defaults.
fn resolve_interactive<R: io::BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &PromptConfig,
) -> Result<ResolvedSync, String> {
    let source = prompter
        .ask_source(&config.sync.source.to_string_lossy())
        .map_err(|e| e.to_string())?;

    // Fail before asking anything else if there is nothing to convert.
    discover_sources(&source).map_err(|e| e.to_string())?;

    let answer = prompter.ask_selection().map_err(|e| e.to_string())?;
    let targets = if answer.is_empty() {
        config
            .sync
            .default_targets()
            .unwrap_or(Err(FormatError::EmptySelection))
    } else {
        parse_selection(&answer)
    }
    .map_err(|e| e.to_string())?;

    let output = prompter
        .ask_output(&config.sync.output.to_string_lossy())
        .map_err(|e| e.to_string())?;

    Ok(ResolvedSync {
        source,
        targets,
        output,
    })
}

fn handle_convert_command(input: &str, to: &str, output: Option<&str>) -> ExitCode {
    let target: Target = match to.parse() {
        Ok(target) => target,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file '{input}': {e}");
            return ExitCode::FAILURE;
        }
    };

    let converted = convert(&source, target);
    match output {
        Some(path) => {
            if let Err(e) = write_file(Path::new(path), &converted) {
                eprintln!("Error writing file '{path}': {e}");
                return ExitCode::FAILURE;
            }
        }
        None => print!("{converted}"),
    }
    ExitCode::SUCCESS
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

fn print_targets() {
    println!("Available targets:\n");
    for target in Target::ALL {
        println!(
            "  {}. {:<16}{:<16}{:<12}{}",
            target.menu_index(),
            target.name(),
            target.display_name(),
            target.extension(),
            target.default_subdir()
        );
    }
    println!("  {ALL_TARGETS_INDEX}. all");
}
