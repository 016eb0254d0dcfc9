use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kardscript::extract::extract_call_blocks_with;
use kardscript::style::CardStyle;
use kardscript::{Compiler, CompilerConfig, EscapeMode, ExtractMode, KardError, PositionedCard};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Kard(#[from] KardError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "kard", about = "Compile KardScript flashcard decks")]
struct Cli {
    /// Block extraction strategy; overrides KARD_EXTRACT_MODE.
    #[arg(long, global = true, value_enum)]
    mode: Option<ModeArg>,

    /// Escape handling in quoted strings; overrides KARD_ESCAPES.
    #[arg(long, global = true, value_enum)]
    escapes: Option<EscapeArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a deck to JSON.
    Compile(CompileArgs),
    /// Report blocks that were dropped for missing `front` or `back`.
    Check(InputArgs),
    /// Print one line per positioned card.
    List(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(default_value = "-", help = "Input .kard file, or - for stdin")]
    input: String,
}

#[derive(Args, Debug)]
struct CompileArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Emit cards without board coordinates.
    #[arg(long, default_value_t = false)]
    no_layout: bool,

    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Compat,
    Balanced,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EscapeArg {
    Decode,
    Raw,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn error_line(err: &CliError) -> String {
    format!("error: {err}")
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let mut config = CompilerConfig::from_env()?;
    if let Some(mode) = cli.mode {
        config.extract_mode = match mode {
            ModeArg::Compat => ExtractMode::Compat,
            ModeArg::Balanced => ExtractMode::Balanced,
        };
    }
    if let Some(escapes) = cli.escapes {
        config.escapes = match escapes {
            EscapeArg::Decode => EscapeMode::Decode,
            EscapeArg::Raw => EscapeMode::Raw,
        };
    }
    let compiler = Compiler::new(config);

    match cli.command {
        Command::Compile(args) => run_compile(&compiler, &args),
        Command::Check(args) => run_check(&compiler, &args),
        Command::List(args) => run_list(&compiler, &args),
    }
}

fn run_compile(compiler: &Compiler, args: &CompileArgs) -> Result<ExitCode, CliError> {
    let script = read_script(&args.input.input)?;
    let json = if args.no_layout {
        to_json(&compiler.cards(&script), args.pretty)?
    } else {
        to_json(&compiler.board(&script), args.pretty)?
    };
    write_line(&json)?;
    Ok(ExitCode::SUCCESS)
}

fn run_check(compiler: &Compiler, args: &InputArgs) -> Result<ExitCode, CliError> {
    let script = read_script(&args.input)?;
    let report = CheckReport {
        blocks: extract_call_blocks_with(&script, compiler.config().extract_mode).len(),
        cards: compiler.cards(&script).len(),
    };
    tracing::info!(blocks = report.blocks, cards = report.cards, "checked script");
    write_line(&report.to_string())?;
    Ok(if report.dropped() > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn run_list(compiler: &Compiler, args: &InputArgs) -> Result<ExitCode, CliError> {
    let script = read_script(&args.input)?;
    for placed in compiler.board(&script) {
        write_line(&list_line(&placed))?;
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CheckReport {
    blocks: usize,
    cards: usize,
}

impl CheckReport {
    fn dropped(self) -> usize {
        self.blocks.saturating_sub(self.cards)
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "blocks: {}, cards: {}, dropped: {}", self.blocks, self.cards, self.dropped())
    }
}

fn list_line(placed: &PositionedCard) -> String {
    let style = CardStyle::resolve(&placed.card);
    let front = placed.card.front().to_string();
    let title = front.lines().next().unwrap_or_default();
    format!(
        "#{index:<3} {placement:?} ({x}, {y}) {bg} {title}",
        index = placed.index,
        placement = placed.placement,
        x = placed.x,
        y = placed.y,
        bg = style.bg_color,
    )
}

fn read_script(input: &str) -> Result<String, CliError> {
    let bytes = if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(CliError::Stdin)?;
        buf
    } else {
        let path = Path::new(input);
        std::fs::read(path).map_err(|source| KardError::Read { path: path.to_path_buf(), source })?
    };
    let script = String::from_utf8(bytes).map_err(|e| KardError::Encoding(e.utf8_error()))?;
    Ok(script)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(rendered)
}

fn write_line(text: &str) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    writeln!(out, "{text}").map_err(CliError::Output)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
