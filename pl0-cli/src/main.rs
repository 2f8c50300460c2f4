//! PL/0 CLI - Command line interface
//!
//! `pl0 lex` writes the token file, `pl0 parse` recognizes a token file,
//! `pl0 check` runs both phases on a source file. The first error halts
//! the run with exit code 1.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::load_config;
use crate::logging::LogFormat;
use crate::platform::{print_error_with_source, print_source_context};
use pl0_api::{
    check_source, check_token_text, export_tokens, tokenize, CheckOutput, LogLevel, Pl0Error,
    RunConfig,
};
use pl0_core::Token;

#[derive(Parser)]
#[command(
    name = "pl0",
    about = "PL/0 front end - lexical and syntax analysis",
    version
)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: silent (off), error, warn, info, debug, trace
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lex a source file into a (kind,lexeme) token file
    Lex {
        /// PL/0 source file
        source: PathBuf,
        /// Write the token file here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Print tokens as JSON with positions
        #[arg(long)]
        json: bool,
    },
    /// Recognize a token file
    Parse {
        /// Token file produced by `pl0 lex`
        tokens: PathBuf,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Lex and recognize a source file
    Check {
        /// PL/0 source file
        source: PathBuf,
        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(clap::Args)]
struct ReportArgs {
    /// Print the indented parse trace
    #[arg(long)]
    trace: bool,
    /// Write the parse trace as a Graphviz DOT file
    #[arg(long, value_name = "OUT")]
    dot: Option<PathBuf>,
    /// Print errors as JSON reports on stdout
    #[arg(long)]
    json_errors: bool,
}

/// `pl0 lex --json` 的输出记录
#[derive(serde::Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: usize,
    column: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind().name(),
            lexeme: token.lexeme(),
            line: token.position().line,
            column: token.position().column,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let file_config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => fail(&e),
    };

    let mut log_config = file_config.logging.clone();
    if let Some(level) = &cli.log_level {
        match LogLevel::parse(level) {
            Some(level) => log_config.level = level,
            None => fail(&format!("Unknown log level '{level}'")),
        }
    }
    logging::init(&log_config, cli.log_format);

    let run_config = RunConfig::from(&file_config);
    debug!(target: "pl0::cli", ?run_config, "Configuration loaded");

    let result = match cli.command {
        Command::Lex {
            source,
            output,
            json,
        } => handle_lex(&source, output.as_deref(), json, &run_config),
        Command::Parse { tokens, report } => handle_parse(&tokens, &report, run_config),
        Command::Check { source, report } => handle_check(&source, &report, run_config),
    };

    if let Err(e) = result {
        fail(&e);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Cannot read '{}': {}", path.display(), e))
}

fn write_file(path: &Path, content: &str) -> Result<(), String> {
    std::fs::write(path, content).map_err(|e| format!("Cannot write '{}': {}", path.display(), e))
}

fn handle_lex(
    path: &Path,
    output: Option<&Path>,
    json: bool,
    config: &RunConfig,
) -> Result<(), String> {
    let source = read_file(path)?;
    info!(target: "pl0::cli", file = %path.display(), "Lexing");

    let rendered = if json {
        let tokens = tokenize(&source, config).unwrap_or_else(|e| report_error(&e, &source, false));
        let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
        let mut text = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
        text.push('\n');
        text
    } else {
        export_tokens(&source, config).unwrap_or_else(|e| report_error(&e, &source, false))
    };

    match output {
        Some(out) => write_file(out, &rendered),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn handle_parse(path: &Path, args: &ReportArgs, config: RunConfig) -> Result<(), String> {
    let text = read_file(path)?;
    info!(target: "pl0::cli", file = %path.display(), "Parsing token file");

    let config = config.with_trace(args.trace || args.dot.is_some());
    let output = check_token_text(&text, &config)
        .unwrap_or_else(|e| report_error(&e, &text, args.json_errors));
    finish(output, args)
}

fn handle_check(path: &Path, args: &ReportArgs, config: RunConfig) -> Result<(), String> {
    let source = read_file(path)?;
    info!(target: "pl0::cli", file = %path.display(), "Checking source");

    let config = config.with_trace(args.trace || args.dot.is_some());
    let output = check_source(&source, &config)
        .unwrap_or_else(|e| report_error(&e, &source, args.json_errors));
    finish(output, args)
}

fn finish(output: CheckOutput, args: &ReportArgs) -> Result<(), String> {
    if let Some(trace) = &output.trace {
        if args.trace {
            print!("{}", trace.render());
        }
        if let Some(dot) = &args.dot {
            write_file(dot, &trace.to_dot())?;
            info!(target: "pl0::cli", file = %dot.display(), "DOT file written");
        }
    }
    println!("Syntax analysis succeeded ({} tokens)", output.token_count);
    Ok(())
}

/// 打印第一个错误并以退出码 1 结束
fn report_error(e: &Pl0Error, input: &str, json: bool) -> ! {
    if json {
        match e.to_report().to_json() {
            Ok(text) => println!("{text}"),
            Err(_) => eprintln!("{}", e.to_report()),
        }
    } else if let Pl0Error::TokenFile(inner) = e {
        eprintln!("error: {inner}");
        print_source_context(input, inner.line(), 1);
    } else {
        print_error_with_source(e, input);
    }
    process::exit(1);
}
