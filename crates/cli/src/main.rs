mod config;
mod error;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use planner::{PlannerSession, ToolCall, ToolHost, ToolOutcome};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::Result;

const CONFIG_FILE: &str = "planner.toml";
const LOG_ENV: &str = "TRIP_PLANNER_LOG";
const DEFAULT_LOG: &str = "info";

#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(about = "Budget trip planning tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults apply when it is missing)
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tool specs as JSON
    Tools,
    /// Run a single tool and print its outcome as JSON
    Call {
        /// Tool name
        tool: String,
        /// Tool input as a JSON object
        input: Option<String>,
    },
    /// Start an interactive session
    Repl,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    init_tracing(config.log.as_deref());

    let session = PlannerSession::new(config.catalog()?).with_renderer(config.renderer());
    tracing::debug!(session = %session.id, "session started");

    match cli.command {
        Some(Commands::Tools) => cmd_tools(&session),
        Some(Commands::Call { tool, input }) => cmd_call(&session, tool, input.as_deref()).await,
        Some(Commands::Repl) | None => cmd_repl(&session).await,
    }
}

/// Log to stderr. `TRIP_PLANNER_LOG` wins over the config file.
fn init_tracing(configured: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_tools(session: &PlannerSession) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(session.specs())?);
    Ok(())
}

async fn cmd_call(session: &PlannerSession, tool: String, input: Option<&str>) -> Result<()> {
    let call = ToolCall::new("cli-1", tool, parse_input(input)?);
    let result = session.execute(&call).await;
    println!("{}", serde_json::to_string_pretty(&result.outcome)?);
    Ok(())
}

async fn cmd_repl(session: &PlannerSession) -> Result<()> {
    println!("trip-planner v{}", env!("CARGO_PKG_VERSION"));
    println!("Session ID: {}", session.id);
    println!("Enter '<tool> [json]', 'tools' to list tools, or 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut calls = 0u64;

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        if input == "tools" {
            for spec in session.specs() {
                println!("  {:<34} {}", spec.name, spec.description);
            }
            println!();
            continue;
        }

        let (tool, args) = split_line(input);
        let args = match parse_input(args) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("Error: {e}\n");
                continue;
            }
        };

        calls += 1;
        let call = ToolCall::new(format!("repl-{calls}"), tool, args);
        match session.execute(&call).await.outcome {
            ToolOutcome::Success(report) => println!("\n{}\n", report.text),
            ToolOutcome::Error(err) => eprintln!("\nError: {err}\n"),
        }
    }

    println!("\nSession ended.");
    Ok(())
}

/// Split a REPL line into the tool name and its optional JSON input.
fn split_line(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((tool, rest)) => (tool, Some(rest.trim())),
        None => (line, None),
    }
}

fn parse_input(input: Option<&str>) -> Result<Value> {
    match input.map(str::trim) {
        None | Some("") => Ok(Value::Null),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}
