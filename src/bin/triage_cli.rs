//! triage-cli: command-line access to the complaint triage backend
//!
//! Usage:
//!   triage-cli submit <text> [--limit N]             Submit a complaint and print the analysis
//!   triage-cli similar <id> [--limit N]              List similar complaints
//!   triage-cli edit <id> --reply <text> --reason <r> Replace the drafted reply
//!   triage-cli approve <id> [--notes <text>]         Approve the suggested reply
//!   triage-cli reject <id> [--notes <text>]          Reject the suggested reply
//!   triage-cli check <text>                          Check locally whether text can be submitted

use anyhow::{anyhow, bail, Context};
use complaint_triage_client::{
    open_complaint, ClientConfig, ComplaintApi, ComplaintDraft, TriageClient,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"triage-cli: complaint triage backend client

USAGE:
    triage-cli [--config <path>] <COMMAND> [OPTIONS]

COMMANDS:
    submit <text> [--limit N]              Submit a complaint, print analysis and similar complaints
    similar <id> [--limit N]               List complaints similar to <id>
    edit <id> --reply <text> --reason <r>  Replace the drafted customer reply
    approve <id> [--notes <text>]          Approve the suggested reply
    reject <id> [--notes <text>]           Reject the suggested reply
    check <text>                           Check locally whether <text> can be submitted
    version                                Show version information
    help                                   Show this help message

ENVIRONMENT:
    COMPLAINT_BACKEND_URL       Backend base URL (default http://localhost:8080)
    COMPLAINT_HTTP_TIMEOUT_MS   Per-attempt timeout in milliseconds
    COMPLAINT_HTTP_RETRIES      Attempts per request
    RUST_LOG                    Log filter (default "warn")"#
    );
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Positional arguments, i.e. everything that is neither a flag nor a flag's value.
fn positionals(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            out.push(arg.clone());
        }
    }
    out
}

fn complaint_id(args: &[String]) -> anyhow::Result<i64> {
    let raw = positionals(args)
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing complaint id"))?;
    raw.parse::<i64>()
        .with_context(|| format!("invalid complaint id '{raw}'"))
}

fn limit(args: &[String]) -> anyhow::Result<Option<u32>> {
    flag_value(args, "--limit")
        .map(|s| s.parse::<u32>().with_context(|| format!("invalid limit '{s}'")))
        .transpose()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config(path: Option<&str>) -> anyhow::Result<ClientConfig> {
    match path {
        Some(path) => ClientConfig::from_path(path)
            .with_context(|| format!("loading configuration from {path}")),
        None => Ok(ClientConfig::from_env()),
    }
}

async fn run(args: Vec<String>) -> anyhow::Result<()> {
    let config_path = flag_value(&args, "--config");

    // Drop the global --config flag before dispatching.
    let mut rest = args;
    if let Some(i) = rest.iter().position(|a| a == "--config") {
        let end = (i + 2).min(rest.len());
        rest.drain(i..end);
    }

    let Some(command) = rest.first().cloned() else {
        print_usage();
        bail!("no command given");
    };
    let rest = &rest[1..];

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("triage-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "check" => cmd_check(rest),
        other => {
            let config = load_config(config_path.as_deref())?;
            let client = TriageClient::new(config)?;
            dispatch(&client, other, rest).await
        }
    }
}

async fn dispatch(api: &dyn ComplaintApi, command: &str, args: &[String]) -> anyhow::Result<()> {
    match command {
        "submit" => {
            let text = positionals(args).join(" ");
            let workspace = open_complaint(api, &text, limit(args)?).await?;
            print_json(&workspace)
        }
        "similar" => {
            let id = complaint_id(args)?;
            let similar = api.find_similar_complaints(id, limit(args)?).await;
            print_json(&similar)
        }
        "edit" => {
            let id = complaint_id(args)?;
            let reply = flag_value(args, "--reply").ok_or_else(|| anyhow!("missing --reply"))?;
            let reason = flag_value(args, "--reason").ok_or_else(|| anyhow!("missing --reason"))?;
            let edited = api.edit_complaint_response(id, &reply, &reason).await?;
            print_json(&edited)
        }
        "approve" => {
            let id = complaint_id(args)?;
            let notes = flag_value(args, "--notes");
            api.approve_complaint(id, notes.as_deref()).await?;
            println!("approved {id}");
            Ok(())
        }
        "reject" => {
            let id = complaint_id(args)?;
            let notes = flag_value(args, "--notes");
            api.reject_complaint(id, notes.as_deref()).await?;
            println!("rejected {id}");
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}

fn cmd_check(args: &[String]) -> anyhow::Result<()> {
    let draft = ComplaintDraft::new(positionals(args).join(" "));
    if draft.is_submittable() {
        println!("ok ({} characters)", draft.normalized_len());
        Ok(())
    } else {
        bail!("{} more characters required", draft.remaining())
    }
}
