use std::path::PathBuf;

use anyhow::Context;
use hickory_resolver::TokioAsyncResolver;

use crate::cli::{Cli, Commands};
use webrecon::headers::audit;
use webrecon::headers::report::ScanReport;
use webrecon::scope::filter;
use webrecon::scope::rdap::RdapClient;
use webrecon::{http_client, output, targets};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. Keep external crates
    // (reqwest/hyper) at INFO to avoid flooding the CLI.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!("webrecon={crate_level},reqwest=info,hyper=info,h2=info");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Headers {
            targets,
            input_file,
            timeout,
            strict,
        } => run_headers(targets, input_file, timeout, strict).await,
        Commands::Scope {
            targets,
            input_file,
            rdap_url,
            timeout,
        } => run_scope(targets, input_file, rdap_url, timeout).await,
    }
}

async fn run_headers(
    raw: Vec<String>,
    input_file: Option<PathBuf>,
    timeout: u64,
    strict: bool,
) -> anyhow::Result<()> {
    let list = targets::resolve(&raw, input_file.as_deref())?;
    let client = http_client::build(timeout)?;
    let resolver =
        TokioAsyncResolver::tokio_from_system_conf().context("failed to initialize DNS resolver")?;

    tracing::info!(targets = list.len(), strict, "starting header audit");

    // One target at a time; a failing target is logged and skipped, never
    // allowed to abort the batch.
    let mut report = ScanReport::default();
    for target in &list {
        match audit::audit_target(&client, &resolver, target, strict).await {
            Ok(findings) => report.extend(findings),
            Err(e) => output::log_err(&format!("{target}: {e:#}")),
        }
    }
    report.print();
    Ok(())
}

async fn run_scope(
    raw: Vec<String>,
    input_file: Option<PathBuf>,
    rdap_url: String,
    timeout: u64,
) -> anyhow::Result<()> {
    let list = targets::resolve(&raw, input_file.as_deref())?;
    let client = http_client::build(timeout)?;
    let rdap = RdapClient::new(client, &rdap_url)?;

    let accepted = filter::parse_targets(&list);
    tracing::info!(
        candidates = list.len(),
        accepted = accepted.len(),
        "starting scope lookup"
    );

    for target in &accepted {
        let key = target.to_string();
        match rdap.owner(&key).await {
            Ok(owner) => output::log_out(&format!("Target: {key} belongs to: {owner}")),
            Err(e) => output::log_err(&format!("{key}: {e}")),
        }
    }
    Ok(())
}
