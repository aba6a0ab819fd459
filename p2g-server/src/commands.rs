use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::time::Duration;

use p2g_types::models::{
    AppConfig, ErrorResponse, SyncPostRequest, SyncPostResponse, SyncStatus, SyncStatusResponse,
};

use crate::cli::ConfigCommands;

pub fn handle_config_command(cmd: ConfigCommands, config: &AppConfig) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => show_config(config, json),
    }
}

fn show_config(config: &AppConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{}", "Server:".cyan().bold());
    println!("  Bind: {}:{}", config.server.bind_address, config.server.port);
    println!("{}", "Sync Worker:".cyan().bold());
    println!("  URL: {}", config.worker.base_url);
    println!("  Timeout: {}s", config.worker.timeout_secs);
    println!("{}", "Automatic Sync:".cyan().bold());
    println!("  Enabled: {}", config.auto_sync.enabled);
    println!("  Interval: {}s", config.auto_sync.interval_secs);
    println!("  Workouts per run: {}", config.auto_sync.num_workouts);
    Ok(())
}

/// Base URL of the local daemon, mapping wildcard bind addresses to loopback.
fn daemon_url(config: &AppConfig) -> String {
    let host = match config.server.bind_address.as_str() {
        "0.0.0.0" => "127.0.0.1".to_string(),
        "::" => "[::1]".to_string(),
        addr if addr.contains(':') => format!("[{addr}]"),
        addr => addr.to_string(),
    };
    format!("http://{}:{}", host, config.server.port)
}

fn http_client(config: &AppConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.worker.timeout_secs.saturating_add(30)))
        .build()
        .context("failed to build HTTP client")
}

pub async fn handle_sync(config: &AppConfig, count: Option<i32>, ids: Vec<String>) -> Result<()> {
    let request =
        SyncPostRequest { num_workouts: count, workout_ids: (!ids.is_empty()).then_some(ids) };
    let url = format!("{}/api/sync", daemon_url(config));

    let resp = http_client(config)?
        .post(&url)
        .json(&request)
        .send()
        .await
        .with_context(|| format!("failed to reach P2G daemon at {url}"))?;
    let status = resp.status();

    if !status.is_success() {
        let error = resp
            .json::<ErrorResponse>()
            .await
            .unwrap_or_else(|_| ErrorResponse::new(status.to_string()));
        anyhow::bail!("{} ({})", error.message, status.as_u16());
    }

    let response: SyncPostResponse =
        resp.json().await.context("daemon returned an invalid sync response")?;
    print_sync_response(&response);
    Ok(())
}

fn stage_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("OK").fg(Color::Green)
    } else {
        Cell::new("Failed").fg(Color::Red)
    }
}

fn print_sync_response(response: &SyncPostResponse) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Stage", "Result"]);
    table.add_row(vec![Cell::new("Peloton download"), stage_cell(response.peloton_download_success)]);
    table.add_row(vec![Cell::new("Convert to FIT"), stage_cell(response.conver_to_fit_success)]);
    table.add_row(vec![Cell::new("Upload to Garmin"), stage_cell(response.upload_to_garmin_success)]);

    println!("{table}");

    if response.sync_success {
        println!("{} Sync completed", "✓".green());
    } else {
        println!("{} Sync finished with {} error(s)", "✗".red(), response.errors.len());
        for error in &response.errors {
            println!("  - {}", error.message.yellow());
        }
    }
}

pub async fn handle_status(config: &AppConfig) -> Result<()> {
    let url = format!("{}/api/sync", daemon_url(config));
    let status: SyncStatusResponse = http_client(config)?
        .get(&url)
        .send()
        .await
        .with_context(|| format!("failed to reach P2G daemon at {url}"))?
        .error_for_status()?
        .json()
        .await
        .context("daemon returned an invalid status response")?;

    let label = match status.sync_status {
        SyncStatus::NotRunning => "Idle".green(),
        SyncStatus::Running => "Running".cyan(),
        SyncStatus::Stopped => "Stopped".yellow(),
        SyncStatus::UnHealthy => "Unhealthy".red(),
    };
    let fmt_time = |t: Option<chrono::DateTime<chrono::Utc>>| {
        t.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    };

    println!("{}", "P2G Sync Status".cyan().bold());
    println!("  Automatic sync: {}", if status.sync_enabled { "enabled" } else { "disabled" });
    println!("  State: {}", label);
    println!("  Last sync: {}", fmt_time(status.last_sync_time));
    println!("  Last successful sync: {}", fmt_time(status.last_successful_sync_time));
    println!("  Next sync: {}", fmt_time(status.next_sync_time));
    Ok(())
}
