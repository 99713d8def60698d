//! Tablero CLI
//!
//! Command-line client for a running Tablero API:
//! - List and inspect indicators
//! - Export every series as CSV
//! - Check server status
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;

use tablero::api::dto::HealthResponse;
use tablero::config::generate_default_config;
use tablero::{EconomicIndicator, ErrorResponse, IndicatorId};

#[derive(Parser)]
#[command(name = "tablero")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Economic indicators from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:5000", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all indicators with their latest value
    List,

    /// Show one indicator and its series
    Show {
        /// Indicator id (e.g. inflacion)
        id: String,
    },

    /// Export every series as CSV (id,time,value)
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the known indicator ids and whether the server has data for them
    Ids,

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.api_url.trim_end_matches('/');

    match cli.command {
        Commands::List => {
            let indicators = fetch_all(&client, base).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&indicators)?);
            } else if indicators.is_empty() {
                println!("No indicators available.");
            } else {
                println!(
                    "{:<22} {:<36} {:>16} {:<12} {:>9}",
                    "ID", "Name", "Latest", "Unit", "Trend"
                );
                println!("{}", "-".repeat(99));
                for indicator in &indicators {
                    println!(
                        "{:<22} {:<36} {:>16.2} {:<12} {:>9}",
                        indicator.id,
                        truncate(&indicator.name, 36),
                        indicator.latest_value(),
                        indicator.unit.as_deref().unwrap_or(""),
                        format_trend(indicator.trend.unwrap_or(0.0)),
                    );
                }
                println!();
                println!("{} indicators", indicators.len());
            }
        }

        Commands::Show { id } => {
            let url = indicator_url(base, &id)?;
            let response = client.get(url).send().await.with_context(|| {
                format!("Cannot connect to Tablero API at {}", base)
            })?;

            if !response.status().is_success() {
                bail!(read_error(response).await);
            }

            let indicator: EconomicIndicator = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&indicator)?);
            } else {
                let unit = indicator.unit.as_deref().unwrap_or("");
                println!("{} ({})", indicator.name, indicator.id);
                println!();
                println!("{}", indicator.description);
                println!();
                println!(
                    "Latest: {:.2} {}   Trend: {}",
                    indicator.latest_value(),
                    unit,
                    format_trend(indicator.trend.unwrap_or(0.0))
                );
                println!();
                println!("{:<12} {:>16}", "Time", "Value");
                for point in &indicator.data {
                    println!("{:<12} {:>16.2}", point.time, point.value);
                }
            }
        }

        Commands::Export { output } => {
            let indicators = fetch_all(&client, base).await?;

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("Cannot create {:?}", path))?;
                    let rows = write_csv(file, &indicators)?;
                    println!("Exported {} rows to {:?}", rows, path);
                }
                None => {
                    write_csv(std::io::stdout(), &indicators)?;
                }
            }
        }

        Commands::Ids => {
            let indicators = fetch_all(&client, base).await?;
            let served: HashSet<&str> = indicators.iter().map(|i| i.id.as_str()).collect();

            for id in IndicatorId::all() {
                let marker = if served.contains(id.as_str()) {
                    ""
                } else {
                    "  (no data)"
                };
                println!("{}{}", id, marker);
            }
        }

        Commands::Status => {
            let url = format!("{}/health", base);
            match client.get(&url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let health: HealthResponse = resp.json().await?;
                    println!("Tablero v{}", health.version);
                    println!();
                    println!("Status: {}", health.status);
                    if let Some(count) = health.indicators {
                        println!("Indicators: {}", count);
                    }
                    println!("Started: {}", health.started_at.format("%Y-%m-%d %H:%M:%S UTC"));
                    println!("Uptime: {}", format_duration(health.uptime_seconds));
                }
                Ok(resp) => {
                    bail!("API returned error: {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot connect to Tablero API at {}", base);
                    eprintln!();
                    eprintln!("Make sure the Tablero API server is running:");
                    eprintln!("  cargo run --bin tablero-api");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn fetch_all(client: &reqwest::Client, base: &str) -> anyhow::Result<Vec<EconomicIndicator>> {
    let url = format!("{}/api/indicators", base);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Cannot connect to Tablero API at {}", base))?;

    if !response.status().is_success() {
        bail!(read_error(response).await);
    }

    Ok(response.json().await?)
}

/// `<base>/api/indicators/<id>` with the id as one percent-encoded segment
fn indicator_url(base: &str, id: &str) -> anyhow::Result<reqwest::Url> {
    let mut url =
        reqwest::Url::parse(base).with_context(|| format!("Invalid API URL: {}", base))?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("Invalid API URL: {}", base))?
        .pop_if_empty()
        .extend(["api", "indicators", id]);
    Ok(url)
}

/// Server error message, falling back to the status line
async fn read_error(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed ({})", status),
    }
}

/// Write `id,time,value` rows; returns the number of data rows
fn write_csv<W: std::io::Write>(
    writer: W,
    indicators: &[EconomicIndicator],
) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "time", "value"])?;

    let mut rows = 0;
    for indicator in indicators {
        for point in &indicator.data {
            wtr.write_record([
                indicator.id.as_str(),
                point.time.as_str(),
                point.value.to_string().as_str(),
            ])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

fn format_trend(trend: f64) -> String {
    if trend >= 0.0 {
        format!("+{:.2}%", trend.abs())
    } else {
        format!("{:.2}%", trend)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

fn format_duration(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let mins = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, mins)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
