use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::run_calculation;
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::Employee;
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "payroll-engine", version, about = "Monthly PAYE payroll calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API
    Serve(ServeCommand),
    /// Calculate one month and print the result as JSON
    Calculate(CalculateCommand),
}

#[derive(clap::Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value_t = String::from("0.0.0.0"))]
    host: String,
    #[arg(long, default_value_t = 8080)]
    port: u16,
    #[arg(long, default_value = "./config/uk_paye")]
    config_dir: PathBuf,
}

#[derive(clap::Args, Debug)]
struct CalculateCommand {
    #[arg(long, default_value = "./config/uk_paye")]
    config_dir: PathBuf,
    #[arg(long, default_value_t = String::from("cli"))]
    employee_id: String,
    #[arg(long)]
    hourly_rate: Decimal,
    #[arg(long)]
    overtime_rate: Decimal,
    #[arg(long)]
    tax_code: Option<String>,
    /// Any date in the month being paid (YYYY-MM-DD)
    #[arg(long)]
    month: NaiveDate,
    /// Weekly hour totals, comma separated or repeated
    #[arg(long, value_delimiter = ',')]
    hours: Vec<Decimal>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(opts) => serve(opts).await?,
        Commands::Calculate(opts) => calculate(opts)?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn serve(opts: ServeCommand) -> anyhow::Result<()> {
    let config = ConfigLoader::load(&opts.config_dir)
        .with_context(|| format!("failed to load config from {}", opts.config_dir.display()))?;
    tracing::info!(
        scheme = %config.scheme().code,
        cap_hours = %config.standard_monthly_cap(),
        tax_tables = config.config().tax_tables().len(),
        "configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let addr = format!("{}:{}", opts.host, opts.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "payroll-engine listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
    }
    tracing::info!("shutdown signal received");
}

fn calculate(opts: CalculateCommand) -> anyhow::Result<()> {
    let config = ConfigLoader::load(&opts.config_dir)
        .with_context(|| format!("failed to load config from {}", opts.config_dir.display()))?;

    let employee = Employee {
        id: opts.employee_id,
        hourly_rate: opts.hourly_rate,
        overtime_rate: opts.overtime_rate,
        tax_code: opts.tax_code,
    };

    let result = run_calculation(opts.hours, opts.month, &employee, config.config())
        .context("calculation failed")?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
