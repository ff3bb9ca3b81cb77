use clap::{Parser, Subcommand};

use polytape::config::AppConfig;
use polytape::models::Side;
use polytape::services::samples::{self, print_pretty_json, save_json_sample};
use polytape::{EventResolver, GammaClient, PolytapeClient};

/// PolyTape - resolve Polymarket events into assets and probe order book impact.
#[derive(Parser, Debug)]
#[command(name = "polytape")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve an event slug into its tradeable outcome assets
    Resolve {
        /// Event slug, e.g. democratic-presidential-nominee-2028
        slug: String,

        /// Also write the result into the sample directory
        #[arg(long)]
        save: bool,
    },

    /// Fetch an asset's order book and simulate a buy and a sell against it
    Probe {
        /// Asset (CLOB token) id
        asset_id: String,

        /// Buy size in USD
        #[arg(long, default_value_t = 100_000.0, value_parser = parse_amount)]
        buy_usd: f64,

        /// Sell size in shares
        #[arg(long, default_value_t = 100_000.0, value_parser = parse_amount)]
        sell_shares: f64,

        /// Skip writing responses to the sample directory
        #[arg(long)]
        no_save: bool,
    },
}

fn parse_amount(s: &str) -> Result<f64, String> {
    let amount: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(format!("expected a positive finite number, got {s}"));
    }
    Ok(amount)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let http = reqwest::Client::new();

    match cli.command {
        Commands::Resolve { slug, save } => {
            let resolver = EventResolver::new(GammaClient::new(http, &config.gamma_api_url));
            let outcomes = resolver.resolve_event(&slug).await?;

            println!("{}", serde_json::to_string_pretty(&outcomes)?);

            if save {
                let filename = samples::event_filename(&slug, chrono::Utc::now());
                save_json_sample(&config.sample_dir, &filename, &outcomes).await?;
            }
        }
        Commands::Probe {
            asset_id,
            buy_usd,
            sell_shares,
            no_save,
        } => {
            if !config.has_polytape_auth() {
                anyhow::bail!("POLYTAPE_API_KEY must be set to use the simulation service");
            }
            let client = PolytapeClient::new(
                http,
                &config.polytape_api_url,
                config.polytape_api_key.clone(),
            );
            probe(&client, &config, &asset_id, buy_usd, sell_shares, !no_save).await?;
        }
    }

    Ok(())
}

/// Orderbook fetch is fatal; each simulation failure is reported and the
/// next step still runs.
async fn probe(
    client: &PolytapeClient,
    config: &AppConfig,
    asset_id: &str,
    buy_usd: f64,
    sell_shares: f64,
    save: bool,
) -> anyhow::Result<()> {
    tracing::info!(asset_id, api = %config.polytape_api_url, "Probing asset");

    let book = client.get_orderbook(asset_id).await.map_err(|e| {
        tracing::error!(error = %e, api = %config.polytape_api_url, "Orderbook fetch failed");
        e
    })?;
    let ts = book.found_ts().clone();

    if save {
        save_json_sample(&config.sample_dir, &samples::orderbook_filename(asset_id), book.raw())
            .await?;
    }
    print_pretty_json("Orderbook Snapshot (Top 5)", book.raw());
    tracing::info!(found_ts = %ts, "Found valid historical timestamp");

    for (side, amount) in [(Side::Buy, buy_usd), (Side::Sell, sell_shares)] {
        let result = match side {
            Side::Buy => client.simulate_buy(asset_id, &ts, amount).await,
            Side::Sell => client.simulate_sell(asset_id, &ts, amount).await,
        };

        match result {
            Ok(sim) => {
                if save {
                    let filename = samples::simulation_filename(side, &ts);
                    if let Err(e) = save_json_sample(&config.sample_dir, &filename, &sim.body).await {
                        tracing::warn!(error = %e, %side, "Failed to save simulation sample");
                    }
                }
                let title = format!("Simulate {} Result (HTTP {})", side, sim.status);
                print_pretty_json(&title, &sim.body);
            }
            Err(e) => {
                tracing::error!(error = %e, %side, "Simulation failed");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
