use admin_client::args::{parse_amount, parse_discount, parse_item};
use admin_client::logger::init_logger;
use admin_client::{
    AdminConfig, ComboService, ComboStore, HttpClient, PriceRecheckService, RecheckReport,
};
use clap::{Parser, Subcommand};
use combo_pricing::{
    CurrencyFormat, MismatchDetector, PriceBreakdown, summarize, warning_badge,
};
use rust_decimal::Decimal;
use shared::models::{ComboItem, ComboOffer, Discount};

#[derive(Debug, Parser)]
#[command(name = "combo-admin", version, about = "Combo offer pricing tools")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "API_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Bearer token
    #[arg(long, env = "API_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List combos with their prices and warnings
    List {
        /// Only show combos with a price warning
        #[arg(long)]
        flagged: bool,
    },
    /// Price a combo against the live menu without saving it
    Preview {
        /// Menu items as `id:qty`
        #[arg(required = true, value_parser = parse_item)]
        items: Vec<ComboItem>,

        /// `none`, `percentage:<v>` or `fixed:<v>`
        #[arg(long, default_value = "none", value_parser = parse_discount)]
        discount: Discount,
    },
    /// Compare every combo with current menu prices
    Recheck {
        /// Drift allowed before flagging (overrides PRICE_TOLERANCE)
        #[arg(long, value_parser = parse_amount)]
        tolerance: Option<Decimal>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AdminConfig::from_env();
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(token) = cli.token {
        config = config.with_token(token);
    }
    init_logger(&config.log_level, config.log_dir.as_deref());

    let client = HttpClient::new(&config)?;
    let fmt = config.currency();
    tracing::debug!(base_url = %client.base_url(), "Using backend");

    match cli.command {
        Command::List { flagged } => {
            let combos = client.list_combos().await?;
            let shown: Vec<&ComboOffer> = combos
                .iter()
                .filter(|c| !flagged || c.has_price_warning())
                .collect();
            if shown.is_empty() {
                println!("No combos found");
            }
            for combo in shown {
                print_combo(combo, &fmt);
            }
        }
        Command::Preview { items, discount } => {
            let service = ComboService::new(client);
            let breakdown = service.preview(&items, &discount).await?;
            let summary = summarize(&breakdown, &discount, &fmt);
            println!("Original: {}", summary.original);
            if let (Some(label), Some(amount)) =
                (&summary.discount_label, &summary.discount_amount_text)
            {
                println!("Discount: {} ({})", label, amount);
            }
            println!("Final:    {}", summary.final_price);
        }
        Command::Recheck { tolerance } => {
            let mut policy = config.mismatch_policy();
            if let Some(tolerance) = tolerance {
                policy.tolerance = tolerance;
            }
            let service = PriceRecheckService::new(client, MismatchDetector::new(policy));
            let report = service.run().await?;
            print_report(&report);
            if !report.is_clean() {
                anyhow::bail!("{} combo(s) could not be rechecked", report.failures.len());
            }
        }
    }

    Ok(())
}

fn print_combo(combo: &ComboOffer, fmt: &CurrencyFormat) {
    let breakdown = PriceBreakdown::from_snapshot(combo.original_price, combo.price);
    let summary = summarize(&breakdown, &combo.discount, fmt);
    let status = if combo.is_active { "" } else { " [inactive]" };
    println!("{} ({}){}: {}", combo.name, combo.id, status, summary);
    if let Some(badge) = combo
        .price_warning
        .as_ref()
        .and_then(|w| warning_badge(w, fmt))
    {
        println!("  ⚠ {}", badge);
    }
}

fn print_report(report: &RecheckReport) {
    println!(
        "Checked {}: {} flagged, {} cleared, {} unchanged",
        report.checked, report.flagged, report.cleared, report.unchanged
    );
    for failure in &report.failures {
        println!("  ✗ {}: {}", failure.combo_id, failure.error);
    }
}
