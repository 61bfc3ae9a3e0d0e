use clap::Parser;
use miette::{IntoDiagnostic, Result};
use shopsim::application::shop::Shop;
use shopsim::domain::ports::{ApprovalSourceBox, PaymentGatewayBox};
use shopsim::infrastructure::approval::{DEFAULT_APPROVAL_RATE, RandomApproval};
use shopsim::infrastructure::gateway::MockPaymentGateway;
use shopsim::interfaces::console::Console;
use shopsim::interfaces::menu::Menu;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the payment approval RNG. Same seed, same approvals.
    #[arg(long)]
    seed: Option<u64>,

    /// Probability in [0, 1] that a payment is approved.
    #[arg(long, default_value_t = DEFAULT_APPROVAL_RATE)]
    approval_rate: f64,

    /// Print the transaction history after exiting the menu.
    #[arg(long)]
    history: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let approval: ApprovalSourceBox = match cli.seed {
        Some(seed) => Box::new(RandomApproval::seeded(seed, cli.approval_rate).into_diagnostic()?),
        None => Box::new(RandomApproval::from_entropy(cli.approval_rate).into_diagnostic()?),
    };
    let gateway: PaymentGatewayBox = Box::new(MockPaymentGateway::in_memory(approval));
    let mut shop = Shop::with_sample_data(gateway).into_diagnostic()?;
    info!(seed = ?cli.seed, rate = cli.approval_rate, "shop ready");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut menu = Menu::new(&mut shop, console);
    menu.announce_listings().into_diagnostic()?;
    menu.run().await.into_diagnostic()?;

    if cli.history {
        menu.print_transactions().await.into_diagnostic()?;
    }

    Ok(())
}
