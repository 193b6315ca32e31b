// ledger-client/demos/purchase_history.rs
// Load and print a customer's aggregated purchase history.

use ledger_client::{Actor, ClientConfig, HistoryOutcome, load_history};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <base_url> <customer_id|staff>", args[0]);
        println!("  Example: {} http://localhost:8080 7", args[0]);
        return Ok(());
    }

    let actor = if args[2] == "staff" {
        Actor::staff()
    } else {
        Actor::customer(args[2].parse()?)
    };

    let client = ClientConfig::new(&args[1]).with_timeout(10).build();

    match load_history(&client, &actor).await? {
        HistoryOutcome::LoginRequired => println!("Please log in to see your purchases."),
        HistoryOutcome::Loaded(view) => {
            for tx in &view.transactions {
                let date = tx
                    .occurred_at
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "unknown date".to_string());
                let owner = tx.owner_name.as_deref().unwrap_or("-");
                println!(
                    "{date}  [{}] #{:<6} {:<30} {:>8.2}  {}  {owner}",
                    tx.domain, tx.id, tx.label, tx.price, tx.payment_method
                );
            }
            println!("total: {}", view.total_display());
        }
    }

    Ok(())
}
