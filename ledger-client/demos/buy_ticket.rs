// ledger-client/demos/buy_ticket.rs
// Walk the checkout flow for a park ticket.

use ledger_client::{Actor, Browsing, Checkout, ClientConfig, PaymentMethod, Submission, Ticket};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <base_url> <customer_id> <ticket_type_id>", args[0]);
        return Ok(());
    }

    let client = ClientConfig::new(&args[1]).with_timeout(10).build();
    let actor = Actor::customer(args[2].parse()?);
    let item_id: i64 = args[3].parse()?;

    let browsing = Checkout::<Ticket, Browsing>::begin(&client).await?;
    println!("available tickets:");
    for item in browsing.catalog() {
        println!("  #{:<4} {:<30} {:>8.2}", item.item_id, item.display_name, item.unit_price);
    }

    let mut selected = match browsing.select(item_id) {
        Ok(selected) => selected,
        Err((_, e)) => {
            println!("cannot select ticket {item_id}: {e}");
            return Ok(());
        }
    };
    selected.choose_payment(PaymentMethod::Cash)?;
    println!(
        "buying {} for {:.2} ({})",
        selected.intent().display_name(),
        selected.intent().unit_price(),
        selected.intent().payment_method()
    );

    match selected.submit(&client, &actor).await {
        Submission::Confirmed { confirmation, .. } => println!("{}", confirmation.message),
        Submission::Failed { error, .. } => println!("purchase failed: {error}"),
    }

    Ok(())
}
