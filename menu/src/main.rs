//! Menu order demo binary
//!
//! Drives a menu screen through a scripted session and prints each render.

use menu_order::{sample_catalog, CurrencyFormat, MenuRow, MenuScreen, MenuView, ScreenConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prints every render to stdout
struct TerminalView;

impl MenuView for TerminalView {
    fn render_rows(&self, rows: &[MenuRow]) {
        for row in rows {
            println!("  {:<8} {:>8}  x{}", row.name, row.price_label, row.count);
        }
    }

    fn render_item_count(&self, text: &str) {
        println!("  items: {text}");
    }

    fn render_total_price(&self, text: &str) {
        println!("  total: {text}\n");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_order=debug,menu_order_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Menu Order ===\n");

    let config = ScreenConfig::default().with_currency(CurrencyFormat::won());
    let screen = MenuScreen::with_config(sample_catalog(), TerminalView, config);

    println!(">>> + row 0, + row 0, + row 2");
    screen.tap_increment(0).await?;
    screen.tap_increment(0).await?;
    screen.tap_increment(2).await?;

    println!(">>> - row 1 (already zero)");
    screen.tap_decrement(1).await?;

    println!(">>> order");
    screen.tap_order().await?;

    println!(">>> clear");
    screen.tap_clear().await?;

    let summary = screen.summary().await;
    println!("Final selection: {} items, {} total", summary.item_count, summary.total_price);

    Ok(())
}
