use folio::{Folio, Horizon};

// Run with: cargo run --example 03_traced_series --features tracing
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let folio = Folio::builder().build();
    let market = folio.market_series(Horizon::SixMonths);
    let sector = folio.sector_series("Space Exploration", Horizon::SixMonths);
    println!(
        "generated {} market points and {} sector points",
        market.len(),
        sector.len()
    );
}
