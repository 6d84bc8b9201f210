use folio::{Folio, Horizon};

fn main() {
    // 1. Build the handle with default policy.
    let folio = Folio::builder().build();

    // 2. Market chart data for the default dashboard range.
    let market = folio.market_series(Horizon::OneYear);
    let first = market.first().expect("non-empty series");
    let last = market.last().expect("non-empty series");
    println!(
        "Market ({} points): {} @ {:.2} -> {} @ {:.2}",
        market.len(),
        first.date,
        first.value,
        last.date,
        last.value
    );

    // 3. Sector performance cards.
    for view in folio.sector_performance() {
        println!("{:<28} {:>+7.2}% YTD", view.name, view.percent_change);
    }

    // 4. Top performing picks, best first.
    let mut picks = folio.stock_picks();
    picks.sort_by(|a, b| b.return_percent.total_cmp(&a.return_percent));
    for pick in picks.iter().take(5) {
        println!("{:<6} {:<28} {:>+9.2}%", pick.symbol, pick.sector, pick.return_percent);
    }
}
