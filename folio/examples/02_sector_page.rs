use folio::{Folio, Horizon};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Sector pages pin the range selector to one year by default.
    let folio = Folio::builder().build();
    let horizon: Horizon = "1y".parse()?;

    // 2. Sector performance chart data.
    let series = folio.sector_series("AI & Machine Learning", horizon);
    println!(
        "AI & Machine Learning series: {} points ending {}",
        series.len(),
        series.last().expect("non-empty series").date
    );

    // 3. Recommendation cards for the sector route key.
    for rec in folio.recommendations_by_sector("ai") {
        println!(
            "{:<5} {:<32} {:>10} target {:.2} ({:+.2}% upside)",
            rec.ticker,
            rec.company_name,
            rec.rating.to_string(),
            rec.target_price,
            rec.upside_percent
        );
    }

    // 4. Single-ticker drill-down, case-insensitive.
    let nvda = folio.recommendation_by_symbol("nvda")?;
    println!("{}: {}", nvda.ticker, nvda.summary);

    Ok(())
}
