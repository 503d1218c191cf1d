use fuelinglib::{
    formats::csv::Csv,
    locale::{format_currency, format_liters, format_percentage},
    traits::ReadFormat,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: итоги заправки из CSV на stdin
    let ev = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let agg = ev.aggregate()?;
    for (i, e) in ev.entries().iter().enumerate() {
        let share = agg.share(i).map(format_percentage).unwrap_or_default();
        println!(
            "{} {} L {} {}",
            e.fuel_type,
            format_liters(e.liters),
            format_currency(e.total_price),
            share
        );
    }
    println!("{} L {}", format_liters(agg.total_liters), format_currency(agg.total_value));
    Ok(())
}
