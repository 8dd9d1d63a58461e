#![allow(missing_docs)]
use solar_term_calculator::{SolarTerm, SolarTermResult, SolarTermSolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Year from the first argument, 2024 otherwise
    let year: i32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().map_err(|_| format!("Invalid year: {arg}"))?,
        None => 2024,
    };
    // Seoul
    let longitude = 126.978;

    println!("Solar Terms of {year}");
    println!("Local mean time for {longitude:.3}°E");
    println!("{:=<72}", "");

    let solver = SolarTermSolver::default();
    let mut rows = Vec::with_capacity(SolarTerm::ALL.len());
    for term in SolarTerm::ALL {
        let result = solver.find(year, term.longitude(), Some(longitude))?;
        rows.push((term, result));
    }
    rows.sort_by_key(|(_, result)| result.utc());

    for (term, result) in rows {
        let instant = result.instant();
        let local = instant
            .local_mean_time()
            .map(|time| time.format("%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let marker = match result {
            SolarTermResult::Converged(_) => "",
            SolarTermResult::MaxIterationsReached(_) => " (not converged)",
        };
        println!(
            "{:>3}°  {:<20} {} UTC   {} LMT{}",
            term.longitude(),
            format!("{term:?}"),
            instant.utc.format("%Y-%m-%d %H:%M"),
            local,
            marker
        );
    }

    Ok(())
}
