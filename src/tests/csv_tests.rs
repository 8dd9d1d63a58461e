extern crate std;

use chrono::{DateTime, Utc};

use super::seconds_between;
use crate::find_solar_term_utc;

/// Published instants are rounded to the minute; ours are floored and carry the
/// truncated series' own error on top.
const TOLERANCE_SECONDS: i64 = 180;

#[derive(Debug, serde::Deserialize)]
struct SolarTermRow {
    year: i32,
    target_deg: f64,
    expected_utc: std::string::String,
}

#[test]
fn test_against_csv_data() {
    let csv_path = "test_data/solar_terms.csv";
    let mut rdr =
        csv::Reader::from_path(csv_path).unwrap_or_else(|e| std::panic!("Failed to open CSV file {}: {}", csv_path, e));

    let mut total_rows = 0;
    let mut failures = std::vec::Vec::new();

    for (row_num, result) in rdr.deserialize().enumerate() {
        total_rows += 1;
        let record: SolarTermRow =
            result.unwrap_or_else(|e| std::panic!("Failed to parse CSV row {}: {}", row_num + 2, e));

        let expected = DateTime::parse_from_rfc3339(&record.expected_utc)
            .unwrap_or_else(|e| std::panic!("Bad timestamp on row {}: {}", row_num + 2, e))
            .with_timezone(&Utc);

        let result = find_solar_term_utc(record.year, record.target_deg, None)
            .unwrap_or_else(|e| std::panic!("Search failed for row {}: {:?}", row_num + 2, e));

        let error = seconds_between(result.utc(), expected);
        if !result.is_converged() || error > TOLERANCE_SECONDS {
            failures.push(std::format!(
                "row {}: {}° of {} expected {}, got {} ({} s, converged: {})",
                row_num + 2,
                record.target_deg,
                record.year,
                expected,
                result.utc(),
                error,
                result.is_converged()
            ));
        }
    }

    assert!(total_rows > 0, "no rows in {csv_path}");
    assert!(failures.is_empty(), "{} of {} rows failed:\n{}", failures.len(), total_rows, failures.join("\n"));
}
