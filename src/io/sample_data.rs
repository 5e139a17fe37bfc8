//! Seeded sample bond data for the demo grid.
//!
//! Generation is deterministic for a given seed, so screenshots and saved
//! views line up between runs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use colchooser::ColumnEntry;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROW_COUNT: usize = 200;

/// Column ids in their natural grid order.
pub const BOND_COLUMNS: [&str; 12] = [
    "isin",
    "issuer",
    "currency",
    "coupon",
    "maturityDate",
    "price",
    "yield",
    "rating",
    "sector",
    "country",
    "amountOutstanding",
    "duration",
];

/// Columns hidden until the user picks them.
const INITIALLY_HIDDEN: [&str; 4] = ["sector", "country", "amountOutstanding", "duration"];

const ISSUERS: [&str; 8] = [
    "US Treasury", "Bundesrepublik", "Apple Inc", "Toyota Motor",
    "Nestle SA", "Republic of Italy", "Shell plc", "Kingdom of Spain",
];
const CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "JPY"];
const RATINGS: [&str; 7] = ["AAA", "AA+", "AA", "A", "BBB+", "BBB", "BB"];
const SECTORS: [&str; 5] = ["Sovereign", "Technology", "Autos", "Consumer", "Energy"];
const COUNTRIES: [&str; 6] = ["US", "DE", "JP", "CH", "IT", "GB"];

/// One grid row keyed by column id.
pub type Row = HashMap<String, String>;

/// Initial column state for the bond grid.
pub fn bond_columns() -> Vec<ColumnEntry> {
    BOND_COLUMNS
        .iter()
        .map(|id| ColumnEntry::new(*id).hidden(INITIALLY_HIDDEN.contains(id)))
        .collect()
}

fn pick<'a>(rng: &mut StdRng, values: &[&'a str]) -> &'a str {
    values.choose(rng).copied().unwrap_or_default()
}

/// Generates `count` bond rows from `seed`.
pub fn generate_bonds(count: usize, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let country = pick(&mut rng, &COUNTRIES);
            let coupon: f64 = rng.gen_range(0.0..8.0);
            let price: f64 = rng.gen_range(80.0..115.0);
            let years: u32 = rng.gen_range(1..30);

            let mut row = Row::new();
            row.insert("isin".into(), format!("{}{:010}", country, 1_000_000 + i * 7919));
            row.insert("issuer".into(), pick(&mut rng, &ISSUERS).to_string());
            row.insert("currency".into(), pick(&mut rng, &CURRENCIES).to_string());
            row.insert("coupon".into(), format!("{:.3}", coupon));
            row.insert(
                "maturityDate".into(),
                format!("{}-{:02}-{:02}", 2025 + years, rng.gen_range(1..=12), rng.gen_range(1..=28)),
            );
            row.insert("price".into(), format!("{:.2}", price));
            row.insert("yield".into(), format!("{:.3}", coupon * 100.0 / price));
            row.insert("rating".into(), pick(&mut rng, &RATINGS).to_string());
            row.insert("sector".into(), pick(&mut rng, &SECTORS).to_string());
            row.insert("country".into(), country.to_string());
            row.insert(
                "amountOutstanding".into(),
                format!("{}", rng.gen_range(100u64..5_000) * 1_000_000),
            );
            row.insert("duration".into(), format!("{:.2}", years as f64 * rng.gen_range(0.6..0.95)));
            row
        })
        .collect()
}
