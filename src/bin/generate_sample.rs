/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Trade value for one observation: country base level, slow growth over
/// the decades, a loose trade cycle, and noise.
fn trade_value(base: f64, growth: f64, year: i64, rng: &mut SimpleRng) -> f64 {
    let t = (year - 1960) as f64;
    let cycle = 4.0 * (t / 9.0).sin();
    (base + growth * t + cycle + rng.gauss(0.0, 1.5)).max(0.1)
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let countries: &[(&str, &str, &str)] = &[
        ("Australia", "East Asia & Pacific", "High income"),
        ("Bangladesh", "South Asia", "Lower middle income"),
        ("Brazil", "Latin America & Caribbean", "Upper middle income"),
        ("Chile", "Latin America & Caribbean", "High income"),
        ("China", "East Asia & Pacific", "Upper middle income"),
        ("Ethiopia", "Sub-Saharan Africa", "Low income"),
        ("France", "Europe & Central Asia", "High income"),
        ("Germany", "Europe & Central Asia", "High income"),
        ("Ghana", "Sub-Saharan Africa", "Lower middle income"),
        ("India", "South Asia", "Lower middle income"),
        ("Japan", "East Asia & Pacific", "High income"),
        ("Kenya", "Sub-Saharan Africa", "Lower middle income"),
        ("Mexico", "Latin America & Caribbean", "Upper middle income"),
        ("Nigeria", "Sub-Saharan Africa", "Lower middle income"),
        ("United States", "North America", "High income"),
    ];

    let indicators = [
        "Trade (% of GDP)",
        "Exports of goods and services (% of GDP)",
        "Imports of goods and services (% of GDP)",
        "Merchandise trade (% of GDP)",
    ];

    let years = 1960..=2023;

    let output_path = "trade_year_country.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "COUNTRY_NAME",
            "INDICATOR_NAME",
            "REGION",
            "INCOME_GROUP",
            "YEAR",
            "TRADE_VALUE",
        ])
        .expect("Failed to write header");

    let mut rows: u64 = 0;
    for &(country, region, income_group) in countries {
        for &indicator in &indicators {
            // Per country/indicator level and growth, drawn once.
            let base = 15.0 + rng.next_f64() * 45.0;
            let growth = 0.1 + rng.next_f64() * 0.4;

            for year in years.clone() {
                // A few percent of observations are missing, as in the
                // real indicator tables.
                let value = if rng.next_f64() < 0.04 {
                    String::new()
                } else {
                    format!("{:.4}", trade_value(base, growth, year, &mut rng))
                };

                let year = year.to_string();
                writer
                    .write_record([
                        country,
                        indicator,
                        region,
                        income_group,
                        year.as_str(),
                        value.as_str(),
                    ])
                    .expect("Failed to write row");
                rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {rows} observations ({} countries x {} indicators) to {output_path}",
        countries.len(),
        indicators.len()
    );
}
