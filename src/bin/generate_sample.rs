use serde::Serialize;

/// One CSV row, in the column order of the California housing dataset.
#[derive(Serialize)]
struct HousingRow {
    longitude: f64,
    latitude: f64,
    housing_median_age: u32,
    total_rooms: u32,
    total_bedrooms: Option<u32>,
    population: u32,
    households: u32,
    median_income: f64,
    median_house_value: f64,
    ocean_proximity: &'static str,
}

/// A coastal region: centre, spread, and typical income / value levels.
struct Region {
    proximity: &'static str,
    center: (f64, f64),
    spread: f64,
    income_mean: f64,
    value_per_income: f64,
    weight: usize,
}

static REGIONS: [Region; 5] = [
    Region { proximity: "NEAR BAY", center: (-122.25, 37.80), spread: 0.25, income_mean: 4.2, value_per_income: 60_000.0, weight: 11 },
    Region { proximity: "<1H OCEAN", center: (-118.30, 34.05), spread: 0.45, income_mean: 4.2, value_per_income: 55_000.0, weight: 44 },
    Region { proximity: "INLAND", center: (-119.80, 36.70), spread: 1.20, income_mean: 3.2, value_per_income: 38_000.0, weight: 32 },
    Region { proximity: "NEAR OCEAN", center: (-117.20, 32.75), spread: 0.60, income_mean: 4.0, value_per_income: 58_000.0, weight: 13 },
    Region { proximity: "ISLAND", center: (-118.32, 33.35), spread: 0.03, income_mean: 2.7, value_per_income: 140_000.0, weight: 1 },
];

const MIN_VALUE: f64 = 14_999.0;
const MAX_VALUE: f64 = 500_001.0;

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

    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_u64() % u64::from(hi - lo + 1)) as u32
    }
}

fn pick_region(rng: &mut SimpleRng) -> &'static Region {
    let total: usize = REGIONS.iter().map(|r| r.weight).sum();
    let mut ticket = (rng.next_u64() % total as u64) as usize;
    for region in &REGIONS {
        if ticket < region.weight {
            return region;
        }
        ticket -= region.weight;
    }
    &REGIONS[0]
}

fn generate_row(rng: &mut SimpleRng) -> HousingRow {
    let region = pick_region(rng);

    // Incomes are censored at 0.4999 and 15.0001 in the real data.
    let median_income = (rng.gauss(region.income_mean, 1.6).clamp(0.4999, 15.0001) * 10_000.0)
        .round()
        / 10_000.0;

    // Values are reported in $100 steps and capped at $500,001.
    let raw_value = median_income * region.value_per_income + rng.gauss(0.0, 45_000.0);
    let median_house_value = ((raw_value / 100.0).round() * 100.0).clamp(MIN_VALUE, MAX_VALUE);

    let households = rng.range(50, 1_500);
    let total_rooms = households * rng.range(3, 7);
    let total_bedrooms = (rng.next_f64() > 0.01).then(|| total_rooms / 5 + rng.range(0, 40));

    HousingRow {
        longitude: ((region.center.0 + rng.gauss(0.0, region.spread)) * 100.0).round() / 100.0,
        latitude: ((region.center.1 + rng.gauss(0.0, region.spread)) * 100.0).round() / 100.0,
        housing_median_age: rng.range(1, 52),
        total_rooms,
        total_bedrooms,
        population: households * rng.range(2, 4),
        households,
        median_income,
        median_house_value,
        ocean_proximity: region.proximity,
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_rows = 5_000;

    let output_path = "housing.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    for _ in 0..n_rows {
        writer
            .serialize(generate_row(&mut rng))
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");

    println!("Wrote {n_rows} housing blocks to {output_path}");
}
