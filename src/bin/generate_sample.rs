use std::path::PathBuf;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::Parser;

/// Write deterministic sample trip files for all three cities.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about = "Write sample bikeshare CSV files")]
struct Args {
    /// Output directory.
    #[arg(default_value = ".")]
    out_dir: PathBuf,
    /// Trips per city.
    #[arg(long, default_value_t = 500)]
    rows: usize,
}

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

struct CitySpec {
    file: &'static str,
    stations: &'static [&'static str],
    /// Chicago and New York exports carry gender and birth year.
    demographics: bool,
}

const CITIES: [CitySpec; 3] = [
    CitySpec {
        file: "chicago.csv",
        stations: &[
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Canal St & Adams St",
            "Theater on the Lake",
        ],
        demographics: true,
    },
    CitySpec {
        file: "new_york_city.csv",
        stations: &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "Broadway & E 22 St",
            "Central Park S & 6 Ave",
        ],
        demographics: true,
    },
    CitySpec {
        file: "washington.csv",
        stations: &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
        ],
        demographics: false,
    },
];

/// Busier in the morning and evening commute.
const HOURS: [u32; 12] = [7, 8, 8, 9, 12, 13, 16, 17, 17, 17, 18, 21];

fn start_time(rng: &mut SimpleRng, first_day: NaiveDateTime) -> NaiveDateTime {
    // First half of the year, like the public exports.
    let day = rng.below(181) as i64;
    let hour = HOURS[rng.below(HOURS.len() as u64) as usize] as i64;
    let minute = rng.below(60) as i64;
    let second = rng.below(60) as i64;
    first_day
        + Duration::days(day)
        + Duration::hours(hour)
        + Duration::minutes(minute)
        + Duration::seconds(second)
}

fn main() {
    let args = Args::parse();
    let mut rng = SimpleRng::new(42);
    let first_day = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid epoch");

    std::fs::create_dir_all(&args.out_dir).expect("Failed to create output directory");

    for city in &CITIES {
        let path = args.out_dir.join(city.file);
        let mut writer = csv::Writer::from_path(&path).expect("Failed to create output file");

        let mut header = vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ];
        if city.demographics {
            header.extend(["Gender", "Birth Year"]);
        }
        writer.write_record(&header).expect("Failed to write header");

        for id in 0..args.rows {
            let start = start_time(&mut rng, first_day);
            let secs = 60 + rng.below(3_600);
            let end = start + Duration::seconds(secs as i64);

            let mut record = vec![
                id.to_string(),
                start.format("%Y-%m-%d %H:%M:%S").to_string(),
                end.format("%Y-%m-%d %H:%M:%S").to_string(),
                secs.to_string(),
                rng.pick(city.stations).to_string(),
                rng.pick(city.stations).to_string(),
                // Roughly one row in fifty has no user type.
                match rng.below(50) {
                    0 => String::new(),
                    n if n < 38 => "Subscriber".to_string(),
                    _ => "Customer".to_string(),
                },
            ];
            if city.demographics {
                let (gender, year) = match rng.below(10) {
                    0 => (String::new(), String::new()),
                    n => (
                        if n % 3 == 0 { "Female" } else { "Male" }.to_string(),
                        format!("{}.0", 1950 + rng.below(50)),
                    ),
                };
                record.push(gender);
                record.push(year);
            }
            writer.write_record(&record).expect("Failed to write row");
        }
        writer.flush().expect("Failed to flush output");
        println!("Wrote {} trips to {}", args.rows, path.display());
    }
}
