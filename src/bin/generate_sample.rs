//! Write synthetic job vacancy tables in the Statistics Canada column layout,
//! one per question, for demos and manual testing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use job_vacancies::data::catalog::CategoryCatalog;
use job_vacancies::question::{Axis, QUESTIONS};

const HEADER: [&str; 17] = [
    "REF_DATE",
    "GEO",
    "DGUID",
    "National Occupational Classification",
    "Job vacancy characteristics",
    "Statistics",
    "UOM",
    "UOM_ID",
    "SCALAR_FACTOR",
    "SCALAR_ID",
    "VECTOR",
    "COORDINATE",
    "VALUE",
    "STATUS",
    "SYMBOL",
    "TERMINATED",
    "DECIMALS",
];

#[derive(Parser)]
#[command(about = "Generate sample dataForQuestionN.csv files")]
struct Args {
    #[arg(long, default_value = "dataFiles")]
    out_dir: PathBuf,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 2015)]
    first_year: i32,
    #[arg(long, default_value_t = 2023)]
    last_year: i32,
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
}

/// Quarterly vacancy count: a base level, slow growth and seasonal swing.
fn vacancies(base: f64, quarter_index: usize, rng: &mut SimpleRng) -> f64 {
    let growth = 1.0 + 0.02 * quarter_index as f64;
    let season = 1.0 + 0.1 * ((quarter_index % 4) as f64 * std::f64::consts::FRAC_PI_2).sin();
    let noise = 0.9 + 0.2 * rng.next_f64();
    (base * growth * season * noise).round()
}

fn write_table(
    path: &Path,
    occupations: &CategoryCatalog,
    characteristics: &CategoryCatalog,
    args: &Args,
    rng: &mut SimpleRng,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(HEADER)?;

    let mut rows = 0;
    let quarters: Vec<(i32, u32)> = (args.first_year..=args.last_year)
        .flat_map(|y| [1, 4, 7, 10].into_iter().map(move |m| (y, m)))
        .collect();

    for (oi, occupation) in occupations.entries().iter().enumerate() {
        for (ci, characteristic) in characteristics.entries().iter().enumerate() {
            let base = 500.0 + 4000.0 / (1 + oi + ci) as f64;
            let vector = format!("v{}", 1_000_000 + oi * 100 + ci);
            let coordinate = format!("1.{}.{}", oi + 1, ci + 1);
            for (qi, (year, month)) in quarters.iter().enumerate() {
                // Roughly one suppressed value in twenty.
                let suppressed = rng.next_f64() < 0.05;
                let value = if suppressed {
                    String::new()
                } else {
                    vacancies(base, qi, rng).to_string()
                };
                let ref_date = format!("{year:04}-{month:02}");
                writer.write_record([
                    ref_date.as_str(),
                    "Canada",
                    "2016A000011124",
                    occupation.label,
                    characteristic.label,
                    "Job vacancies",
                    "Number",
                    "223",
                    "units",
                    "0",
                    vector.as_str(),
                    coordinate.as_str(),
                    value.as_str(),
                    if suppressed { "x" } else { "" },
                    "",
                    "",
                    "0",
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut rng = SimpleRng::new(args.seed);
    for question in &QUESTIONS {
        let catalog_for = |axis: Axis| {
            question
                .selections
                .iter()
                .find(|s| s.axis == axis)
                .map(|s| s.catalog)
                .context("question lacks an axis")
        };
        let occupations = catalog_for(Axis::First)?;
        let characteristics = catalog_for(Axis::Second)?;

        let path = args
            .out_dir
            .join(format!("dataForQuestion{}.csv", question.number));
        let rows = write_table(&path, occupations, characteristics, &args, &mut rng)?;
        log::info!("Wrote {rows} rows to {}", path.display());
    }
    Ok(())
}
