use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const CSV_PATH: &str = "spacex_launch_dash.csv";
const PARQUET_PATH: &str = "spacex_launch_dash.parquet";

/// Booster era: category label, number of flights, success probability,
/// payload ceiling (kg) and the sites it flew from.
struct Era {
    category: &'static str,
    flights: usize,
    success_rate: f64,
    max_payload: f64,
    sites: &'static [&'static str],
}

const ERAS: [Era; 5] = [
    Era {
        category: "v1.0",
        flights: 5,
        success_rate: 0.0,
        max_payload: 700.0,
        sites: &["CCAFS LC-40"],
    },
    Era {
        category: "v1.1",
        flights: 15,
        success_rate: 0.1,
        max_payload: 4500.0,
        sites: &["CCAFS LC-40", "VAFB SLC-4E"],
    },
    Era {
        category: "FT",
        flights: 24,
        success_rate: 0.65,
        max_payload: 9600.0,
        sites: &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"],
    },
    Era {
        category: "B4",
        flights: 11,
        success_rate: 0.5,
        max_payload: 7100.0,
        sites: &["KSC LC-39A", "CCAFS SLC-40", "VAFB SLC-4E"],
    },
    Era {
        category: "B5",
        flights: 1,
        success_rate: 1.0,
        max_payload: 3600.0,
        sites: &["CCAFS SLC-40"],
    },
];

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// One synthetic launch row.
struct Launch {
    flight_number: i64,
    site: String,
    class: i64,
    payload: f64,
    booster_version: String,
    category: String,
}

fn generate(rng: &mut SimpleRng) -> Vec<Launch> {
    let mut launches = Vec::new();
    let mut flight_number = 1;
    for era in &ERAS {
        for _ in 0..era.flights {
            // Payloads are reported to the nearest 10 kg.
            let payload = (rng.next_f64() * era.max_payload / 10.0).round() * 10.0;
            let class = i64::from(rng.next_f64() < era.success_rate);
            launches.push(Launch {
                flight_number,
                site: rng.pick(era.sites).to_string(),
                class,
                payload,
                booster_version: format!("F9 {} B{:04}", era.category, 1000 + flight_number),
                category: era.category.to_string(),
            });
            flight_number += 1;
        }
    }
    launches
}

fn write_csv(launches: &[Launch]) -> Result<()> {
    let mut writer = csv::Writer::from_path(CSV_PATH).context("creating CSV output")?;
    writer.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;
    for (idx, l) in launches.iter().enumerate() {
        writer.write_record([
            idx.to_string(),
            l.flight_number.to_string(),
            l.site.clone(),
            l.class.to_string(),
            format!("{:.1}", l.payload),
            l.booster_version.clone(),
            l.category.clone(),
        ])?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

fn write_parquet(launches: &[Launch]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.flight_number))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.site.as_str()))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload))),
            Arc::new(StringArray::from_iter_values(
                launches.iter().map(|l| l.booster_version.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.category.as_str()))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(PARQUET_PATH).context("creating parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let launches = generate(&mut rng);

    write_csv(&launches)?;
    write_parquet(&launches)?;

    println!(
        "Wrote {} launches to {CSV_PATH} and {PARQUET_PATH}",
        launches.len()
    );
    Ok(())
}
