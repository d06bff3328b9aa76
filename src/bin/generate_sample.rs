use anyhow::{Context, Result};

/// Seeded splitmix64 stream; the same seed always yields the same file.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

const CITIES: [&str; 4] = ["台北市", "新北市", "台中市", "高雄市"];
const DISTRICTS: [&str; 4] = ["中正區", "大安區", "西屯區", "苓雅區"];
const ROADS: [&str; 4] = ["中山路", "民生東路", "復興南路", "自由路"];
const NAMES: [&str; 5] = ["陳", "林", "黃", "張", "李"];
// Embedded codes that should get flagged.
const CODES: [&str; 4] = ["TPE", "B1F", "Room A-12", "KHH"];

/// One address line: plain, with a letter code, or with a long number run.
fn address(rng: &mut SimpleRng) -> String {
    let base = format!(
        "{}{}{}{}號",
        rng.pick(&CITIES),
        rng.pick(&DISTRICTS),
        rng.pick(&ROADS),
        rng.below(300) + 1
    );
    match rng.below(4) {
        0 => format!("{base} {}", rng.pick(&CODES)),
        1 => format!("{base}{}", 1000 + rng.below(9000)),
        _ => base,
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_addresses.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["顧客番号", "氏名", "住所１", "住所２"])?;

    let rows = 50;
    for id in 1..=rows {
        let name = format!("{}{}", rng.pick(&NAMES), rng.pick(&["一郎", "美咲", "大翔", "結衣"]));
        let addr1 = format!("{}{}", rng.pick(&CITIES), rng.pick(&DISTRICTS));
        let addr2 = if rng.below(10) == 0 {
            String::new()
        } else {
            address(&mut rng)
        };
        writer.write_record([id.to_string(), name, addr1, addr2])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
