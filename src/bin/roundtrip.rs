use std::time::Instant;

use common::FrequencyTable;
use common::Symbol;
use huffstream::HuffmanCodec;

fn main() {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: roundtrip <file>...");
        std::process::exit(2);
    }
    let mut failed = false;
    for path in &paths {
        if let Err(err) = roundtrip(path) {
            eprintln!("{}: {}", path, err);
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn roundtrip(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let input = std::fs::read(path)?;
    let start = Instant::now();
    let freqs = FrequencyTable::from_bytes(&input);
    let codec = HuffmanCodec::new(&freqs)?;
    let symbols = input.iter().map(|byte| *byte as Symbol);
    let bits = codec.encode_to_bits(symbols)?;
    let decoded = codec.decode(&mut bits.reader())?;
    let elapsed = start.elapsed();

    if !decoded.iter().copied().eq(input.iter().map(|byte| *byte as Symbol)) {
        return Err("decoded output differs from the input".into());
    }
    println!("{}", codec.code_table());
    println!(
        "{}: {} -> {} bytes ({:.3}), depth {}, {:?}",
        path,
        input.len(),
        bits.data.len(),
        bits.data.len() as f64 / input.len().max(1) as f64,
        codec.tree().get_depth(),
        elapsed
    );
    Ok(())
}
