use mapblock_codec::{
    BlockDecoder, BlockKey, DecodeOptions, DecodedBlock, FormatMode, NamePolicy,
};
use std::env;
use std::fs;

const USAGE: &str = "[--hex] [--key <i64>] [--network] [--strict-names] [--max-output <bytes>] [--layer <y>]";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <block-file> {}", args[0], USAGE);
        std::process::exit(1);
    }

    let block_path = &args[1];
    let hex_input = args.iter().any(|arg| arg == "--hex");
    let mut options = DecodeOptions::default();
    if args.iter().any(|arg| arg == "--network") {
        options = options.with_mode(FormatMode::Network);
    }
    if args.iter().any(|arg| arg == "--strict-names") {
        options = options.with_name_policy(NamePolicy::Strict);
    }
    if let Some(limit) = flag_value::<usize>(&args, "--max-output") {
        options = options.with_max_output_size(limit);
    }
    let key = flag_value::<i64>(&args, "--key").map(BlockKey);
    let layer = flag_value::<usize>(&args, "--layer");
    if layer.is_some_and(|y| y > 15) {
        eprintln!("ERROR: --layer must be between 0 and 15.");
        std::process::exit(1);
    }

    let raw = match read_block(block_path, hex_input) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", block_path, e);
            std::process::exit(1);
        }
    };

    println!("Reading MapBlock: {} ({} bytes)", block_path, raw.len());
    if let Some(key) = key {
        let position = key.position();
        let (ox, oy, oz) = position.node_origin();
        println!("  Key: {}  Position: {}", key, position);
        println!(
            "  World coordinates: ({} to {}, {} to {}, {} to {})",
            ox, ox + 15, oy, oy + 15, oz, oz + 15
        );
    }
    println!("{}", "=".repeat(60));

    match BlockDecoder::new(options).decode(&raw) {
        Ok(block) => print_block(&block, layer),
        Err(e) => {
            eprintln!("\nERROR: Failed to decode MapBlock");
            if let Some(key) = key {
                eprintln!("  Key: {} ({})", key, key.position());
            }
            eprintln!("  [{}] {}", e.kind(), e);
            std::process::exit(1);
        }
    }
}

/// Parses the argument following `flag`, exiting with a message if it is malformed.
fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let idx = args.iter().position(|arg| arg == flag)?;
    match args.get(idx + 1).map(|value| value.parse::<T>()) {
        Some(Ok(value)) => Some(value),
        _ => {
            eprintln!("ERROR: {} requires a numeric argument.", flag);
            std::process::exit(1);
        }
    }
}

/// Reads raw block bytes, or hex text as produced by `SELECT hex(data)`.
fn read_block(path: &str, hex_input: bool) -> Result<Vec<u8>, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    if !hex_input {
        return Ok(bytes);
    }
    let text = String::from_utf8(bytes).map_err(|e| e.to_string())?;
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits).map_err(|e| e.to_string())
}

fn print_block(block: &DecodedBlock, layer: Option<usize>) {
    let header = &block.header;
    println!("\nBlock Header:");
    println!("  Flags: {:#04x}", header.flags);
    println!("  Underground: {}", header.underground);
    println!("  Day/night differs: {}", header.day_night_differs);
    println!("  Lighting complete: {:#06x}", header.lighting_complete);
    match header.timestamp {
        Some(timestamp) => println!("  Timestamp: {}", timestamp),
        None => println!("  Timestamp: (network format)"),
    }

    println!("\nName-id mapping ({} entries):", block.mapping.len());
    for (id, name) in block.mapping.iter() {
        println!("  {:4} -> {}", id, name);
    }

    println!("\nNode distribution:");
    for (name, count) in block.node_counts() {
        let percentage = count as f64 * 100.0 / block.grid.len() as f64;
        println!("  {:<30} {:4} nodes ({:5.1}%)", name, count, percentage);
    }
    let unmapped = block.unmapped_ids();
    if !unmapped.is_empty() {
        println!("  Unmapped content ids: {:?}", unmapped);
    }
    if block.trailing_len > 0 {
        println!("\n{} bytes of metadata follow the node grid (not parsed).", block.trailing_len);
    }

    if let Some(y) = layer {
        println!("\nLayer y={}:", y);
        println!("     x→ 0123456789ABCDEF");
        for (z, row) in block.grid.layer(y).iter().enumerate() {
            let symbols: String = row
                .iter()
                .map(|node| layer_symbol(block.name_of(node.content_id)))
                .collect();
            println!("  z{:2}  {}", z, symbols);
        }
    }
}

fn layer_symbol(name: Option<&str>) -> char {
    let Some(name) = name else {
        return '?';
    };
    match name {
        "air" => '.',
        n if n.contains("stone") => '#',
        n if n.contains("dirt") => 'D',
        n if n.contains("grass") => 'G',
        n if n.contains("water") => '~',
        n if n.contains("tree") || n.contains("wood") => 'W',
        n if n.contains("leaves") => 'L',
        n => n
            .rsplit(':')
            .next()
            .and_then(|short| short.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?'),
    }
}
