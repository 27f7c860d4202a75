use ini_reader::IniReader;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-ini-file> [<group> <key>]", args[0]);
        std::process::exit(1);
    }

    let ini_path = &args[1];

    println!("Reading INI file: {}", ini_path);
    println!("{}", "=".repeat(60));

    let reader = match IniReader::from_path(ini_path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("\nERROR: Failed to read INI file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    // Direct lookup mode: <group> <key> prints one raw value
    if let (Some(group), Some(key)) = (args.get(2), args.get(3)) {
        match reader.get(group, key) {
            Some(value) => println!("{}", value),
            None => {
                eprintln!("ERROR: No key '{}' in group '{}'", key, group);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("\nParsed {} group(s):", reader.size());
    for group in reader.groups() {
        println!("\n[{}] ({} key(s))", group, reader.group_size(group));
        for (key, value) in reader.entries(group) {
            println!("  {} = {}", key, value);
        }
    }
}
