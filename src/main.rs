//! Numeric GA CLI - Run a target search from JSON configuration.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use numeric_ga::{SearchConfig, SearchEngine, StopReason};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [delay_ms]", args[0]);
        eprintln!();
        eprintln!("Evolve a population until one individual equals the target.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to search configuration file");
        eprintln!("  delay_ms     Pause between generations (default: 0)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let delay = Duration::from_millis(args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0));

    let config = SearchConfig::from_json_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    let mut engine = SearchEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });

    let result = engine
        .run_with_callback(|report| {
            print!("{}\n\n\n", report);
            if report.generation > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }
        })
        .unwrap_or_else(|e| {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        });

    match result.stats.stop_reason {
        StopReason::Converged => println!("Iterations: {}", result.stats.generations),
        StopReason::MaxGenerations => {
            println!(
                "Gave up after {} generations (closest value {:.3})",
                result.stats.generations, result.stats.best_value
            );
            std::process::exit(2);
        }
    }
}

fn print_example_config() {
    let config = SearchConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
