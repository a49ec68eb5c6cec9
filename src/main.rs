//! Function Selector Golf CLI
//!
//! Usage:
//!   selector_golf search "mint(uint256,address)"       # Search the full u64 space
//!   selector_golf search "mint%d(address)" -m 1000000  # Bounded search
//!   selector_golf address 0x<private key>              # Derive an address

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::warn;

use selector_golf::config::{Command, SearchArgs};
use selector_golf::{derive_address, logging, Config, Search, SelectorResult};

fn main() {
    let config = Config::parse();
    logging::init(&config.log_level);

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let code = match &config.command {
        Command::Search(args) => run_search(args),
        Command::Address { private_key } => run_address(private_key),
    };
    process::exit(code);
}

fn run_search(args: &SearchArgs) -> i32 {
    let options = args.to_options();

    println!("Function Selector Golf");
    println!("======================");
    println!("Signature:  {}", args.signature);
    println!("Workers:    {}", options.workers);
    println!("Max index:  {}", format_number(options.max_index));
    println!();

    let search = Search::new(options);
    ctrlc_handler(search.stop_flag_clone());

    println!("Searching... (Press Ctrl+C to stop)\n");

    match search.run(&args.signature) {
        Ok(result) => {
            print_result(&result);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_address(private_key: &str) -> i32 {
    match derive_address(private_key) {
        Ok(address) => {
            println!("Address: {}", address);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn print_result(result: &SelectorResult) {
    println!("=== Result ===");
    if result.is_empty() {
        println!("No selector with leading zero bytes found.");
    } else {
        println!("Signature:  {}", result.name);
        println!("Selector:   0x{}", result.selector);
        println!("Zero bytes: {}", result.zeros() / 2);
    }
    println!("Candidates: {}", format_number(result.candidates));
    println!("Time:       {:.2}s", result.duration.as_secs_f64());
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn ctrlc_handler(stop_flag: Arc<AtomicBool>) {
    if let Err(e) = ctrlc::set_handler(move || {
        stop_flag.store(true, Ordering::Release);
    }) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }
}
