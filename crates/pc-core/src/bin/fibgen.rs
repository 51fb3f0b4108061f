//! fibgen — Fibonacci sequence generator.
//!
//! The numeric-input demo: a count in, the first n terms out. One-shot
//! with an argument, otherwise an interactive prompt loop.

use std::io::{self, BufRead, Write};

use pc_core::fib::{fibonacci, format_sequence, parse_term_count, DEFAULT_TERMS, MAX_TERMS};

fn print_help() {
    println!("fibgen — Fibonacci sequence generator");
    println!();
    println!("Usage:");
    println!("  fibgen         Interactive prompt");
    println!("  fibgen N       Print the first N terms (1..={MAX_TERMS})");
    println!();
    println!("Options:");
    println!("  --version   Print version");
    println!("  --help      Print this help");
}

fn print_sequence(n: usize) {
    let sequence = fibonacci(n);
    println!("First {n} terms of the Fibonacci sequence:");
    println!("{}", format_sequence(&sequence));
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("fibgen {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // One-shot mode
    if let Some(arg) = args.iter().find(|a| !a.starts_with('-')) {
        match parse_term_count(arg) {
            Ok(n) => print_sequence(n),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // Interactive prompt loop
    let stdin = io::stdin();
    loop {
        print!("Number of terms [{DEFAULT_TERMS}] (q to quit): ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed == "q" || trimmed == "quit" {
            break;
        }

        match parse_term_count(trimmed) {
            Ok(n) => print_sequence(n),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
