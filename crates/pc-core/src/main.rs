use std::io::{self, IsTerminal, Read};

use pc_backend::GeminiClient;
use pc_core::config::Config;
use pc_core::oneshot::run_once;
use pc_core::repl::run_repl;
use pc_core::style::Style;

fn print_help() {
    println!("pitchcheck — startup idea evaluator");
    println!();
    println!("Usage:");
    println!("  pitchcheck                  Interactive REPL mode");
    println!("  pitchcheck \"idea text\"      One-shot mode (non-interactive)");
    println!("  echo \"idea\" | pitchcheck    One-shot mode via stdin pipe");
    println!();
    println!("Options:");
    println!("  --plain       Disable ANSI styling in the output panel");
    println!("  --version     Print version");
    println!("  --help        Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("pitchcheck {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let plain = args.iter().any(|a| a == "--plain");

    let config = Config::load_or_default();

    // Detect one-shot mode: positional arg (non-flag) or piped stdin
    let non_flag_args: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    let stdin_is_pipe = !io::stdin().is_terminal();

    let idea = if let Some(arg) = non_flag_args.first() {
        Some((*arg).clone())
    } else if stdin_is_pipe {
        let mut buf = String::new();
        if io::stdin().read_to_string(&mut buf).is_ok() && !buf.trim().is_empty() {
            Some(buf.trim().to_string())
        } else {
            None
        }
    } else {
        None
    };

    let api_key = match config.backend.gemini.resolve_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let client = GeminiClient::with_model(&api_key, &config.backend.gemini.model);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create async runtime: {e}");
            std::process::exit(1);
        }
    };

    // One-shot mode
    if let Some(idea) = idea {
        let code = run_once(&client, &runtime, &idea);
        std::process::exit(code);
    }

    // REPL mode
    let style = if plain { Style::disabled() } else { Style::new() };
    if let Err(e) = run_repl(&config, &client, &runtime, style) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
