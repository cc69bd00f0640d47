/* Runs a bag script and saves the transcript */
use std::env;
use std::process;

use bag::bag_parser;
use bag::bag_runner::ScriptRunner;

fn main() {
    env_logger::init(); // RUST_LOG=debug shows every add/remove

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <script_file> <output_file>", args[0]);
        process::exit(1);
    }

    let script_file = &args[1];
    let output_file = &args[2];

    let commands = match bag_parser::load_commands(script_file) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("Error loading script: {}", e);
            process::exit(1);
        }
    };

    let mut runner = ScriptRunner::new();
    if let Err(e) = runner.run(commands) {
        eprintln!("Error running script: {}", e);
        process::exit(1);
    }

    if let Err(e) = runner.write_transcript(output_file) {
        eprintln!("Error writing transcript: {}", e);
        process::exit(1);
    }

    println!("Transcript has been saved to {}", output_file);
}
