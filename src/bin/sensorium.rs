use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use sensorium::{Command, Config, SensorRegistry, TracingObserver};

const CONFIG_ENV: &str = "SENSORIUM_CONFIG";

fn load_config() -> sensorium::Result<Config> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sensorium=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut registry = SensorRegistry::with_config(config, TracingObserver);

    println!("=== Sensorium: polymorphic sensor registry ===");
    println!("{}", sensorium::command::HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = stdout.flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "failed to read input");
                break;
            }
        }

        if line.trim().is_empty() {
            continue;
        }

        // Malformed input is reported and discarded; the session goes on.
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("Error: {}", err);
                continue;
            }
        };
        let quit = command == Command::Quit;

        match command.execute(&mut registry) {
            Ok(output) => println!("{}", output),
            Err(err) => println!("Error: {}", err),
        }

        if quit {
            break;
        }
    }

    drop(registry);
    println!("System closed. Every sensor released.");

    ExitCode::SUCCESS
}
