use clap::Parser;
use paramflow::error::DriverError;
use paramflow::prelude::*;
use std::time::Instant;

/// A replay and reporting CLI for parameterization wizard scenarios
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the scenario JSON file (runs the bundled example when omitted)
    scenario_path: Option<String>,

    /// Optional path to save the run transcript as a binary artifact
    #[arg(short, long)]
    transcript: Option<String>,

    /// Narrate every validated driver intent to stdout
    #[arg(short = 'd', long)]
    show_driver: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

/// A driver that narrates intents to stdout instead of touching a UI. Every
/// call it sees has already passed validation inside the session.
struct ConsoleDriver;

impl FormDriver for ConsoleDriver {
    fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), DriverError> {
        println!("  [driver] set {} = {:?}", field, value);
        Ok(())
    }

    fn select_option(&mut self, control: &'static str, value: &str) -> Result<(), DriverError> {
        println!("  [driver] select {} -> {}", control, value);
        Ok(())
    }

    fn click_action(&mut self, action: Action) -> Result<(), DriverError> {
        println!("  [driver] click {}", action);
        Ok(())
    }

    fn read_field_value(&mut self, _field: FieldName) -> Result<String, DriverError> {
        Ok(String::new())
    }

    fn is_control_enabled(&mut self, _action: Action) -> Result<bool, DriverError> {
        Ok(true)
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let total_start = Instant::now();

    // --- 1. Configuration ---
    let config = config_from_env();
    config
        .validate()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid session configuration: {}", e)));
    println!(
        "Target environment: {} as {}",
        config.base_url, config.user_mail
    );

    // --- 2. Scenario Loading ---
    let load_start = Instant::now();
    let scenario = match &cli.scenario_path {
        Some(path) => Scenario::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load scenario from '{}': {}", path, e))
        }),
        None => {
            println!("No scenario file provided. Using the bundled example scenario.");
            Scenario::example()
        }
    };
    let load_duration = load_start.elapsed();
    println!(
        "Scenario '{}' with {} steps",
        scenario.name,
        scenario.steps.len()
    );

    // --- 3. Replay ---
    println!("\nReplaying scenario...");
    let sink = RecordingSink::new();
    let transcript_handle = sink.handle();
    let builder = WizardSession::builder().with_sink(sink);
    let mut session = if cli.show_driver {
        builder.with_driver(ConsoleDriver).build()
    } else {
        builder.build()
    };

    let replay_start = Instant::now();
    let outcomes = replay(&scenario, &mut session)
        .unwrap_or_else(|e| exit_with_error(&format!("Replay failed: {}", e)));
    let replay_duration = replay_start.elapsed();

    // --- 4. Results ---
    println!("\nReplay finished!");
    let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
    println!(
        "  -> Submissions: {} ({} rejected)",
        outcomes.len(),
        rejected
    );
    for outcome in &outcomes {
        if let SubmitOutcome::Completed(parameterization) = outcome {
            println!(
                "  -> Created parameterization: {}",
                parameterization.basic.name
            );
        }
    }
    println!("  -> Final state: {}", session.state());

    // --- 5. Report ---
    let transcript = transcript_handle.take();
    let report = TranscriptFormatter::default().render(&transcript);
    println!("\n{}", report);

    if let Some(path) = &cli.transcript {
        transcript.save(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to save transcript to '{}': {}", path, e))
        });
        println!("Transcript artifact written to '{}'", path);
    }

    // --- 6. Performance Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("Scenario Loading:  {:?}", load_duration);
    println!("Replay:            {:?}", replay_duration);
    println!("---------------------------");
    println!("Total Execution:   {:?}", total_duration);
}

/// Reads the target environment from `PARAMFLOW_*` variables, with local
/// defaults for each missing one.
fn config_from_env() -> SessionConfig {
    SessionConfig::new(
        &std::env::var("PARAMFLOW_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:4200".to_string()),
        &std::env::var("PARAMFLOW_USER_MAIL").unwrap_or_else(|_| "qa@example.com".to_string()),
        &std::env::var("PARAMFLOW_PASSWORD").unwrap_or_else(|_| "changeme".to_string()),
    )
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
