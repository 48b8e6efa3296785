use clap::Parser;
use paramflow::prelude::*;
use paramflow::scenario::{RawBasicData, RawConfigurationData, RawConnectionData, RawSchedule};
use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate replayable wizard scenarios
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_scenario.json")]
    output: String,

    /// Also script an invalid attempt before each of the first and last
    /// stages, so the replay exercises rejections
    #[arg(long)]
    inject_rejections: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating a new wizard scenario...");

    let mut steps = vec![ScenarioStep::Begin];

    if cli.inject_rejections {
        // Nine characters, one short of the minimum the wizard accepts.
        steps.push(ScenarioStep::SubmitBasic(RawBasicData {
            name: "testingcx".to_string(),
            connection_type: "sftp".to_string(),
            description: "lorem ips".to_string(),
        }));
        println!("-> Injected an undersized basic data attempt.");
    }
    steps.push(ScenarioStep::SubmitBasic(generate_basic(&mut rng)));
    steps.push(ScenarioStep::SubmitConnection(generate_connection(&mut rng)));
    steps.push(ScenarioStep::SubmitConfiguration(generate_configuration(
        &mut rng,
    )));

    let schedule = generate_schedule(&mut rng);
    if cli.inject_rejections {
        // Same selections with the begin time withheld, where the mode
        // requires one.
        let mut incomplete = schedule.clone();
        incomplete.begin_hour = None;
        incomplete.begin_minute = None;
        if incomplete != schedule {
            steps.push(ScenarioStep::SubmitSchedule(incomplete));
            println!("-> Injected a schedule attempt without a begin time.");
        }
    }
    steps.push(ScenarioStep::SubmitSchedule(schedule));

    let scenario = Scenario {
        name: format!("generated-{}", Alphanumeric.sample_string(&mut rng, 6)),
        steps,
    };

    let json_output = serde_json::to_string_pretty(&scenario)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved scenario '{}' to '{}'",
        scenario.name, cli.output
    );

    Ok(())
}

fn generate_basic(rng: &mut ThreadRng) -> RawBasicData {
    let connection_type = ["ftp", "ftps", "sftp"][rng.random_range(0..3)];
    RawBasicData {
        name: format!("Transferencia {}", Alphanumeric.sample_string(rng, 8)),
        connection_type: connection_type.to_string(),
        description: format!(
            "Parametrización generada {}",
            Alphanumeric.sample_string(rng, 16)
        ),
    }
}

fn generate_connection(rng: &mut ThreadRng) -> RawConnectionData {
    // Octet widths are fixed so the host always lands inside 10 to 15
    // characters.
    let host = format!(
        "{}.{}.{}.{}",
        rng.random_range(10..100),
        rng.random_range(100..256),
        rng.random_range(10..100),
        rng.random_range(100..256)
    );
    RawConnectionData {
        host,
        port: rng.random_range(1000..=65535).to_string(),
        user: format!("Usuario_{}", rng.random_range(1..=99)),
        password: format!("Pr{}*$", Alphanumeric.sample_string(rng, 8)),
        origin: format!("\\Origen\\{}", Alphanumeric.sample_string(rng, 8)),
        destination: format!("\\Destino\\{}", Alphanumeric.sample_string(rng, 8)),
    }
}

fn generate_configuration(rng: &mut ThreadRng) -> RawConfigurationData {
    let mode = ["reception", "file output"][rng.random_range(0..2)];
    let regex = ["^.*\\.txt", "^.*\\.csv", "^data_.*\\.xml"][rng.random_range(0..3)];
    let status = ["active", "inactive"][rng.random_range(0..2)];
    RawConfigurationData {
        mode: mode.to_string(),
        regex: regex.to_string(),
        status: status.to_string(),
    }
}

/// Picks a random periodicity mode and populates exactly the selectors that
/// mode needs.
fn generate_schedule(rng: &mut ThreadRng) -> RawSchedule {
    let mode = PeriodicityMode::ALL[rng.random_range(0..PeriodicityMode::ALL.len())];
    let mut schedule = RawSchedule {
        mode: mode.as_str().to_string(),
        ..RawSchedule::default()
    };

    match mode {
        PeriodicityMode::Minutes => {
            schedule.minute = Some(rng.random_range(0..=59));
        }
        PeriodicityMode::EveryHour => {
            schedule.hour_interval = Some(rng.random_range(1..=24));
        }
        PeriodicityMode::Daily => {
            let variant = DailyVariant::ALL[rng.random_range(0..DailyVariant::ALL.len())];
            schedule.daily_variant = Some(variant.as_str().to_string());
        }
        PeriodicityMode::Weekly => {
            let count = rng.random_range(1..=3);
            for _ in 0..count {
                let day = Weekday::ALL[rng.random_range(0..Weekday::ALL.len())];
                schedule.days.push(day.as_str().to_string());
            }
            schedule.days.sort();
            schedule.days.dedup();
        }
        PeriodicityMode::Monthly => {
            if rng.random_bool(0.5) {
                schedule.day_of_month = Some(rng.random_range(1..=31));
            } else {
                let sequence = OrdinalWeek::ALL[rng.random_range(0..OrdinalWeek::ALL.len())];
                let weekday = Weekday::ALL[rng.random_range(0..Weekday::ALL.len())];
                schedule.sequence = Some(sequence.as_str().to_string());
                schedule.ordinal_weekday = Some(weekday.as_str().to_string());
            }
            schedule.month_interval = Some(rng.random_range(1..=12));
        }
        PeriodicityMode::Yearly => {
            let month = MonthOfYear::ALL[rng.random_range(0..MonthOfYear::ALL.len())];
            schedule.month = Some(month.as_str().to_string());
            if rng.random_bool(0.5) {
                schedule.day_of_month = Some(rng.random_range(1..=28));
            } else {
                let sequence = OrdinalWeek::ALL[rng.random_range(0..OrdinalWeek::ALL.len())];
                let weekday = Weekday::ALL[rng.random_range(0..Weekday::ALL.len())];
                schedule.sequence = Some(sequence.as_str().to_string());
                schedule.ordinal_weekday = Some(weekday.as_str().to_string());
            }
        }
    }

    if mode.needs_begin_time() {
        schedule.begin_hour = Some(rng.random_range(0..=23));
        schedule.begin_minute = Some(rng.random_range(0..=59));
    }
    schedule
}
