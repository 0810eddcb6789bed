use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sensorframe_rs::logging::{init_logger_with_default, log_error};
use sensorframe_rs::util::hex::decode_hex;
use sensorframe_rs::{log_info, registry, Decoder, DecoderConfig, EcScaling, SensorBatch};

#[derive(Parser)]
#[command(name = "sensorframe-cli")]
#[command(about = "Decode field node sensor telemetry")]
struct Cli {
    /// Decoder configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// EC divisor for ADS1115 sensors: single (/100) or double (/100/100)
    #[arg(long, global = true)]
    ec_scaling: Option<EcScaling>,

    /// Render numeric device ids as {prefix}{id:03} (default ARDUINO_MEGA_)
    #[arg(long, global = true, conflicts_with = "bare_device_id")]
    device_prefix: Option<String>,

    /// Keep numeric device ids as bare numbers
    #[arg(long, global = true)]
    bare_device_id: bool,

    /// Keep physical channels instead of per-type friendly channels
    #[arg(long, global = true)]
    no_renumber: bool,

    /// Print the validation report to stderr and fail if the batch is invalid
    #[arg(long, global = true)]
    validate: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a scalar binary frame given as hex
    Frame { hex: String },
    /// Decode a compact JSON record from a file, or stdin with "-"
    Compact { input: String },
    /// List the sensor type registry
    Types,
}

fn load_config(cli: &Cli) -> Result<DecoderConfig> {
    let mut config = match &cli.config {
        Some(path) => DecoderConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DecoderConfig::default(),
    };

    if let Some(scaling) = cli.ec_scaling {
        config.ec_scaling = scaling;
    }
    if let Some(prefix) = &cli.device_prefix {
        config.device_label_prefix = Some(prefix.clone());
    }
    if cli.bare_device_id {
        config.device_label_prefix = None;
    }
    if cli.no_renumber {
        config.renumber_channels = false;
    }
    Ok(config)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading compact record from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}

fn print_types() -> Result<()> {
    let types: Vec<_> = registry::all()
        .map(|d| {
            serde_json::json!({
                "code": d.code,
                "displayName": d.display_name,
                "busProtocol": d.bus_protocol,
                "valueNames": d.value_names,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&types)?);
    Ok(())
}

/// Prints the batch; returns false when validation was requested and failed.
fn emit(batch: &SensorBatch, validate: bool) -> Result<bool> {
    println!("{}", serde_json::to_string_pretty(batch)?);

    let summary = batch.protocol_summary();
    log_info(&format!(
        "device {}: {} sensors (i2c {}, modbus {})",
        batch.device_id, batch.sensor_count, summary.i2c, summary.modbus
    ));

    if !validate {
        return Ok(true);
    }
    let report = batch.validate();
    eprintln!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report.valid)
}

fn run(cli: Cli) -> Result<bool> {
    let decoder = Decoder::new(load_config(&cli)?);

    match &cli.command {
        Commands::Frame { hex } => {
            let bytes = decode_hex(hex).context("parsing frame hex")?;
            let batch = decoder.decode_frame(&bytes).context("decoding scalar frame")?;
            emit(&batch, cli.validate)
        }
        Commands::Compact { input } => {
            let json = read_input(input)?;
            let batch = decoder
                .decode_compact_json(&json)
                .context("decoding compact record")?;
            emit(&batch, cli.validate)
        }
        Commands::Types => {
            print_types()?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    init_logger_with_default("info");

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            log_error("batch failed validation");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
