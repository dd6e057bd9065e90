use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sg_core::Real;
use sg_fluids::{
    ConfigError, FluidError, InputPair, SinglePhaseFluid, StiffenedGasFluid, SweepAxis,
    SweepDefinition, SweepError, SweepType, ThermoPropertyPack, compute_state, execute_sweep,
    load_yaml, to_yaml_string,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown input pair '{0}' (expected one of PT, VE, HS, PS, HP)")]
    UnknownPair(String),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "sg-cli")]
#[command(about = "Stiffened-gas equation of state: property evaluation and sweeps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a parameter file and print the normalized form
    Validate {
        /// Path to the parameter YAML file
        config: PathBuf,
    },
    /// Evaluate every property at one state
    State {
        /// Path to the parameter YAML file
        #[arg(short, long)]
        config: PathBuf,
        /// Input pair: PT, VE, HS, PS or HP
        #[arg(short, long, value_parser = parse_pair)]
        pair: InputPair,
        /// First input of the pair (SI units)
        #[arg(allow_negative_numbers = true)]
        first: Real,
        /// Second input of the pair (SI units)
        #[arg(allow_negative_numbers = true)]
        second: Real,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Sweep one input of a pair with the other held fixed
    Sweep {
        /// Path to the parameter YAML file
        #[arg(short, long)]
        config: PathBuf,
        /// Input pair: PT, VE, HS, PS or HP
        #[arg(short, long, value_parser = parse_pair)]
        pair: InputPair,
        /// Which input is swept
        #[arg(long, value_enum, default_value_t = Axis::Second)]
        axis: Axis,
        /// Value of the input held fixed (SI units)
        #[arg(long, allow_negative_numbers = true)]
        fixed: Real,
        /// Sweep start (SI units)
        #[arg(long, allow_negative_numbers = true)]
        start: Real,
        /// Sweep end (SI units)
        #[arg(long, allow_negative_numbers = true)]
        end: Real,
        /// Number of points
        #[arg(short = 'n', long, default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Axis {
    First,
    Second,
}

impl From<Axis> for SweepAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::First => SweepAxis::First,
            Axis::Second => SweepAxis::Second,
        }
    }
}

fn parse_pair(text: &str) -> Result<InputPair, String> {
    InputPair::parse(text).ok_or_else(|| CliError::UnknownPair(text.to_string()).to_string())
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => cmd_validate(&config),
        Commands::State {
            config,
            pair,
            first,
            second,
            json,
        } => cmd_state(&config, pair, first, second, json),
        Commands::Sweep {
            config,
            pair,
            axis,
            fixed,
            start,
            end,
            points,
            log,
            json,
        } => {
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let sweep = SweepDefinition::new(axis.into(), start, end, points, sweep_type)?;
            cmd_sweep(&config, pair, fixed, &sweep, json)
        }
    }
}

fn load_model(config: &Path) -> CliResult<StiffenedGasFluid> {
    let cfg = load_yaml(config)?;
    Ok(StiffenedGasFluid::from_config(&cfg)?)
}

fn cmd_validate(config: &Path) -> CliResult<()> {
    println!("Validating parameters: {}", config.display());
    let cfg = load_yaml(config)?;
    let model = StiffenedGasFluid::from_config(&cfg)?;
    println!("✓ Parameters are valid (c_p = {} J/(kg K))", model.params().cp());
    print!("{}", to_yaml_string(&cfg)?);
    Ok(())
}

fn cmd_state(
    config: &Path,
    pair: InputPair,
    first: Real,
    second: Real,
    json: bool,
) -> CliResult<()> {
    let model = load_model(config)?;
    tracing::info!(pair = pair.label(), first, second, "evaluating state");
    let pack = compute_state(&model, pair, first, second)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pack)?);
        return Ok(());
    }

    println!("{} state ({})", model.name(), pair.label());
    println!("  {} = {}", pair.first_label(), first);
    println!("  {} = {}", pair.second_label(), second);
    print_pack(&pack);
    Ok(())
}

fn print_pack(pack: &ThermoPropertyPack) {
    let rows = [
        ("Pressure [Pa]", pack.p.value),
        ("Temperature [K]", pack.t.value),
        ("Density [kg/m^3]", pack.rho.value),
        ("Specific volume [m^3/kg]", pack.v),
        ("Internal energy [J/kg]", pack.e),
        ("Enthalpy [J/kg]", pack.h),
        ("Entropy [J/(kg K)]", pack.s),
        ("Speed of sound [m/s]", pack.c.value),
        ("cp [J/(kg K)]", pack.cp),
        ("cv [J/(kg K)]", pack.cv),
        ("Viscosity [Pa s]", pack.mu.value),
        ("Conductivity [W/(m K)]", pack.k),
    ];
    for (label, value) in rows {
        println!("  {label:<26} {value:>16.6e}");
    }
}

#[derive(Serialize)]
struct SweepRow<'a> {
    x: Real,
    #[serde(flatten)]
    state: Option<&'a ThermoPropertyPack>,
    error: Option<String>,
}

fn cmd_sweep(
    config: &Path,
    pair: InputPair,
    fixed: Real,
    sweep: &SweepDefinition,
    json: bool,
) -> CliResult<()> {
    let model = load_model(config)?;
    tracing::info!(pair = pair.label(), fixed, %sweep, "running sweep");
    let result = execute_sweep(&model, pair, fixed, sweep);

    if json {
        let rows: Vec<SweepRow> = result
            .independent_values
            .iter()
            .zip(&result.states)
            .map(|(&x, state)| SweepRow {
                x,
                state: state.as_ref().ok(),
                error: state.as_ref().err().map(|e| e.to_string()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("x,p,T,rho,e,h,s,c");
    for (x, state) in result.independent_values.iter().zip(&result.states) {
        match state {
            Ok(s) => println!(
                "{x},{},{},{},{},{},{},{}",
                s.p.value, s.t.value, s.rho.value, s.e, s.h, s.s, s.c.value
            ),
            Err(e) => println!("{x},,,,,,,  # {e}"),
        }
    }
    eprintln!(
        "{} points: {} ok, {} failed",
        result.states.len(),
        result.num_successful,
        result.num_failed
    );
    Ok(())
}
