mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use gf_core::units::{bar, degc, kgps};
use gf_sim::{PlantConfig, SimulationEngine, SimulationState};
use gf_steam::{CorrelationSteam, SteamProperties};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gf-cli")]
#[command(about = "GeoFlash CLI - flash-steam geothermal plant simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step the plant and print each state snapshot
    Run(RunArgs),
    /// Print the default plant config as JSON
    Defaults,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum SteamBackend {
    /// Closed-form correlations (always available)
    #[default]
    Correlation,
    /// CoolProp water properties (requires the `coolprop` feature)
    Coolprop,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 10)]
    steps: u64,
    /// Plant config JSON file; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Steam property backend
    #[arg(long, value_enum, default_value_t = SteamBackend::Correlation)]
    steam: SteamBackend,
    /// Wellhead pressure [barG]
    #[arg(long)]
    wellhead_pressure: Option<f64>,
    /// Wellhead temperature [°C]
    #[arg(long)]
    wellhead_temp: Option<f64>,
    /// Wellhead flow [kg/s]
    #[arg(long)]
    wellhead_flow: Option<f64>,
    /// Turbine isentropic efficiency (0-1)
    #[arg(long)]
    turbine_efficiency: Option<f64>,
    /// Generator efficiency (0-1)
    #[arg(long)]
    generator_efficiency: Option<f64>,
    /// Generator power factor (0-1)
    #[arg(long)]
    power_factor: Option<f64>,
    /// Ambient wet-bulb temperature [°C]
    #[arg(long)]
    wet_bulb: Option<f64>,
    /// Emit one JSON object per step instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Defaults => cmd_defaults(),
    }
}

fn cmd_defaults() -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(&PlantConfig::default())?);
    Ok(())
}

fn cmd_run(args: &RunArgs) -> CliResult<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlantConfig::default(),
    };
    let mut engine = SimulationEngine::from_config(&config, steam_backend(args.steam)?);
    apply_overrides(&mut engine, args);

    tracing::info!(
        steps = args.steps,
        steam_model = engine.steam().name(),
        "starting run"
    );

    if !args.json {
        print_header();
    }

    for step in 1..=args.steps {
        let state = engine
            .step()
            .map_err(|source| CliError::Step { step, source })?;
        if args.json {
            println!("{}", serde_json::to_string(&state)?);
        } else {
            print_row(step, &state);
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> CliResult<PlantConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn steam_backend(backend: SteamBackend) -> CliResult<Arc<dyn SteamProperties>> {
    match backend {
        SteamBackend::Correlation => Ok(Arc::new(CorrelationSteam::new())),
        #[cfg(feature = "coolprop")]
        SteamBackend::Coolprop => Ok(Arc::new(gf_steam::CoolPropSteam::new())),
        #[cfg(not(feature = "coolprop"))]
        SteamBackend::Coolprop => Err(CliError::BackendUnavailable("coolprop")),
    }
}

fn apply_overrides(engine: &mut SimulationEngine, args: &RunArgs) {
    if let Some(p) = args.wellhead_pressure {
        engine.set_wellhead_pressure(bar(p));
    }
    if let Some(t) = args.wellhead_temp {
        engine.set_wellhead_temperature(degc(t));
    }
    if let Some(m) = args.wellhead_flow {
        engine.set_wellhead_flow(kgps(m));
    }
    if let Some(eta) = args.turbine_efficiency {
        engine.set_turbine_isentropic_efficiency(eta);
    }
    if let Some(eta) = args.generator_efficiency {
        engine.set_generator_efficiency(eta);
    }
    if let Some(pf) = args.power_factor {
        engine.set_power_factor(pf);
    }
    if let Some(t) = args.wet_bulb {
        engine.set_wet_bulb_temperature(degc(t));
    }
}

fn print_header() {
    println!(
        "{:>5} {:>9} {:>10} {:>10} {:>10} {:>9} {:>9} {:>5}",
        "step", "sep bar", "steam kg/s", "turbine MW", "elec MW", "cond bar", "cond °C", "conv"
    );
}

fn print_row(step: u64, s: &SimulationState) {
    println!(
        "{:>5} {:>9.3} {:>10.2} {:>10.3} {:>10.3} {:>9.4} {:>9.2} {:>5}",
        step,
        s.separator_outlet_pressure.unwrap_or(f64::NAN),
        s.steam_flow.unwrap_or(f64::NAN),
        s.turbine_out_power,
        s.electrical_power,
        s.condenser_pressure,
        s.condenser_temp,
        match s.isentropic_converged {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        }
    );
}
