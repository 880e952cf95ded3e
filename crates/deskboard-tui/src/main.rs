mod ui;

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use deskboard_charts::backend::MemoryChartBackend;
use deskboard_charts::registry::ChartRegistry;
use deskboard_core::actions::DashAction;
use deskboard_core::actions::RuntimeAction;
use deskboard_core::charts::ChartId;
use deskboard_core::config::Config;
use deskboard_core::persistence::PreferenceStore;
use deskboard_core::reducer::reduce;
use deskboard_core::state::DashState;
use deskboard_core::state::LogEntry;
use deskboard_core::state::LogLevel;
use deskboard_core::state::LogSource;
use deskboard_core::state::ThemePref;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("deskboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "run" => {
            let cli = parse_cli_args(args.collect::<Vec<_>>())?;
            run_console(cli)
        }
        "theme" => run_theme(args.collect::<Vec<_>>()),
        _ => {
            print_help();
            Err(format!("unknown command: {command}").into())
        }
    }
}

struct CliArgs {
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

fn parse_cli_args(args: Vec<String>) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut config = None;
    let mut data_dir = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--config requires a path".into());
                };
                config = Some(PathBuf::from(value));
                i += 2;
            }
            "--data-dir" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--data-dir requires a path".into());
                };
                data_dir = Some(PathBuf::from(value));
                i += 2;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(CliArgs { config, data_dir })
}

/// An explicit `--config` path must exist; the default location is optional
/// and silently falls back to built-in defaults.
fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(format!("config not found: {}", path.display()).into());
        }
        let raw = fs::read_to_string(path)?;
        return toml::from_str(&raw)
            .map_err(|err| format!("parse {}: {err}", path.display()).into());
    }

    let Some(base) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    let path = base.join("deskboard").join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|err| format!("parse {}: {err}", path.display()).into())
}

fn resolve_data_dir(cli: &CliArgs, config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }
    match dirs::data_dir() {
        Some(base) => Ok(base.join("deskboard")),
        None => Err("cannot determine a data directory; pass --data-dir".into()),
    }
}

fn run_console(cli: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let data_dir = resolve_data_dir(&cli, &config)?;
    let store = PreferenceStore::open(&data_dir)?;
    let theme = store.load_theme();

    let mut state = DashState::new(config.tuning());
    reduce(
        &mut state,
        DashAction::Runtime(RuntimeAction::SetTheme(theme)),
    );

    let mounts: BTreeSet<String> = ChartId::ALL
        .iter()
        .map(|id| id.mount_id().to_string())
        .collect();
    let mut registry = ChartRegistry::new(Box::new(MemoryChartBackend));
    let mounted = registry.initialize(&mounts, theme)?;
    reduce(
        &mut state,
        DashAction::Runtime(RuntimeAction::AppendStructuredLog(LogEntry {
            seq: 0,
            level: LogLevel::Info,
            ts_ms: Some(chrono::Utc::now().timestamp_millis() as u64),
            source: LogSource::Runtime,
            message: format!("mounted {mounted} charts"),
        })),
    );

    ui::run(
        state,
        &store,
        &mut registry,
        Duration::from_millis(config.tick_interval_ms),
    )
}

fn run_theme(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = args;
    let mut requested = None;
    if args.first().map(String::as_str) == Some("set") {
        args.remove(0);
        let Some(value) = args.first().filter(|arg| !arg.starts_with("--")) else {
            return Err("theme set requires light or dark".into());
        };
        requested = Some(value.clone());
        args.remove(0);
    }

    let cli = parse_cli_args(args)?;
    let config = load_config(cli.config.as_deref())?;
    let data_dir = resolve_data_dir(&cli, &config)?;
    let store = PreferenceStore::open(&data_dir)?;

    match requested {
        Some(value) => {
            let Some(theme) = ThemePref::from_label(&value) else {
                return Err(format!("unknown theme: {value}").into());
            };
            store.save_theme(theme)?;
            println!("theme set to {}", theme.label());
        }
        None => println!("{}", store.load_theme().label()),
    }
    Ok(())
}

fn print_help() {
    println!("deskboard {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  deskboard run [--config PATH] [--data-dir PATH]");
    println!("  deskboard theme [set <light|dark>] [--config PATH] [--data-dir PATH]");
    println!("  deskboard --help");
    println!("  deskboard --version");
}
