use std::{env::args, fs::File, process::exit};

use env_logger::{Builder, Env, Target};
use log::info;
use toruslife::{config::USAGE, Config, ConfigError, Engine, Sim, View};

/// stdout belongs to the terminal view, so logs go to a file or nowhere.
fn init_logging(config: &Config) -> Result<(), ConfigError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.log_filter()));
    builder.format_timestamp_secs();
    if let Some(path) = &config.log {
        let file = File::create(path).map_err(|source| ConfigError::LogOpen {
            path: path.clone(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
    Ok(())
}

fn setup() -> Result<(Engine, Config), ConfigError> {
    let config = Config::from_args(args().skip(1))?;
    init_logging(&config)?;
    let mut engine = Engine::with_history(config.dims, config.history)?;
    if let Some(cells) = config.seed_cells()? {
        engine.load_preset(cells)?;
    }
    Ok((engine, config))
}

pub fn main() {
    let (engine, config) = setup().unwrap_or_else(|err| {
        eprintln!("[error] {err}\n{USAGE}");
        exit(1);
    });
    info!(
        "starting {}x{} torus, {} generations of history",
        config.dims.rows(),
        config.dims.cols(),
        config.history
    );

    let simulation = Sim::spawn(engine, config.interval);
    let view = View::spawn(simulation.handle(), config.dims);

    view.join();
    if simulation.join().is_err() {
        eprintln!("[error] simulation thread panicked");
        exit(1);
    }
}
