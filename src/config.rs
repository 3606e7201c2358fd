use std::{fs, path::PathBuf, time::Duration};

use crate::{history, presets, CellId, ConfigError, Dims, Preset};

pub const USAGE: &str = "usage: toruslife [--rows N] [--cols N] [--history N] [--interval MS] [--preset NAME] [--log FILE] [PATTERN_FILE]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Preset(&'static Preset),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dims: Dims,
    pub history: usize,
    pub interval: Duration,
    pub seed: Option<Seed>,
    /// log file. Without one, logging is off unless `RUST_LOG` asks for it,
    /// since stderr shares the terminal with the view.
    pub log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dims: Dims::default(),
            history: history::DEFAULT_CAPACITY,
            interval: Duration::from_millis(200),
            seed: None,
            log: None,
        }
    }
}

impl Config {
    /// reads flags from `args`, which excludes the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let (mut rows, mut cols) = (config.dims.rows(), config.dims.cols());
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rows" => rows = number(&mut args, "--rows")?,
                "--cols" => cols = number(&mut args, "--cols")?,
                "--history" => {
                    config.history = number(&mut args, "--history")?;
                    if config.history == 0 {
                        return Err(ConfigError::InvalidValue {
                            flag: "--history",
                            value: "0".into(),
                        });
                    }
                }
                "--interval" => {
                    config.interval = Duration::from_millis(number(&mut args, "--interval")?)
                }
                "--log" => {
                    let path = args.next().ok_or(ConfigError::MissingValue("--log"))?;
                    config.log = Some(PathBuf::from(path));
                }
                "--preset" => {
                    let name = args.next().ok_or(ConfigError::MissingValue("--preset"))?;
                    let preset =
                        presets::find(&name).ok_or(ConfigError::UnknownPreset(name))?;
                    config.seed = Some(Seed::Preset(preset));
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownArgument(flag.to_string()));
                }
                path => config.seed = Some(Seed::File(PathBuf::from(path))),
            }
        }

        config.dims = Dims::new(rows, cols)?;
        Ok(config)
    }

    /// the cells to load at startup, centred for presets and anchored at the
    /// origin for pattern files.
    pub fn seed_cells(&self) -> Result<Option<Vec<CellId>>, ConfigError> {
        match &self.seed {
            None => Ok(None),
            Some(Seed::Preset(preset)) => Ok(Some(preset.centered(self.dims))),
            Some(Seed::File(path)) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::PatternRead {
                    path: path.clone(),
                    source,
                })?;
                Ok(Some(presets::parse_plaintext(&text)))
            }
        }
    }

    /// default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.log {
            Some(_) => "info",
            None => "off",
        }
    }
}

fn number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ConfigError> {
    let value = args.next().ok_or(ConfigError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { flag, value })
}
