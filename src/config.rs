use {
    crate::cache::DEFAULT_CAPACITY,
    std::{ffi::OsString, fmt, str::FromStr},
};

/// Deepest blink count accepted. Beyond this, `stone * 2024` is no longer
/// known to stay within `u64` for realistic inputs.
pub const MAX_DEPTH: u8 = 75;

pub const DEFAULT_DEPTHS: [u8; 2] = [25, 75];

pub const HELP: &str = "\
Counts stones after repeated blinks. Reads one line of stones from stdin.

USAGE:
  stones [OPTIONS] < input

OPTIONS:
  --depth N           blink count to report, repeatable (default: 25, 75)
  --capacity N        memo cache capacity (default: 131072)
  --strategy NAME     memo | grouped (default: memo)
  -h, --help          print this message
";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Memo,
    Grouped,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memo" => Ok(Strategy::Memo),
            "grouped" => Ok(Strategy::Grouped),
            _ => Err(format!("unknown strategy {s:?}, expected memo or grouped")),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Args(pico_args::Error),
    DepthTooLarge(u32),
    ZeroCapacity,
    Unused(Vec<OsString>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Args(error) => write!(f, "{error}"),
            ConfigError::DepthTooLarge(depth) => {
                write!(f, "depth {depth} exceeds the maximum of {MAX_DEPTH}")
            }
            ConfigError::ZeroCapacity => write!(f, "cache capacity must be greater than zero"),
            ConfigError::Unused(args) => write!(f, "unexpected arguments: {args:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<pico_args::Error> for ConfigError {
    fn from(error: pico_args::Error) -> Self {
        ConfigError::Args(error)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub depths: Vec<u8>,
    pub capacity: usize,
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depths: DEFAULT_DEPTHS.to_vec(),
            capacity: DEFAULT_CAPACITY,
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, ConfigError> {
        let depths: Vec<u32> = args.values_from_str("--depth")?;
        let capacity: Option<usize> = args.opt_value_from_str("--capacity")?;
        let strategy: Option<Strategy> = args.opt_value_from_str("--strategy")?;

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(ConfigError::Unused(rest));
        }

        let depths = if depths.is_empty() {
            DEFAULT_DEPTHS.to_vec()
        } else {
            depths
                .into_iter()
                .map(|depth| match u8::try_from(depth) {
                    Ok(d) if d <= MAX_DEPTH => Ok(d),
                    _ => Err(ConfigError::DepthTooLarge(depth)),
                })
                .collect::<Result<_, _>>()?
        };

        let capacity = capacity.unwrap_or(DEFAULT_CAPACITY);
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        Ok(Self {
            depths,
            capacity,
            strategy: strategy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
fn parse(args: &[&str]) -> Result<Config, ConfigError> {
    Config::from_args(pico_args::Arguments::from_vec(
        args.iter().map(OsString::from).collect(),
    ))
}

#[test]
fn test_defaults() {
    assert_eq!(parse(&[]).unwrap(), Config::default());
    assert_eq!(Config::default().depths, vec![25, 75]);
    assert_eq!(Config::default().capacity, 131072);
}

#[test]
fn test_options() {
    let config = parse(&[
        "--depth", "6", "--capacity", "64", "--depth", "0", "--strategy", "grouped",
    ])
    .unwrap();
    assert_eq!(config.depths, vec![6, 0]);
    assert_eq!(config.capacity, 64);
    assert_eq!(config.strategy, Strategy::Grouped);
}

#[test]
fn test_invalid_options() {
    assert!(matches!(
        parse(&["--depth", "76"]),
        Err(ConfigError::DepthTooLarge(76))
    ));
    assert!(matches!(
        parse(&["--depth", "4096"]),
        Err(ConfigError::DepthTooLarge(4096))
    ));
    assert!(matches!(
        parse(&["--capacity", "0"]),
        Err(ConfigError::ZeroCapacity)
    ));
    assert!(matches!(
        parse(&["--strategy", "fast"]),
        Err(ConfigError::Args(_))
    ));
    assert!(matches!(parse(&["--depth", "x"]), Err(ConfigError::Args(_))));
    assert!(matches!(parse(&["extra"]), Err(ConfigError::Unused(_))));
}
