//! Command-line option parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Number of curves to generate; random when absent
    pub count: Option<usize>,
    /// RNG seed; OS entropy when absent
    pub seed: Option<u64>,
    /// Chunk count for the parallel sum; hardware threads when absent
    pub workers: Option<usize>,
    /// Parameter at which every curve is sampled
    pub param: f64,
    /// Probability that a generated radius is negated
    pub invalid_ratio: f64,
    pub quiet: bool,
    pub json: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count: None,
            seed: None,
            workers: None,
            param: std::f64::consts::FRAC_PI_4,
            invalid_ratio: 0.0,
            quiet: false,
            json: false,
            help: false,
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Options, DemoError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--help" | "-h" => options.help = true,
            "--quiet" | "-q" => options.quiet = true,
            "--json" => options.json = true,
            "--count" => options.count = Some(parse_value(&flag, args.next())?),
            "--seed" => options.seed = Some(parse_value(&flag, args.next())?),
            "--workers" => {
                let workers: usize = parse_value(&flag, args.next())?;
                if workers == 0 {
                    return Err(invalid(&flag, "0"));
                }
                options.workers = Some(workers);
            }
            "--param" => {
                let param: f64 = parse_value(&flag, args.next())?;
                if !param.is_finite() {
                    return Err(invalid(&flag, &param.to_string()));
                }
                options.param = param;
            }
            "--invalid" => {
                let ratio: f64 = parse_value(&flag, args.next())?;
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(invalid(&flag, &ratio.to_string()));
                }
                options.invalid_ratio = ratio;
            }
            _ => return Err(DemoError::UnknownOption(flag)),
        }
    }

    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, DemoError> {
    let value = value.ok_or_else(|| DemoError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| invalid(flag, &value))
}

fn invalid(flag: &str, value: &str) -> DemoError {
    DemoError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}
