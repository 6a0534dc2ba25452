use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use dfgls::DfglsResult;
use dfgls::dfgls;

#[derive(Parser)]
#[command(name = "dfgls")]
#[command(about = "DF-GLS unit-root test (Elliott, Rothenberg & Stock 1996)")]
#[command(version)]
struct Cli {
  /// Input series, one value per line
  input: PathBuf,

  /// Deterministic terms: c (constant) or ct (constant and trend)
  #[arg(short, long, default_value = "c")]
  regression: String,

  /// Maximum lag; defaults to 12·(nobs/100)^¼
  #[arg(short, long)]
  maxlag: Option<usize>,

  /// Lag selection: AIC, BIC, t-stat, or none to use maxlag as given
  #[arg(short, long, default_value = "AIC")]
  autolag: String,

  /// Log verbosity level (trace, debug, info, warn, error)
  #[arg(long, default_value = "warn")]
  log_level: tracing::Level,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_max_level(cli.log_level)
    .with_target(false)
    .init();

  let data = read_vector_from_file(&cli.input)?;
  let res = run(&cli, &data)?;
  println!("{res}");

  Ok(())
}

fn run(cli: &Cli, data: &[f64]) -> Result<DfglsResult> {
  dfgls(data, &cli.regression, cli.maxlag, Some(cli.autolag.as_str()))
    .with_context(|| format!("DF-GLS test failed on {}", cli.input.display()))
}

fn read_vector_from_file(path: &Path) -> Result<Vec<f64>> {
  let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
  let reader = BufReader::new(file);
  let mut data = Vec::new();

  for (i, line) in reader.lines().enumerate() {
    let line = line?;
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let value: f64 = line
      .parse()
      .with_context(|| format!("line {}: '{line}' is not a number", i + 1))?;
    data.push(value);
  }

  Ok(data)
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand::rngs::StdRng;
  use rand_distr::Distribution;
  use rand_distr::Normal;

  use super::*;

  fn walk(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(17);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut x = vec![0.0; n];
    for t in 1..n {
      x[t] = x[t - 1] + normal.sample(&mut rng);
    }
    x
  }

  #[test]
  fn none_autolag_uses_maxlag() {
    let data = walk(200);
    for spelling in ["none", "None", "fixed"] {
      let cli = Cli::try_parse_from(["dfgls", "series.txt", "-m", "3", "-a", spelling]).unwrap();
      let res = run(&cli, &data).unwrap();
      assert_eq!(res.used_lags, 3);
      assert_eq!(res.icbest, None);
    }
  }

  #[test]
  fn unknown_autolag_is_reported() {
    let cli = Cli::try_parse_from(["dfgls", "series.txt", "-a", "HQIC"]).unwrap();
    let err = run(&cli, &walk(200)).unwrap_err();
    assert!(format!("{err:#}").contains("HQIC"), "{err:#}");
  }
}
