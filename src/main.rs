
use yard::{ConversionMode, Converter, INVALID_EXPRESSION};

use clap::Parser;
use log::{info, warn, LevelFilter, Log, Metadata, Record};

use std::io::Write;
use std::process::ExitCode;

/// Convert an infix arithmetic expression to postfix notation
#[derive(Parser, Debug)]
#[command(name = "yard", version)]
struct Args {
  /// Infix expression, made of single-letter or single-digit operands,
  /// the operators `+ - * / ^`, and parentheses
  #[arg(value_name = "EXPRESSION", default_value = "a+b*(c^d-e)")]
  expression: String,

  /// Treat `^` as right-associative, so `a^b^c` groups as `a^(b^c)`
  #[arg(long)]
  right_assoc_power: bool,

  /// Report a `)` with no matching `(` as an error
  #[arg(long)]
  strict_parens: bool,

  /// Ignore whitespace in the expression
  #[arg(long)]
  skip_whitespace: bool,

  /// Report characters other than operands, operators, and parentheses
  /// as errors
  #[arg(long)]
  reject_unrecognized: bool,

  /// Additional mode flags, as a comma-separated list of the flag
  /// names above (e.g. `strict-parens,skip-whitespace`)
  #[arg(long, env = "YARD_MODE", value_name = "FLAGS")]
  mode: Option<String>,

  /// Log more detail to stderr (repeat for more)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

/// Writes log records to stderr.
struct StderrLogger {
  level: LevelFilter,
}

impl Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= self.level
  }

  fn log(&self, record: &Record<'_>) {
    if self.enabled(record.metadata()) {
      let _ = writeln!(std::io::stderr(), "[{}] {}", record.level(), record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
  let level = match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  log::set_boxed_logger(Box::new(StderrLogger { level }))?;
  log::set_max_level(level);
  Ok(())
}

fn resolve_mode(args: &Args) -> Result<ConversionMode, yard::Error> {
  let mut mode = match args.mode.as_deref() {
    Some(flags) => flags.parse()?,
    None => ConversionMode::default(),
  };
  let mut from_switches = ConversionMode::new();
  from_switches.set_right_assoc_power(args.right_assoc_power);
  from_switches.set_strict_parens(args.strict_parens);
  from_switches.set_skip_whitespace(args.skip_whitespace);
  from_switches.set_reject_unrecognized(args.reject_unrecognized);
  mode.merge(from_switches);
  Ok(mode)
}

fn main() -> anyhow::Result<ExitCode> {
  let args = Args::parse();
  init_logging(args.verbose)?;

  let mode = resolve_mode(&args)?;
  info!("Conversion mode: {:?}", mode);
  let converter = Converter::with_mode(mode);

  println!("Infix Expression: {}", args.expression);
  match converter.convert(&args.expression) {
    Ok(postfix) => {
      println!("Postfix Expression: {}", postfix);
      Ok(ExitCode::SUCCESS)
    }
    Err(err) => {
      warn!("{}", err);
      println!("Postfix Expression: {}", INVALID_EXPRESSION);
      Ok(ExitCode::FAILURE)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mode_for(argv: &[&str]) -> Result<ConversionMode, yard::Error> {
    let args = Args::try_parse_from(argv.iter().copied()).unwrap();
    resolve_mode(&args)
  }

  #[test]
  fn test_default_expression() {
    let args = Args::try_parse_from(["yard"]).unwrap();
    assert_eq!(args.expression, "a+b*(c^d-e)");
    assert_eq!(args.verbose, 0);
  }

  #[test]
  fn test_switches_set_flags() {
    let mode = mode_for(&["yard", "--right-assoc-power", "--skip-whitespace", "--mode", ",", "a^b"]).unwrap();
    assert!(mode.has_right_assoc_power());
    assert!(mode.has_skip_whitespace());
    assert!(!mode.has_strict_parens());
    assert!(!mode.has_reject_unrecognized());
  }

  #[test]
  fn test_mode_list_merges_with_switches() {
    let mode = mode_for(&["yard", "--mode", "strict-parens,reject-unrecognized", "--right-assoc-power"]).unwrap();
    assert!(mode.has_strict_parens());
    assert!(mode.has_reject_unrecognized());
    assert!(mode.has_right_assoc_power());
    assert!(!mode.has_skip_whitespace());
  }

  #[test]
  fn test_unknown_mode_flag() {
    let err = mode_for(&["yard", "--mode", "strict-parens,lenient"]).unwrap_err();
    assert!(matches!(err, yard::Error::ModeError(_)));
    assert_eq!(err.to_string(), "Unknown conversion mode flag 'lenient'");
  }

  #[test]
  fn test_verbose_count() {
    let args = Args::try_parse_from(["yard", "-vv", "a+b"]).unwrap();
    assert_eq!(args.verbose, 2);
    assert_eq!(args.expression, "a+b");
  }
}
