//! # Calculator CLI
//!
//! Command-line front end for calc_core.
//!
//! ```text
//! calc_cli demo
//! calc_cli <op> <args...> [--precision N] [--unit radian|degree] [--float] [--json] [--config PATH]
//! calc_cli                      (interactive prompt)
//! ```
//!
//! Complex operands are written `re,im` (or `3+4i`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::{
    load_settings, AngleUnit, CalcError, CalcResult, CalculatorSettings, ComplexCalculator,
    EngineeringCalculator,
};
use num_complex::Complex64;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Operations:
  add|sub|mul|div <x> <y>...     basic arithmetic, left to right
  sqrt <x>                       square root
  pow <x> <y>                    x raised to y
  log <x> [base]                 logarithm (base 10 by default)
  ln <x>                         natural logarithm
  sin|cos|tan <angle> [unit]     trig, unit is radian or degree
  cadd|csub|cmul|cdiv <a> <b>    complex arithmetic, operands as re,im
  mag|arg|polar <a>              complex magnitude / argument / both
  rect <r> <theta>               polar to rectangular
Options:
  --precision N   --unit radian|degree   --float   --json   --config PATH";

/// Flags that apply to every command.
#[derive(Debug, Clone, Default, PartialEq)]
struct Options {
    precision: Option<u32>,
    unit: Option<AngleUnit>,
    float: bool,
    json: bool,
    config: Option<PathBuf>,
}

/// Parsed command line: global options plus the remaining words.
#[derive(Debug, Clone, Default, PartialEq)]
struct Cli {
    options: Options,
    words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    SquareRoot,
    Power,
    Log,
    Ln,
    Sin,
    Cos,
    Tan,
    ComplexAdd,
    ComplexSubtract,
    ComplexMultiply,
    ComplexDivide,
    Magnitude,
    Argument,
    Polar,
    Rectangular,
}

impl Operation {
    fn from_name(name: &str) -> Option<Self> {
        let op = match name.to_ascii_lowercase().as_str() {
            "add" => Operation::Add,
            "sub" | "subtract" => Operation::Subtract,
            "mul" | "multiply" => Operation::Multiply,
            "div" | "divide" => Operation::Divide,
            "sqrt" => Operation::SquareRoot,
            "pow" | "power" => Operation::Power,
            "log" => Operation::Log,
            "ln" => Operation::Ln,
            "sin" => Operation::Sin,
            "cos" => Operation::Cos,
            "tan" => Operation::Tan,
            "cadd" => Operation::ComplexAdd,
            "csub" => Operation::ComplexSubtract,
            "cmul" => Operation::ComplexMultiply,
            "cdiv" => Operation::ComplexDivide,
            "mag" | "magnitude" => Operation::Magnitude,
            "arg" | "argument" => Operation::Argument,
            "polar" => Operation::Polar,
            "rect" | "rectangular" => Operation::Rectangular,
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Command {
    operation: Operation,
    args: Vec<String>,
}

/// Value produced by a command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
enum Outcome {
    Real(f64),
    Complex(Complex64),
    Polar { magnitude: f64, argument: f64 },
}

/// Calculators configured for one run of the program.
struct Session {
    engineering: EngineeringCalculator,
    complex: ComplexCalculator,
    angle_unit: AngleUnit,
    json: bool,
}

impl Session {
    fn new(settings: &CalculatorSettings, json: bool) -> Self {
        Session {
            engineering: EngineeringCalculator::from_settings(settings),
            complex: ComplexCalculator::new(),
            angle_unit: settings.angle_unit,
            json,
        }
    }

    fn evaluate(&self, command: &Command) -> CalcResult<Outcome> {
        let eng = &self.engineering;
        let cplx = &self.complex;
        let args = &command.args;
        debug!(?command, "evaluating");

        let outcome = match command.operation {
            Operation::Add => Outcome::Real(eng.add(&parse_reals(args)?)?),
            Operation::Subtract => Outcome::Real(eng.subtract(&parse_reals(args)?)?),
            Operation::Multiply => Outcome::Real(eng.multiply(&parse_reals(args)?)?),
            Operation::Divide => Outcome::Real(eng.divide(&parse_reals(args)?)?),
            Operation::SquareRoot => {
                let [x] = reals::<1>("sqrt", args)?;
                Outcome::Real(eng.square_root(x)?)
            }
            Operation::Power => {
                let [x, y] = reals::<2>("pow", args)?;
                Outcome::Real(eng.power(x, y)?)
            }
            Operation::Log => match args.as_slice() {
                [x] => Outcome::Real(eng.log10(parse_real(x)?)?),
                [x, base] => Outcome::Real(eng.log(parse_real(x)?, parse_real(base)?)?),
                _ => return Err(arity_error("log", "1 or 2", args.len())),
            },
            Operation::Ln => {
                let [x] = reals::<1>("ln", args)?;
                Outcome::Real(eng.ln(x)?)
            }
            Operation::Sin | Operation::Cos | Operation::Tan => {
                let (angle, unit) = match args.as_slice() {
                    [angle] => (parse_real(angle)?, self.angle_unit),
                    [angle, unit] => (parse_real(angle)?, AngleUnit::parse_lenient(unit)),
                    _ => return Err(arity_error("trig", "1 or 2", args.len())),
                };
                let value = match command.operation {
                    Operation::Sin => eng.sin(angle, unit)?,
                    Operation::Cos => eng.cos(angle, unit)?,
                    _ => eng.tan(angle, unit)?,
                };
                Outcome::Real(value)
            }
            Operation::ComplexAdd => {
                let [a, b] = complexes::<2>("cadd", args)?;
                Outcome::Complex(cplx.add(a, b))
            }
            Operation::ComplexSubtract => {
                let [a, b] = complexes::<2>("csub", args)?;
                Outcome::Complex(cplx.subtract(a, b))
            }
            Operation::ComplexMultiply => {
                let [a, b] = complexes::<2>("cmul", args)?;
                Outcome::Complex(cplx.multiply(a, b))
            }
            Operation::ComplexDivide => {
                let [a, b] = complexes::<2>("cdiv", args)?;
                Outcome::Complex(cplx.divide(a, b)?)
            }
            Operation::Magnitude => {
                let [a] = complexes::<1>("mag", args)?;
                Outcome::Real(cplx.magnitude(a))
            }
            Operation::Argument => {
                let [a] = complexes::<1>("arg", args)?;
                Outcome::Real(cplx.argument(a))
            }
            Operation::Polar => {
                let [a] = complexes::<1>("polar", args)?;
                let (magnitude, argument) = cplx.to_polar(a);
                Outcome::Polar { magnitude, argument }
            }
            Operation::Rectangular => {
                let [r, theta] = reals::<2>("rect", args)?;
                Outcome::Complex(cplx.to_rectangular(r, theta))
            }
        };
        Ok(outcome)
    }

    fn render(&self, outcome: &Outcome) -> String {
        if self.json {
            return serde_json::to_string(outcome).unwrap_or_else(|e| format!("<unserializable: {}>", e));
        }
        let fmt = |v: f64| self.engineering.format_result(v);
        match *outcome {
            Outcome::Real(v) => fmt(v),
            Outcome::Complex(z) if z.im < 0.0 => format!("{} - {}i", fmt(z.re), fmt(-z.im)),
            Outcome::Complex(z) => format!("{} + {}i", fmt(z.re), fmt(z.im)),
            Outcome::Polar { magnitude, argument } => {
                format!("magnitude = {}, argument = {}", fmt(magnitude), fmt(argument))
            }
        }
    }

    /// Evaluate one command line's words and print the result or error.
    fn run_words(&self, words: &[String]) -> bool {
        match parse_command(words).and_then(|cmd| self.evaluate(&cmd)) {
            Ok(outcome) => {
                println!("{}", self.render(&outcome));
                true
            }
            Err(e) => {
                report_error(&e);
                false
            }
        }
    }

    fn interactive(&self) {
        println!("Calculator - type 'help' for operations, 'quit' to exit");
        let stdin = io::stdin();
        loop {
            print!("> ");
            if io::stdout().flush().is_err() {
                return;
            }

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return,
                Ok(_) => {}
            }

            let words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            match words.first().map(String::as_str) {
                None => continue,
                Some("quit") | Some("exit") => return,
                Some("help") => println!("{}", USAGE),
                Some(_) => {
                    self.run_words(&words);
                }
            }
        }
    }

    fn demo(&self) {
        let demo_lines: [(&str, &[&str]); 9] = [
            ("Add", &["add", "1", "2", "3"]),
            ("Multiply", &["mul", "2", "4", "6"]),
            ("Divide (100 / 2 / 5)", &["div", "100", "2", "5"]),
            ("Square root of 16", &["sqrt", "16"]),
            ("6 to the 3rd", &["pow", "6", "3"]),
            ("Common log of 100", &["log", "100"]),
            ("Sine of 30 degrees", &["sin", "30", "degree"]),
            ("(1+2i) + (3+4i)", &["cadd", "1,2", "3,4"]),
            ("Magnitude of 3+4i", &["mag", "3,4"]),
        ];

        println!("═══════════════════════════════════════");
        println!("  CALCULATOR DEMO");
        println!("═══════════════════════════════════════");
        for (label, words) in demo_lines {
            let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
            print!("  {:<24} ", format!("{}:", label));
            self.run_words(&words);
        }
        println!("═══════════════════════════════════════");
    }
}

fn parse_args(args: &[String]) -> CalcResult<Cli> {
    let mut cli = Cli::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--precision" => {
                let value = flag_value("--precision", iter.next())?;
                let digits = value.parse::<u32>().map_err(|_| {
                    CalcError::invalid_argument("precision", value, "Precision must be a non-negative integer")
                })?;
                cli.options.precision = Some(digits);
            }
            "--unit" => {
                let value = flag_value("--unit", iter.next())?;
                cli.options.unit = Some(AngleUnit::parse_lenient(value));
            }
            "--config" => {
                let value = flag_value("--config", iter.next())?;
                cli.options.config = Some(PathBuf::from(value));
            }
            "--float" => cli.options.float = true,
            "--json" => cli.options.json = true,
            flag if flag.starts_with("--") => {
                return Err(CalcError::invalid_argument("flag", flag, "Unknown option"));
            }
            word => cli.words.push(word.to_string()),
        }
    }
    Ok(cli)
}

fn flag_value<'a>(flag: &str, value: Option<&'a String>) -> CalcResult<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| CalcError::invalid_argument(flag, "", "Option requires a value"))
}

fn parse_command(words: &[String]) -> CalcResult<Command> {
    let Some((name, args)) = words.split_first() else {
        return Err(CalcError::invalid_argument("operation", "", "No operation given"));
    };
    let operation = Operation::from_name(name)
        .ok_or_else(|| CalcError::invalid_argument("operation", name.as_str(), "Unknown operation"))?;
    Ok(Command {
        operation,
        args: args.to_vec(),
    })
}

/// Resolve settings: config file first, then command-line overrides.
fn resolve_settings(options: &Options) -> CalcResult<CalculatorSettings> {
    let mut settings = match &options.config {
        Some(path) => load_settings(path)?,
        None => CalculatorSettings::default(),
    };
    if options.precision.is_some() {
        settings.precision = options.precision;
    }
    if let Some(unit) = options.unit {
        settings.angle_unit = unit;
    }
    if options.float {
        settings.return_float = true;
    }
    Ok(settings)
}

fn parse_real(s: &str) -> CalcResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_argument("operand", s, "Not a number"))
}

fn parse_reals(args: &[String]) -> CalcResult<Vec<f64>> {
    args.iter().map(|a| parse_real(a)).collect()
}

fn parse_complex(s: &str) -> CalcResult<Complex64> {
    if let Some((re, im)) = s.split_once(',') {
        return Ok(Complex64::new(parse_real(re)?, parse_real(im)?));
    }
    s.trim()
        .parse::<Complex64>()
        .map_err(|_| CalcError::invalid_argument("operand", s, "Not a complex number (use re,im)"))
}

fn reals<const N: usize>(operation: &str, args: &[String]) -> CalcResult<[f64; N]> {
    if args.len() != N {
        return Err(arity_error(operation, &N.to_string(), args.len()));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = parse_real(arg)?;
    }
    Ok(out)
}

fn complexes<const N: usize>(operation: &str, args: &[String]) -> CalcResult<[Complex64; N]> {
    if args.len() != N {
        return Err(arity_error(operation, &N.to_string(), args.len()));
    }
    let mut out = [Complex64::new(0.0, 0.0); N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = parse_complex(arg)?;
    }
    Ok(out)
}

fn arity_error(operation: &str, expected: &str, got: usize) -> CalcError {
    CalcError::invalid_argument(
        "args",
        got.to_string(),
        format!("{} expects {} operand(s)", operation, expected),
    )
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("{}", json);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            report_error(&e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let settings = match resolve_settings(&cli.options) {
        Ok(settings) => settings,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };
    let session = Session::new(&settings, cli.options.json);

    match cli.words.first().map(String::as_str) {
        None => {
            session.interactive();
            ExitCode::SUCCESS
        }
        Some("demo") => {
            session.demo();
            ExitCode::SUCCESS
        }
        Some("help") => {
            println!("{}", USAGE);
            ExitCode::SUCCESS
        }
        Some(_) if session.run_words(&cli.words) => ExitCode::SUCCESS,
        Some(_) => ExitCode::FAILURE,
    }
}
