//! # Circle Area CLI
//!
//! Computes the area of a circle from the terminal.
//!
//! ```text
//! circle_cli 10                          # radius 10
//! circle_cli 20 --type diameter
//! circle_cli 62.83 -t circumference -p 4
//! circle_cli 10 --json                   # AreaResult as JSON
//! circle_cli                             # prompts for the value
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use circle_core::{calculate, parse_input_type, parse_value, AreaResult, CalcResult, API_PRECISION};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "circle_cli")]
#[command(about = "Calculate the area of a circle from its radius, diameter or circumference")]
#[command(version)]
struct Cli {
    /// Input value; prompted for when omitted
    value: Option<String>,

    /// What VALUE measures: radius, diameter or circumference
    #[arg(short = 't', long = "type", default_value = "radius")]
    input_type: String,

    /// Decimal places shown for the area
    #[arg(short, long, default_value_t = API_PRECISION)]
    precision: u32,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input
}

fn run(cli: &Cli, raw_value: &str) -> CalcResult<AreaResult> {
    let value = parse_value(raw_value)?;
    let input_type = parse_input_type(&cli.input_type)?;
    calculate(value, input_type, cli.precision)
}

fn render_report(result: &AreaResult) -> String {
    let mut out = String::new();
    out.push_str("═══════════════════════════════════════\n");
    out.push_str("  CIRCLE AREA\n");
    out.push_str("═══════════════════════════════════════\n\n");
    out.push_str(&format!(
        "  {}: {}\n",
        result.input_type.display_name(),
        result.input_value
    ));
    out.push_str(&format!("  Formula: {}\n", result.formula));
    out.push_str(&format!("  Area:    {} square units\n\n", result.display_area()));
    out.push_str("Steps:\n");
    for step in &result.steps {
        out.push_str(&format!("  {}\n", step));
    }
    out
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let raw_value = match &cli.value {
        Some(value) => value.clone(),
        None => prompt_line(&format!("Enter {} value: ", cli.input_type)),
    };

    match run(&cli, &raw_value) {
        Ok(result) => {
            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", render_report(&result));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
