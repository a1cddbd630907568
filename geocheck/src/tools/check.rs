use anyhow::{Context, Result, bail};
use colored::Colorize;
use futures::StreamExt;
use geocheck::Config;
use geocheck_core::json::{parse_json_reader, read_ndjson_stream};
use geocheck_geometry::{ValidationReport, Validator};
use std::{
	fs::File,
	io::{BufRead, BufReader, Write},
	path::PathBuf,
	pin::pin,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// One or more GeoJSON files you want to check.
	/// Use "-" to read from stdin.
	#[arg(num_args = 1.., required = true, verbatim_doc_comment)]
	pub inputs: Vec<String>,

	/// Path to a configuration file (YAML format).
	/// Command line arguments will override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	pub config: Option<PathBuf>,

	/// Read the inputs as newline-delimited GeoJSON, one object per line
	#[arg(short = 'l', long, display_order = 1)]
	pub ndjson: bool,

	/// do not check the right-hand rule of polygons
	#[arg(long, display_order = 2)]
	pub no_winding: bool,

	/// reject top-level types other than Feature and FeatureCollection
	#[arg(long, display_order = 2)]
	pub strict: bool,

	/// report all violations, not only the first one
	#[arg(short = 'a', long, display_order = 2)]
	pub all: bool,

	/// reject feature collections with more than N features
	#[arg(long, value_name = "N", display_order = 2)]
	pub max_features: Option<usize>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let validator = Validator::new(load_config(arguments)?.to_options());
	log::debug!("checking with {:?}", validator.options());

	let mut stdout = std::io::stdout().lock();
	let failures = check_inputs(arguments, &validator, &mut stdout).await?;
	if failures > 0 {
		bail!("{failures} of the checked GeoJSON values are not valid");
	}
	Ok(())
}

fn load_config(arguments: &Subcommand) -> Result<Config> {
	let mut config = if let Some(config_path) = &arguments.config {
		Config::from_path(config_path)?
	} else {
		Config::default()
	};

	config.override_optional_check_winding(arguments.no_winding.then_some(false));
	config.override_optional_strict(arguments.strict.then_some(true));
	config.override_optional_collect_all(arguments.all.then_some(true));
	config.override_optional_max_features(arguments.max_features);
	Ok(config)
}

fn open_input(input: &str) -> Result<Box<dyn BufRead>> {
	if input == "-" {
		return Ok(Box::new(std::io::stdin().lock()));
	}
	let file = File::open(input).with_context(|| format!("failed to open {input:?}"))?;
	Ok(Box::new(BufReader::new(file)))
}

/// Checks every input and prints one line per GeoJSON value. Returns the number of values that
/// are invalid or could not be read.
async fn check_inputs(arguments: &Subcommand, validator: &Validator, out: &mut impl Write) -> Result<usize> {
	let mut failures = 0;

	for input in &arguments.inputs {
		let name = if input == "-" { "<stdin>" } else { input.as_str() };
		log::info!("checking {name}");

		let reader = match open_input(input) {
			Ok(reader) => reader,
			Err(error) => {
				print_result(out, name, validator, Err(error))?;
				failures += 1;
				continue;
			}
		};

		if arguments.ndjson {
			let mut stream = pin!(read_ndjson_stream(reader));
			while let Some((line_number, value)) = stream.next().await {
				let report = value.map(|value| validator.validate(&value));
				if !print_result(out, &format!("{name}:{line_number}"), validator, report)? {
					failures += 1;
				}
			}
		} else {
			let report = parse_json_reader(reader)
				.with_context(|| format!("failed to read {name}"))
				.map(|value| validator.validate(&value));
			if !print_result(out, name, validator, report)? {
				failures += 1;
			}
		}
	}

	Ok(failures)
}

/// Prints the outcome for one value and returns whether it was valid.
fn print_result(out: &mut impl Write, name: &str, validator: &Validator, report: Result<ValidationReport>) -> Result<bool> {
	let report = match report {
		Ok(report) => report,
		Err(error) => {
			writeln!(out, "{name}: {}: {error:#}", "error".red())?;
			return Ok(false);
		}
	};

	match report.violations() {
		[] => writeln!(out, "{name}: {}", "valid".green())?,
		violations if validator.options().collect_all => {
			writeln!(out, "{name}: {}", "invalid".red())?;
			for violation in violations {
				writeln!(out, "  {violation}")?;
			}
		}
		[violation, ..] => writeln!(out, "{name}: {}: {violation}", "invalid".red())?,
	}
	Ok(report.is_valid())
}
