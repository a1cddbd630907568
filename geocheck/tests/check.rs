#![cfg(feature = "cli")]


use assert_fs::{NamedTempFile, prelude::*};
use predicates::{prelude::*, str};
use test_utilities::*;

#[test]
fn valid_collection() {
	let input = get_testdata("valid_collection.geojson");
	geocheck_cmd()
		.args(["check", input.as_str()])
		.assert()
		.success()
		.stdout(format!("{input}: valid\n"));
}

#[test]
fn invalid_winding() {
	let input = get_testdata("clockwise_feature.geojson");
	geocheck_cmd()
		.args(["check", input.as_str()])
		.assert()
		.failure()
		.code(1)
		.stdout(str::contains(
			"invalid: coordinates do not respect the right-hand rule: exterior ring must be counterclockwise",
		))
		.stderr(str::contains("1 of the checked GeoJSON values are not valid"));

	geocheck_cmd().args(["check", "--no-winding", input.as_str()]).assert().success();
}

#[test]
fn all_violations() {
	geocheck_cmd()
		.args(["check", "--all", get_testdata("broken_collection.geojson").as_str()])
		.assert()
		.failure()
		.stdout(
			str::contains("broken_collection.geojson: invalid\n")
				.and(str::contains("  feature 0: each feature must have a geometry object\n"))
				.and(str::contains("  feature 1: each feature must be of type Feature\n"))
				.and(str::contains("  feature 2: coordinates do not respect the right-hand rule")),
		);
}

#[test]
fn stdin() {
	geocheck_cmd()
		.args(["check", "-"])
		.write_stdin(r#"{"type":"FeatureCollection","features":[]}"#)
		.assert()
		.success()
		.stdout("<stdin>: valid\n");

	geocheck_cmd()
		.args(["check", "-"])
		.write_stdin("null")
		.assert()
		.failure()
		.stdout("<stdin>: invalid: invalid input\n");
}

#[test]
fn strict_mode() {
	geocheck_cmd()
		.args(["check", "-"])
		.write_stdin(r#"{"type":"SomethingElse"}"#)
		.assert()
		.success();

	geocheck_cmd()
		.args(["check", "--strict", "-"])
		.write_stdin(r#"{"type":"SomethingElse"}"#)
		.assert()
		.failure()
		.stdout("<stdin>: invalid: Unsupported GeoJSON type: SomethingElse\n");
}

#[test]
fn ndjson() {
	let input = get_testdata("features.ndjson");
	geocheck_cmd()
		.args(["check", "--ndjson", input.as_str()])
		.assert()
		.failure()
		.stdout(
			str::contains(format!("{input}:1: valid\n"))
				.and(str::contains(format!("{input}:3: invalid: ")))
				.and(str::contains(format!("{input}:4: valid\n")))
				.and(str::contains(format!("{input}:5: error: error in line 5")))
				.and(str::contains(format!("{input}:2:")).not()),
		)
		.stderr(str::contains("2 of the checked GeoJSON values are not valid"));
}

#[test]
fn config_file() -> Result<(), Box<dyn std::error::Error>> {
	let config = NamedTempFile::new("geocheck.yml")?;
	config.write_str("check_winding: false\nmax_features: 2\n")?;
	let config_path = config.path().to_string_lossy().to_string();

	geocheck_cmd()
		.args(["check", "-c", config_path.as_str(), get_testdata("clockwise_feature.geojson").as_str()])
		.assert()
		.success();

	geocheck_cmd()
		.args(["check", "-c", config_path.as_str(), get_testdata("valid_collection.geojson").as_str()])
		.assert()
		.failure()
		.stdout(str::contains("invalid: Too many features: 4 exceeds limit 2"));

	geocheck_cmd()
		.args([
			"check",
			"-c",
			config_path.as_str(),
			"--max-features",
			"10",
			get_testdata("valid_collection.geojson").as_str(),
		])
		.assert()
		.success();
	Ok(())
}

#[test]
fn broken_config_file() -> Result<(), Box<dyn std::error::Error>> {
	let config = NamedTempFile::new("geocheck.yml")?;
	config.write_str("check_everything: true\n")?;
	let config_path = config.path().to_string_lossy().to_string();

	geocheck_cmd()
		.args([
			"check",
			"-c",
			config_path.as_str(),
			get_testdata("valid_collection.geojson").as_str(),
		])
		.assert()
		.failure()
		.stdout(str::is_empty())
		.stderr(str::contains("failed to parse config file"));
	Ok(())
}

#[test]
fn missing_file() {
	geocheck_cmd()
		.args(["check", "does-not-exist.geojson"])
		.assert()
		.failure()
		.stdout(str::contains("does-not-exist.geojson: error: failed to open"));
}
