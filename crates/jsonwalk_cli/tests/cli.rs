#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::{Command, Output};

use jsonwalk_testkit::{fixture_path, fixture_text};
use serde_json::Value;

#[test]
fn print_renders_indented_tree() {
	let stdout = run_ok(&["print", &actors()]);

	let mut lines = stdout.lines();
	assert_eq!(lines.next(), Some("(object)"));
	assert_eq!(lines.next(), Some("\"Actors\" |Actors| (string:array)"));
	assert_eq!(lines.next(), Some("  0 |Actors[0]| (0:object)"));
	assert!(stdout.contains("    \"name\": \"Tom Cruise\" |Actors[0].name| (string:string)\n"));
	assert!(stdout.contains("      0: \"Suri\" |Actors[0].children[0]| (0:string)\n"));
	assert_eq!(stdout.lines().count(), 28);
}

#[test]
fn paths_json_lists_every_node_with_level() {
	let json = run_json(&["paths", &actors(), "--json"]);
	let rows = json.as_array().expect("rows array");

	assert_eq!(rows.len(), 28);
	assert_eq!(rows[0]["path"], "");
	assert_eq!(rows[0]["level"], 0);
	assert_eq!(rows[0]["kind"], "object");
	assert!(rows.iter().any(|row| row["path"] == "Actors[1].Born At" && row["level"] == 3 && row["kind"] == "string"));
}

#[test]
fn print_pointer_flag_switches_location_format() {
	let stdout = run_ok(&["print", &actors(), "--pointer"]);

	assert!(stdout.starts_with("(object)\n\"Actors\" |/Actors| (string:array)\n"));
	assert!(stdout.contains("    \"Born At\": \"Syracuse, NY\" |/Actors/0/Born At| (string:string)\n"));
}

#[test]
fn paths_pointer_rows_use_json_pointers() {
	let stdout = run_ok(&["paths", &actors(), "--kind", "array", "--pointer"]);
	assert_eq!(stdout, "level\tkind\tpath\n1\tarray\t/Actors\n3\tarray\t/Actors/0/children\n3\tarray\t/Actors/1/children\n");
}

#[test]
fn paths_kind_filter_keeps_matching_rows() {
	let stdout = run_ok(&["paths", &actors(), "--kind", "array"]);

	assert_eq!(stdout, "level\tkind\tpath\n1\tarray\tActors\n3\tarray\tActors[0].children\n3\tarray\tActors[1].children\n");
}

#[test]
fn get_prints_single_value() {
	let stdout = run_ok(&["get", &actors(), "--path", "Actors[1].name"]);
	assert_eq!(stdout, "\"Robert Downey Jr.\"\n");
}

#[test]
fn get_json_maps_each_path_to_value() {
	let json = run_json(&["get", &actors(), "--path", "Actors[0].age", "--path", "Actors[0].wife", "--json"]);

	assert_eq!(json["Actors[0].age"], 56);
	assert!(json["Actors[0].wife"].is_null());
}

#[test]
fn get_missing_path_fails() {
	let output = run(&["get", &actors(), "--path", "Actors[9]"]);

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: path not found: Actors[9]"), "stderr: {stderr}");
}

#[test]
fn get_and_set_help_explain_unaddressable_keys() {
	for command in ["get", "set"] {
		let stdout = run_ok(&[command, "--help"]);
		assert!(stdout.contains("cannot be addressed"), "{command} help: {stdout}");
	}
}

#[test]
fn set_rewrites_value_in_place() {
	let json = run_json(&["set", &actors(), "--path", "Actors[0].age", "--value", "57"]);

	assert_eq!(json["Actors"][0]["age"], 57);
	assert_eq!(json["Actors"][1]["age"], 53);
	assert_eq!(json["Actors"][0]["name"], "Tom Cruise");
}

#[test]
fn set_may_change_node_kind() {
	let json = run_json(&["set", &actors(), "--path", "Actors[1].children", "--value", "{\"count\":3}"]);
	assert_eq!(json["Actors"][1]["children"]["count"], 3);
}

#[test]
fn set_rejects_root_path() {
	let output = run(&["set", &actors(), "--path", "", "--value", "1"]);
	assert_eq!(output.status.code(), Some(1));
}

#[test]
fn check_summarizes_kinds() {
	let json = run_json(&["check", &actors(), "--json"]);

	assert_eq!(json["nodes"], 28);
	assert_eq!(json["max_level"], 4);
	assert_eq!(json["kinds"]["object"], 3);
	assert_eq!(json["kinds"]["array"], 3);
	assert_eq!(json["kinds"]["string"], 13);
	assert_eq!(json["kinds"]["number"], 4);
	assert_eq!(json["kinds"]["bool"], 4);
	assert_eq!(json["kinds"]["null"], 1);
}

#[test]
fn check_enforces_max_depth_flag() {
	let output = run(&["--max-depth", "2", "check", &actors()]);

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("walk depth exceeded (max=2)"), "stderr: {stderr}");
}

#[test]
fn max_depth_flag_applies_while_decoding() {
	let path = temp_file("deep.json");
	std::fs::write(&path, format!("{}{}", "[".repeat(200), "]".repeat(200))).expect("write deep document");
	let file = path.display().to_string();

	let json = run_json(&["--max-depth", "300", "check", &file, "--json"]);
	assert_eq!(json["max_level"], 199);
	assert_eq!(json["kinds"]["array"], 200);

	let output = run(&["--max-depth", "150", "check", &file]);
	let _ = std::fs::remove_file(&path);

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("walk depth exceeded (max=150)"), "stderr: {stderr}");
}

#[test]
fn zstd_input_is_detected() {
	let compressed = zstd::encode_all(fixture_text("actors.json").as_bytes(), 3).expect("compress fixture");
	let path = temp_file("actors.json.zst");
	std::fs::write(&path, compressed).expect("write compressed fixture");

	let stdout = run_ok(&["get", &path.display().to_string(), "--path", "Actors[0].name"]);
	let _ = std::fs::remove_file(&path);

	assert_eq!(stdout, "\"Tom Cruise\"\n");
}

#[test]
fn malformed_json_reports_error() {
	let path = temp_file("broken.json");
	std::fs::write(&path, "{\"a\": [1, 2").expect("write broken document");

	let output = run(&["print", &path.display().to_string()]);
	let _ = std::fs::remove_file(&path);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: json:"));
}

fn actors() -> String {
	fixture_path("actors.json").display().to_string()
}

fn temp_file(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("jsonwalk-cli-{}-{name}", std::process::id()))
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_jsonwalk")).args(args).output().expect("command executes")
}

fn run_ok(args: &[&str]) -> String {
	let output = run(args);
	assert!(output.status.success(), "command failed: {}", String::from_utf8_lossy(&output.stderr));
	String::from_utf8(output.stdout).expect("stdout is utf-8")
}

fn run_json(args: &[&str]) -> Value {
	let stdout = run_ok(args);
	serde_json::from_str(&stdout).expect("stdout is valid json")
}
