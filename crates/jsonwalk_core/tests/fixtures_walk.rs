#![allow(missing_docs)]

use jsonwalk::{Key, Kind, Node, Output, Path, Value, callback, rewrite, walk, walk_mut};
use jsonwalk_testkit::{JSON_FIXTURES, fixture_json, fixture_path};

fn fixture(name: &str) -> Value {
	Value::try_from(fixture_json(name)).expect("fixture converts")
}

#[test]
fn actors_fixture_exposes_expected_nodes() {
	let value = fixture("actors.json");
	let mut found = 0;

	walk(
		&value,
		&mut callback(|node: &Node<'_>| match node.path.render().as_str() {
			"Actors" => {
				assert_eq!(node.path.level(), 1);
				assert_eq!(node.kind, Kind::Array);
				assert_eq!(node.key, Some(Key::Name("Actors")));
			}
			"Actors[0].name" => {
				assert_eq!(node.value.as_str(), Some("Tom Cruise"));
				assert_eq!(node.path.level(), 3);
				found += 1;
			}
			"Actors[0].wife" => {
				assert_eq!(node.kind, Kind::Null);
				assert_eq!(node.path.level(), 3);
				found += 1;
			}
			"Actors[0].children" => {
				let names: Vec<&str> = node.value.as_array().expect("children array").iter().filter_map(Value::as_str).collect();
				assert_eq!(names, vec!["Suri", "Isabella Jane", "Connor"]);
				found += 1;
			}
			"Actors[1].name" => {
				assert_eq!(node.value.as_str(), Some("Robert Downey Jr."));
				assert_eq!(node.key, Some(Key::Name("name")));
				found += 1;
			}
			"Actors[1].Born At" => {
				assert_eq!(node.value.as_str(), Some("New York City, NY"));
				found += 1;
			}
			_ => {}
		}),
	)
	.expect("walk succeeds");

	assert_eq!(found, 5);
}

#[test]
fn every_fixture_prints_one_line_per_node() {
	for name in JSON_FIXTURES {
		let value = fixture(name);

		let mut nodes = 0_usize;
		walk(&value, &mut callback(|_: &Node<'_>| nodes += 1)).expect("walk succeeds");

		let mut output = Output::new(Vec::new());
		walk(&value, &mut output).expect("print walk succeeds");
		let text = String::from_utf8(output.finish().expect("writes succeed")).expect("utf8 output");

		assert_eq!(text.lines().count(), nodes, "line count mismatch for {name}");
		assert!(text.starts_with("(object)\n"), "object root header missing for {name}");
	}
}

#[test]
fn rewriting_fixture_survives_serialization() {
	let mut value = fixture("employees.json");
	let target = Path::parse("employees[1].location").expect("path parses");

	walk_mut(
		&mut value,
		&mut rewrite(|node: &Node<'_>| (*node.path == target).then(|| Value::from("Canada"))),
	)
	.expect("mutating walk succeeds");

	let text = serde_json::to_string(&value).expect("document serializes");
	let round: serde_json::Value = serde_json::from_str(&text).expect("output is json");
	assert_eq!(round["employees"][1]["location"], "Canada");
	assert_eq!(round["employees"][2]["location"], "USA");
	assert_eq!(round["employees"][0]["id"], 1);
}

#[test]
fn fixture_files_load_through_input_layer() {
	for name in JSON_FIXTURES {
		let loaded = jsonwalk::load(&fixture_path(name)).expect("fixture loads");
		assert_eq!(loaded, fixture(name), "load mismatch for {name}");
	}
}
