//! Integration tests for example fixtures and template objects.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use stache_core::Value;
use stache_templates::{
    DirectoryPartials, ExampleLoader, ExampleSuite, Mustache, TemplateCache, TemplateError,
};
use tempfile::tempdir;

fn get_fixtures_path() -> String {
    // Try to find fixtures directory relative to workspace
    let candidates = ["fixtures", "../fixtures", "../../fixtures", "../../../fixtures"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return candidate.to_string();
        }
    }

    "fixtures".to_string()
}

#[test]
fn test_load_fixtures() {
    let loader = ExampleLoader::new(get_fixtures_path());
    let examples = loader.load_all().unwrap();

    let names: Vec<_> = examples.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"mustaches"));
    assert!(names.contains(&"partials"));

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_all_fixtures_pass() {
    let loader = ExampleLoader::new(get_fixtures_path());
    let suite = ExampleSuite::new(loader.load_all().unwrap());
    assert!(!suite.examples().is_empty());

    let report = suite.run();
    for failure in report.failures() {
        eprintln!(
            "{}: expected {:?}, got {:?} ({:?})",
            failure.name, failure.expected, failure.actual, failure.error
        );
    }
    assert!(report.all_passed());
}

#[test]
fn test_partials_fixture_has_partials() {
    let loader = ExampleLoader::new(get_fixtures_path());
    let example = loader.load("partials").unwrap();
    assert_eq!(example.partials.names(), vec!["user"]);
}

#[test]
fn test_unknown_example() {
    let loader = ExampleLoader::new(get_fixtures_path());
    assert!(matches!(
        loader.load("nonexistent-example"),
        Err(TemplateError::NotFound(_))
    ));
}

#[test]
fn test_broken_examples_are_skipped() {
    let temp = tempdir().unwrap();

    let good = temp.path().join("good");
    fs::create_dir(&good).unwrap();
    fs::write(good.join("good.mustache"), "{{greeting}}").unwrap();
    fs::write(good.join("good.json"), r#"{"greeting": "hi"}"#).unwrap();
    fs::write(good.join("good.txt"), "hi").unwrap();

    let no_output = temp.path().join("no_output");
    fs::create_dir(&no_output).unwrap();
    fs::write(no_output.join("no_output.mustache"), "x").unwrap();

    let empty = temp.path().join("empty");
    fs::create_dir(&empty).unwrap();

    let examples = ExampleLoader::new(temp.path()).load_all().unwrap();
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0].name, "good");
    assert!(ExampleSuite::new(examples).run().all_passed());
}

#[test]
fn test_mustache_with_directory_partials() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("row.mustache"), "<tr>{{name}}</tr>").unwrap();

    let partials = DirectoryPartials::load(temp.path()).unwrap();
    let cache = Arc::new(TemplateCache::new());
    let m = Mustache::new()
        .with_template("<table>{{#rows}}{{> row}}{{/rows}}</table>")
        .with_partials(Arc::new(partials))
        .with_cache(cache.clone());

    let data = Value::mapping().with(
        "rows",
        vec![
            Value::mapping().with("name", "a"),
            Value::mapping().with("name", "b"),
        ],
    );
    assert_eq!(
        m.render(None, Some(&data)).unwrap(),
        "<table><tr>a</tr><tr>b</tr></table>"
    );
    assert_eq!(cache.len(), 1);
}
