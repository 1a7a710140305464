//! Integration tests for compiling and rendering templates.

use std::sync::Arc;
use std::thread;

use serde_json::json;

use stache_core::{
    compile, render, CompileError, CompiledTemplate, ParseErrorKind, PartialMap, Renderer, Value,
};

fn data(value: serde_json::Value) -> Value {
    Value::from(value)
}

/// The classic list rendering with a trailing flag on the final element.
#[test]
fn test_mustaches_list() {
    let template = compile(
        "{{#mustaches}}{{#last}}and {{/last}}{{type}}{{^last}}, {{/last}}{{/mustaches}}",
    )
    .unwrap();
    let context = data(json!({
        "mustaches": [
            {"type": "Natural"},
            {"type": "Hungarian"},
            {"type": "Dali"},
            {"type": "English"},
            {"type": "Imperial"},
            {"type": "Freestyle", "last": "true"},
        ]
    }));

    assert_eq!(
        render(&template, &context),
        "Natural, Hungarian, Dali, English, Imperial, and Freestyle"
    );
}

#[test]
fn test_templates_without_tags_render_verbatim() {
    let context = data(json!({"anything": 1}));
    for source in ["", "foo", "multi\nline\n", "} { }} {"] {
        let template = compile(source).unwrap();
        assert_eq!(render(&template, &context), source);
    }
}

#[test]
fn test_structural_errors() {
    match compile("{{#a}}x") {
        Err(CompileError::Parse(err)) => {
            assert_eq!(err.kind, ParseErrorKind::UnclosedSection);
            assert_eq!(err.name, "a");
        }
        other => panic!("expected unclosed section, got {:?}", other),
    }

    match compile("{{#a}}x{{/b}}") {
        Err(CompileError::Parse(err)) => {
            assert_eq!(err.kind, ParseErrorKind::UnbalancedSection);
            assert_eq!(err.name, "b");
        }
        other => panic!("expected unbalanced section, got {:?}", other),
    }

    assert!(matches!(compile("{{name"), Err(CompileError::Lex(_))));
}

#[test]
fn test_shadowing_restores_outer_scope() {
    let template = compile("{{name}}|{{#people}}{{name}}/{{title}}|{{/people}}{{name}}").unwrap();
    let context = data(json!({
        "name": "host",
        "title": "Dr",
        "people": [{"name": "Karl", "title": "Mr"}, {"name": "Groucho"}]
    }));

    assert_eq!(render(&template, &context), "host|Karl/Mr|Groucho/Dr|host");
}

#[test]
fn test_nested_lists() {
    let template =
        compile("{{#rows}}[{{#cells}}{{v}}{{^last}},{{/last}}{{/cells}}]{{/rows}}").unwrap();
    let context = data(json!({
        "rows": [
            {"cells": [{"v": 1}, {"v": 2, "last": true}]},
            {"cells": []},
            {"cells": [{"v": 3, "last": true}]}
        ]
    }));

    assert_eq!(render(&template, &context), "[1,2][][3]");
}

#[test]
fn test_partials_render_against_current_scope() {
    let partials = PartialMap::new()
        .with_source("user", "{{name}}{{#admin}} (admin){{/admin}}")
        .unwrap()
        .with_source("list", "<ul>{{#users}}<li>{{> user}}</li>{{/users}}</ul>")
        .unwrap();
    let template = compile("{{> list}}{{> missing}}").unwrap();
    let context = data(json!({
        "users": [{"name": "Karl", "admin": true}, {"name": "Frank"}]
    }));

    let output = Renderer::new().with_partials(&partials).render(&template, &context);
    assert_eq!(output, "<ul><li>Karl (admin)</li><li>Frank</li></ul>");
}

#[test]
fn test_concurrent_renders_share_template() {
    let template = Arc::new(compile("{{#items}}{{n}}{{/items}}").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let template = Arc::clone(&template);
            thread::spawn(move || {
                let context = data(json!({"items": [{"n": i}, {"n": i}]}));
                render(&template, &context)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("{i}{i}"));
    }
}

#[test]
fn test_compiled_template_is_reusable() {
    let template = CompiledTemplate::compile("{{first_name}} {{last_name}}").unwrap();

    let chaplin = data(json!({"first_name": "Charlie", "last_name": "Chaplin"}));
    let zappa = data(json!({"first_name": "Frank", "last_name": "Zappa"}));

    assert_eq!(template.render(&chaplin), "Charlie Chaplin");
    assert_eq!(template.render(&zappa), "Frank Zappa");
    assert_eq!(template.render(&chaplin), "Charlie Chaplin");
}
