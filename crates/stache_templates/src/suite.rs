//! Running example fixtures against the renderer.

use stache_core::{CompiledTemplate, Renderer};
use tracing::debug;

use crate::loader::Example;

/// The result of rendering one example.
#[derive(Debug, Clone)]
pub struct ExampleOutcome {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    /// Rendered output, if the template compiled.
    pub actual: Option<String>,
    /// Compile error, if the template did not compile.
    pub error: Option<String>,
}

impl Example {
    /// Compile and render this example, comparing against the expected output.
    pub fn run(&self) -> ExampleOutcome {
        let mut outcome = ExampleOutcome {
            name: self.name.clone(),
            passed: false,
            expected: self.expected.clone(),
            actual: None,
            error: None,
        };

        match CompiledTemplate::compile(self.template.as_str()) {
            Ok(template) => {
                let actual = Renderer::new()
                    .with_partials(&self.partials)
                    .render(&template, &self.data);
                outcome.passed = actual == self.expected;
                outcome.actual = Some(actual);
            }
            Err(e) => outcome.error = Some(e.to_string()),
        }

        debug!("Example {} passed: {}", outcome.name, outcome.passed);
        outcome
    }
}

/// A set of examples run together.
#[derive(Debug, Default)]
pub struct ExampleSuite {
    examples: Vec<Example>,
}

impl ExampleSuite {
    pub fn new(examples: Vec<Example>) -> Self {
        Self { examples }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Run every example in order.
    pub fn run(&self) -> SuiteReport {
        SuiteReport {
            outcomes: self.examples.iter().map(Example::run).collect(),
        }
    }
}

/// Outcomes of a suite run.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<ExampleOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExampleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}
