//! Scope stack used to resolve names during a render.

use crate::value::Value;

/// Ordered render scopes, innermost last.
///
/// Frames borrow from the caller's data, so a stack never outlives the render
/// call that created it.
#[derive(Debug, Clone, Default)]
pub struct ContextStack<'a> {
    frames: Vec<&'a Value>,
}

impl<'a> ContextStack<'a> {
    /// Create a stack with `root` as its only frame.
    pub fn new(root: &'a Value) -> Self {
        Self { frames: vec![root] }
    }

    pub fn push(&mut self, frame: &'a Value) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<&'a Value> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Resolve `name` against the innermost frame that has it.
    ///
    /// Frames that are not mappings never match.
    pub fn lookup(&self, name: &str) -> Option<&'a Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_innermost_wins() {
        let outer = Value::mapping().with("name", "outer").with("only_outer", 1);
        let inner = Value::mapping().with("name", "inner");

        let mut stack = ContextStack::new(&outer);
        stack.push(&inner);

        assert_eq!(stack.lookup("name"), Some(&Value::from("inner")));
        assert_eq!(stack.lookup("only_outer"), Some(&Value::from(1)));

        stack.pop();
        assert_eq!(stack.lookup("name"), Some(&Value::from("outer")));
    }

    #[test]
    fn test_scalar_frame_is_transparent() {
        let outer = Value::mapping().with("name", "outer");
        let scalar = Value::from("element");

        let mut stack = ContextStack::new(&outer);
        stack.push(&scalar);

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.lookup("name"), Some(&Value::from("outer")));
        assert_eq!(stack.lookup("missing"), None);
    }
}
