//! Per-conversion scratch state of the generator.

use std::collections::BTreeSet;

/// Names declared and modules imported during one conversion.
///
/// Sets are ordered, so iteration is sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationContext {
    declared: BTreeSet<String>,
    imports: BTreeSet<String>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an assignment target. Informational only; nothing is resolved.
    pub fn declare(&mut self, name: &str) {
        self.declared.insert(name.to_string());
    }

    pub fn import(&mut self, module: &str) {
        self.imports.insert(module.to_string());
    }

    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty()
    }

    pub fn reset(&mut self) {
        self.declared.clear();
        self.imports.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_iterate_sorted_without_duplicates() {
        let mut ctx = GenerationContext::new();
        ctx.import("sys");
        ctx.import("math");
        ctx.import("sys");
        assert_eq!(ctx.imports().collect::<Vec<_>>(), vec!["math", "sys"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut ctx = GenerationContext::new();
        ctx.declare("x");
        ctx.import("os");
        ctx.reset();
        assert!(!ctx.is_declared("x"));
        assert!(!ctx.has_imports());
    }
}
