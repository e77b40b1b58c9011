//! Declare-vs-reassign tracking for one statement sequence.
//!
//! A `Scope` is an immutable value threaded through the block walker. Every
//! nested body renders against a fork, so bindings made inside a branch or
//! loop never leak back out, while names already visible at the fork point
//! remain visible to the child.

use std::collections::HashSet;

use super::emit::Stmt;

/// Set of variable names visible to the statement currently being emitted.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    names: HashSet<String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope seeded with a function's parameter names.
    pub fn seeded<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            names: params.into_iter().map(str::to_string).collect(),
        }
    }

    /// Independent copy for a nested body. Mutations of the fork are
    /// invisible to this scope and to sibling forks taken from it.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Copy extended with an implicit binding (loop item or counter).
    pub fn with(&self, name: &str) -> Self {
        let mut forked = self.clone();
        forked.names.insert(name.to_string());
        forked
    }

    /// Bind `name` to `initializer`: a declaration plus an extended scope on
    /// first sight, a plain reassignment plus the unchanged scope afterwards.
    pub fn bind(&self, name: &str, initializer: impl Into<String>) -> (Stmt, Scope) {
        if self.contains(name) {
            (Stmt::assign(name, initializer), self.clone())
        } else {
            (Stmt::decl(name, initializer), self.with(name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::emit::{DeclKw, Stmt};

    #[test]
    fn first_bind_declares_second_reassigns() {
        let scope = Scope::new();
        let (stmt, scope) = scope.bind("total", "0");
        assert!(matches!(stmt, Stmt::Decl { kw: DeclKw::Let, .. }));

        let (stmt, scope) = scope.bind("total", "1");
        assert!(matches!(stmt, Stmt::Assign { .. }));
        assert!(scope.contains("total"));
    }

    #[test]
    fn fork_mutations_stay_in_the_fork() {
        let parent = Scope::seeded(["x"]);
        let child = parent.fork().with("y");

        assert!(child.contains("x"));
        assert!(child.contains("y"));
        assert!(!parent.contains("y"));
    }

    #[test]
    fn sibling_forks_are_independent() {
        let parent = Scope::new();
        let (_, left) = parent.fork().bind("v", "1");
        let right = parent.fork();

        assert!(left.contains("v"));
        assert!(!right.contains("v"));
    }
}
