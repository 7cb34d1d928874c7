/// Dispatch registry: node kind → emission procedure.
///
/// A registry is built once and then only read. The typed grammar is an
/// extension registry layered over the base one; layering copies the base
/// and lets the extension's entries win, so resolution is "extension first,
/// then base" without a second lookup at emit time.
use std::collections::HashMap;

use tracing::trace;

use crate::ast::{Node, NodeKind};
use crate::context::EmitState;
use crate::error::Result;

/// Writes the source text of one node.
pub type EmitFn = fn(&Node, &mut EmitState<'_>) -> Result<()>;

#[derive(Clone, Default)]
pub struct Registry {
    procedures: HashMap<NodeKind, EmitFn>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `procedure` for `kind`. A later registration for the same
    /// kind replaces the earlier one.
    pub fn register(&mut self, kind: NodeKind, procedure: EmitFn) -> &mut Self {
        if self.procedures.insert(kind, procedure).is_some() {
            trace!(kind = kind.as_str(), "replaced emission procedure");
        }
        self
    }

    /// Register one procedure for several kinds.
    pub fn register_all(&mut self, kinds: &[NodeKind], procedure: EmitFn) -> &mut Self {
        for &kind in kinds {
            self.register(kind, procedure);
        }
        self
    }

    pub fn get(&self, kind: NodeKind) -> Option<EmitFn> {
        self.procedures.get(&kind).copied()
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.procedures.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }

    /// Kinds with a procedure, sorted.
    pub fn kinds(&self) -> Vec<NodeKind> {
        let mut kinds: Vec<_> = self.procedures.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// A new registry holding this one's procedures overridden by
    /// `extension`'s.
    pub fn layer(&self, extension: &Registry) -> Registry {
        let mut merged = self.clone();
        for (&kind, &procedure) in &extension.procedures {
            merged.procedures.insert(kind, procedure);
        }
        trace!(
            base = self.len(),
            extension = extension.len(),
            merged = merged.len(),
            "layered registry"
        );
        merged
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Leaf;
    use crate::precedence::PrecedenceTable;
    use crate::writer::CodeWriter;

    fn write_a(_: &Node, state: &mut EmitState<'_>) -> Result<()> {
        state.write("a");
        Ok(())
    }

    fn write_b(_: &Node, state: &mut EmitState<'_>) -> Result<()> {
        state.write("b");
        Ok(())
    }

    fn run(registry: &Registry, node: &Node) -> String {
        let precedence = PrecedenceTable::typescript();
        let mut state = EmitState::new(registry, &precedence, CodeWriter::new());
        state.emit(node).unwrap();
        state.finish()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = Registry::new();
        registry.register(NodeKind::ThisExpression, write_a);
        assert!(registry.contains(NodeKind::ThisExpression));
        assert!(registry.get(NodeKind::Literal).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = Registry::new();
        registry
            .register(NodeKind::ThisExpression, write_a)
            .register(NodeKind::ThisExpression, write_b);
        assert_eq!(registry.len(), 1);
        assert_eq!(run(&registry, &Node::ThisExpression(Leaf {})), "b");
    }

    #[test]
    fn test_layer_prefers_extension() {
        let mut base = Registry::new();
        base.register_all(&[NodeKind::ThisExpression, NodeKind::Super], write_a);
        let mut extension = Registry::new();
        extension.register(NodeKind::Super, write_b);

        let merged = base.layer(&extension);
        assert_eq!(run(&merged, &Node::ThisExpression(Leaf {})), "a");
        assert_eq!(run(&merged, &Node::Super(Leaf {})), "b");
        // the base is left untouched
        assert_eq!(run(&base, &Node::Super(Leaf {})), "a");
    }

    #[test]
    fn test_kinds_sorted() {
        let mut registry = Registry::new();
        registry.register(NodeKind::Literal, write_a);
        registry.register(NodeKind::Program, write_a);
        assert_eq!(registry.kinds(), vec![NodeKind::Program, NodeKind::Literal]);
    }
}
