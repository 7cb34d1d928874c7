/// EmitState: the mutable context threaded through one generation.
///
/// Owns the output sink and borrows the active registry and precedence
/// table. Each generation builds its own state; registries and tables are
/// shared read-only.
use crate::ast::{Node, NodeKind};
use crate::error::{GenerateError, Result};
use crate::precedence::PrecedenceTable;
use crate::registry::Registry;
use crate::writer::CodeWriter;

pub struct EmitState<'a> {
    writer: CodeWriter,
    registry: &'a Registry,
    precedence: &'a PrecedenceTable,
}

impl<'a> EmitState<'a> {
    pub fn new(registry: &'a Registry, precedence: &'a PrecedenceTable, writer: CodeWriter) -> Self {
        Self {
            writer,
            registry,
            precedence,
        }
    }

    /// Append text to the sink.
    pub fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub fn writer(&mut self) -> &mut CodeWriter {
        &mut self.writer
    }

    /// Dispatch `node` to the procedure registered for its own kind.
    pub fn emit(&mut self, node: &Node) -> Result<()> {
        self.emit_as(node.kind(), node)
    }

    /// Dispatch `node` to the procedure registered for `kind`. Used where a
    /// procedure formats a child with a specific procedure regardless of
    /// the child's own tag (an arrow body through `ObjectExpression`, a
    /// class expression through `ClassDeclaration`).
    pub fn emit_as(&mut self, kind: NodeKind, node: &Node) -> Result<()> {
        let procedure = self.registry.get(kind).ok_or_else(|| GenerateError::UnsupportedNodeType {
            kind,
            node: Box::new(node.clone()),
        })?;
        procedure(node, self)
    }

    /// Emit each node in order, writing `separator` between them.
    pub fn emit_joined(&mut self, nodes: &[Node], separator: &str) -> Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            self.emit(node)?;
        }
        Ok(())
    }

    /// Write `: ` and the annotation, if there is one.
    pub fn emit_annotation(&mut self, annotation: Option<&Node>) -> Result<()> {
        if let Some(annotation) = annotation {
            self.write(": ");
            self.emit(annotation)?;
        }
        Ok(())
    }

    /// Emit `node` wrapped in parentheses.
    pub fn emit_parenthesized(&mut self, node: &Node) -> Result<()> {
        self.write("(");
        self.emit(node)?;
        self.write(")");
        Ok(())
    }

    /// Precedence class of `kind` in the active table.
    pub fn precedence(&self, kind: NodeKind) -> Option<u8> {
        self.precedence.get(kind)
    }

    /// Consume the state and return the generated text.
    pub fn finish(self) -> String {
        self.writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, Leaf};

    fn ident(name: &str) -> Node {
        Node::Identifier(Identifier {
            name: name.into(),
            optional: false,
            type_annotation: None,
            decorators: vec![],
        })
    }

    fn write_name(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
        let name = node.identifier_name().unwrap_or("?").to_string();
        state.write(&name);
        Ok(())
    }

    #[test]
    fn test_emit_unsupported_reports_kind() {
        let registry = Registry::new();
        let precedence = PrecedenceTable::typescript();
        let mut state = EmitState::new(&registry, &precedence, CodeWriter::new());
        let err = state.emit(&Node::DebuggerStatement(Leaf {})).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedNodeType {
                kind: NodeKind::DebuggerStatement,
                ..
            }
        ));
    }

    #[test]
    fn test_emit_joined() {
        let mut registry = Registry::new();
        registry.register(NodeKind::Identifier, write_name);
        let precedence = PrecedenceTable::typescript();
        let mut state = EmitState::new(&registry, &precedence, CodeWriter::new());
        state.emit_joined(&[ident("a"), ident("b"), ident("c")], ", ").unwrap();
        assert_eq!(state.finish(), "a, b, c");
    }

    #[test]
    fn test_emit_as_uses_named_procedure() {
        let mut registry = Registry::new();
        registry.register(NodeKind::Literal, write_name);
        let precedence = PrecedenceTable::typescript();
        let mut state = EmitState::new(&registry, &precedence, CodeWriter::new());
        state.emit_as(NodeKind::Literal, &ident("x")).unwrap();
        assert_eq!(state.finish(), "x");
    }
}
