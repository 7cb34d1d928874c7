/// Generation entry points: a `Generator` bundles a registry, a precedence
/// table and layout options, and turns one root node into source text.
use serde::Deserialize;
use tracing::debug;

use crate::ast::Node;
use crate::context::EmitState;
use crate::error::Result;
use crate::precedence::PrecedenceTable;
use crate::registry::Registry;
use crate::writer::CodeWriter;
use crate::{emit_js, emit_ts};

/// Output layout. Loadable from JSON; absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// One indentation unit.
    pub indent: String,
    pub line_end: String,
    /// Depth the root starts at.
    pub starting_indent_level: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            line_end: "\n".into(),
            starting_indent_level: 0,
        }
    }
}

/// Immutable once built, so one generator can serve many threads; every
/// call to [`Generator::generate`] owns its own state and sink.
#[derive(Debug, Clone)]
pub struct Generator {
    registry: Registry,
    precedence: PrecedenceTable,
    options: GenerateOptions,
}

impl Generator {
    pub fn new(registry: Registry, precedence: PrecedenceTable) -> Self {
        Self {
            registry,
            precedence,
            options: GenerateOptions::default(),
        }
    }

    /// The typed grammar: the extension registry layered over the base.
    pub fn typescript() -> Self {
        Self::new(emit_ts::registry(), PrecedenceTable::typescript())
    }

    /// The untyped grammar only.
    pub fn javascript() -> Self {
        Self::new(emit_js::registry(), PrecedenceTable::javascript())
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Emit `root` and return the text. On failure nothing is returned.
    pub fn generate(&self, root: &Node) -> Result<String> {
        let writer = CodeWriter::with_layout(
            &self.options.indent,
            &self.options.line_end,
            self.options.starting_indent_level,
        );
        let mut state = EmitState::new(&self.registry, &self.precedence, writer);
        state.emit(root)?;
        let output = state.finish();
        debug!(root = root.kind().as_str(), bytes = output.len(), "generated source");
        Ok(output)
    }

    /// Parse ESTree JSON text and emit it.
    pub fn generate_json(&self, text: &str) -> Result<String> {
        let root = Node::from_json(text)?;
        self.generate(&root)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::typescript()
    }
}

/// Emit `root` with the typed grammar and default layout.
pub fn generate(root: &Node) -> Result<String> {
    Generator::typescript().generate(root)
}

/// Parse ESTree JSON text and emit it with the typed grammar.
pub fn generate_json(text: &str) -> Result<String> {
    Generator::typescript().generate_json(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::ast::NodeKind;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        Node::from_value(value).unwrap()
    }

    #[test]
    fn test_options_defaults_fill_missing_fields() {
        let options: GenerateOptions = serde_json::from_str(r#"{"indent": "\t"}"#).unwrap();
        assert_eq!(options.indent, "\t");
        assert_eq!(options.line_end, "\n");
        assert_eq!(options.starting_indent_level, 0);
    }

    #[test]
    fn test_options_camel_case_keys() {
        let options: GenerateOptions =
            serde_json::from_str(r#"{"lineEnd": "\r\n", "startingIndentLevel": 2}"#).unwrap();
        assert_eq!(options.line_end, "\r\n");
        assert_eq!(options.starting_indent_level, 2);
    }

    #[test]
    fn test_generate_uses_layout() {
        let program = node(json!({
            "type": "Program",
            "body": [{
                "type": "IfStatement",
                "test": {"type": "Identifier", "name": "a"},
                "consequent": {"type": "BlockStatement", "body": [{"type": "DebuggerStatement"}]}
            }]
        }));
        let generator = Generator::typescript().with_options(GenerateOptions {
            indent: "\t".into(),
            line_end: "\r\n".into(),
            starting_indent_level: 1,
        });
        assert_eq!(
            generator.generate(&program).unwrap(),
            "\tif (a) {\r\n\t\tdebugger;\r\n\t}\r\n"
        );
    }

    #[test]
    fn test_javascript_rejects_typed_nodes() {
        let keyword = node(json!({"type": "TSStringKeyword"}));
        let err = Generator::javascript().generate(&keyword).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedNodeType {
                kind: NodeKind::TSStringKeyword,
                ..
            }
        ));
    }

    #[test]
    fn test_generate_json_reports_bad_input() {
        let err = generate_json(r#"{"type": "NoSuchNode"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Json(_)));
    }

    #[test]
    fn test_generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Generator>();
    }
}
