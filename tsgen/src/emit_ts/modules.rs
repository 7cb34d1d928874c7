/// Typed imports and exports, ambient modules and namespaces.
use serde_json::Value;

use crate::ast::{ModuleDeclaration, Node};
use crate::context::EmitState;
use crate::emit_js::{format_block, format_export_all, format_export_named, format_import};
use crate::error::{expect_node, Result};
use crate::writer::escape_js;

pub(super) fn import_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let import = expect_node!(node, ImportDeclaration);
    format_import(state, import, true)
}

pub(super) fn export_named_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    format_export_named(state, node, true)
}

pub(super) fn export_all_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    format_export_all(state, node, true)
}

/// `import(source[, options])`. The options come either as the first
/// extra positional argument or as a named `options` expression.
pub(super) fn import_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let import = expect_node!(node, ImportExpression);
    state.write("import(");
    state.emit(&import.source)?;
    if let Some(argument) = import.arguments.first() {
        state.write(", ");
        state.emit(argument)?;
    }
    if let Some(options) = &import.options {
        state.write(", ");
        state.emit(options)?;
    }
    state.write(")");
    Ok(())
}

/// Module name: `"quoted"` for ambient modules, dotted for namespaces
/// nested the older way (`A.B` as a declaration whose body is another
/// declaration). Returns the innermost declaration, whose body is the block.
fn format_module_name<'n>(state: &mut EmitState<'_>, module: &'n ModuleDeclaration) -> Result<&'n ModuleDeclaration> {
    match &*module.id {
        Node::Literal(literal) => match &literal.value {
            Value::String(name) => {
                state.write("\"");
                state.write(&escape_js(name));
                state.write("\"");
            }
            _ => state.emit(&module.id)?,
        },
        id => state.emit(id)?,
    }
    match module.body.as_deref() {
        Some(Node::TSModuleDeclaration(inner)) => {
            state.write(".");
            format_module_name(state, inner)
        }
        _ => Ok(module),
    }
}

pub(super) fn module_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let module = expect_node!(node, TSModuleDeclaration);
    if module.declare {
        state.write("declare ");
    }
    let innermost = if module.is_global() {
        state.write("global");
        module
    } else {
        let keyword = match (&*module.id, module.kind.as_deref()) {
            (Node::Literal(_), _) | (_, Some("module")) => "module ",
            _ => "namespace ",
        };
        state.write(keyword);
        format_module_name(state, module)?
    };
    match &innermost.body {
        Some(body) => {
            state.write(" ");
            state.emit(body)
        }
        // `declare module "m";` shorthand
        None => {
            state.write(";");
            Ok(())
        }
    }
}

pub(super) fn module_block(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let block = expect_node!(node, TSModuleBlock);
    format_block(state, &block.body)
}
