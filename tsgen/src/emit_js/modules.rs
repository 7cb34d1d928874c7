/// Module procedures: imports, exports and their attributes.
///
/// The formatting helpers take a `typed` flag: the typed grammar adds
/// `type`/`typeof` kind prefixes on declarations and specifiers, the base
/// grammar ignores them.
use crate::ast::{ImportDeclaration, Node, NodeKind};
use crate::context::EmitState;
use crate::error::{expect_node, GenerateError, Result};
use crate::format::identifier_name;

/// Write `<kind> ` unless the kind is absent or the plain value kind.
fn write_kind(state: &mut EmitState<'_>, kind: Option<&str>) {
    if let Some(kind) = kind.filter(|kind| *kind != "value") {
        state.write(kind);
        state.write(" ");
    }
}

fn export_name(node: &Node) -> Result<String> {
    node.module_export_name()
        .ok_or_else(|| GenerateError::unexpected(node, "Identifier or Literal"))
}

/// ` with { type: 'json' }`, nothing when there are no attributes.
fn format_attributes(state: &mut EmitState<'_>, attributes: &[Node]) -> Result<()> {
    if attributes.is_empty() {
        return Ok(());
    }
    state.write(" with { ");
    for (i, attribute) in attributes.iter().enumerate() {
        if i > 0 {
            state.write(", ");
        }
        state.emit_as(NodeKind::ImportAttribute, attribute)?;
    }
    state.write(" }");
    Ok(())
}

pub(crate) fn format_import(state: &mut EmitState<'_>, import: &ImportDeclaration, typed: bool) -> Result<()> {
    state.write("import ");
    if typed {
        write_kind(state, import.import_kind.as_deref());
    }
    let specifiers = &import.specifiers;
    if !specifiers.is_empty() {
        // default and namespace specifiers lead, named ones follow in braces
        let mut rest = specifiers.as_slice();
        let mut leading = 0;
        while let Some((first, tail)) = rest.split_first() {
            let local = match first {
                Node::ImportDefaultSpecifier(specifier) => identifier_name(&specifier.local)?.to_string(),
                Node::ImportNamespaceSpecifier(specifier) => format!("* as {}", identifier_name(&specifier.local)?),
                _ => break,
            };
            if leading > 0 {
                state.write(", ");
            }
            state.write(&local);
            leading += 1;
            rest = tail;
        }
        if !rest.is_empty() {
            if leading > 0 {
                state.write(", ");
            }
            state.write("{");
            for (i, specifier) in rest.iter().enumerate() {
                if i > 0 {
                    state.write(", ");
                }
                let specifier = expect_node!(specifier, ImportSpecifier);
                if typed {
                    write_kind(state, specifier.import_kind.as_deref());
                }
                let imported = export_name(&specifier.imported)?;
                let local = identifier_name(&specifier.local)?;
                state.write(&imported);
                if imported != local {
                    state.write(" as ");
                    state.write(local);
                }
            }
            state.write("}");
        }
        state.write(" from ");
    }
    state.emit_as(NodeKind::Literal, &import.source)?;
    format_attributes(state, &import.attributes)?;
    state.write(";");
    Ok(())
}

pub(super) fn import_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let import = expect_node!(node, ImportDeclaration);
    format_import(state, import, false)
}

pub(super) fn import_attribute(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let attribute = expect_node!(node, ImportAttribute);
    state.emit(&attribute.key)?;
    state.write(": ");
    state.emit_as(NodeKind::Literal, &attribute.value)
}

pub(super) fn import_expression(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let import = expect_node!(node, ImportExpression);
    state.write("import(");
    state.emit(&import.source)?;
    state.write(")");
    Ok(())
}

/// `export {a, b as c} from "m" with {...};` or an inline declaration.
pub(crate) fn format_export_named(state: &mut EmitState<'_>, node: &Node, typed: bool) -> Result<()> {
    let export = expect_node!(node, ExportNamedDeclaration);
    state.write("export ");
    if let Some(declaration) = &export.declaration {
        return state.emit(declaration);
    }
    if typed {
        write_kind(state, export.export_kind.as_deref());
    }
    state.write("{");
    for (i, specifier) in export.specifiers.iter().enumerate() {
        if i > 0 {
            state.write(", ");
        }
        let specifier = expect_node!(specifier, ExportSpecifier);
        if typed {
            write_kind(state, specifier.export_kind.as_deref());
        }
        let local = export_name(&specifier.local)?;
        let exported = export_name(&specifier.exported)?;
        state.write(&local);
        if local != exported {
            state.write(" as ");
            state.write(&exported);
        }
    }
    state.write("}");
    if let Some(source) = &export.source {
        state.write(" from ");
        state.emit_as(NodeKind::Literal, source)?;
    }
    format_attributes(state, &export.attributes)?;
    state.write(";");
    Ok(())
}

pub(super) fn export_named_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    format_export_named(state, node, false)
}

pub(super) fn export_default_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let export = expect_node!(node, ExportDefaultDeclaration);
    let declaration = &*export.declaration;
    state.write("export default ");
    state.emit(declaration)?;
    // expressions end the statement; functions and classes do not
    let is_declaration = matches!(
        declaration,
        Node::FunctionExpression(_) | Node::FunctionDeclaration(_) | Node::ClassExpression(_) | Node::ClassDeclaration(_)
    );
    if state.precedence(declaration.kind()).is_some() && !is_declaration {
        state.write(";");
    }
    Ok(())
}

pub(crate) fn format_export_all(state: &mut EmitState<'_>, node: &Node, typed: bool) -> Result<()> {
    let export = expect_node!(node, ExportAllDeclaration);
    state.write("export ");
    if typed {
        write_kind(state, export.export_kind.as_deref());
    }
    state.write("* ");
    if let Some(exported) = &export.exported {
        state.write("as ");
        state.write(&export_name(exported)?);
        state.write(" ");
    }
    state.write("from ");
    state.emit_as(NodeKind::Literal, &export.source)?;
    format_attributes(state, &export.attributes)?;
    state.write(";");
    Ok(())
}

pub(super) fn export_all_declaration(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    format_export_all(state, node, false)
}
