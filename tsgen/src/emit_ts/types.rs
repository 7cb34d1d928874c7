/// Type syntax: keywords, references, unions, functions, tuples, mapped
/// and conditional types.
use crate::ast::{Node, NodeKind, TypeParameter, TypeParameterName};
use crate::context::EmitState;
use crate::emit_js::format_template;
use crate::error::{expect_node, GenerateError, Result};
use crate::format::format_sequence;

pub(super) fn type_annotation(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let annotation = expect_node!(node, TSTypeAnnotation);
    state.emit(&annotation.type_annotation)
}

/// Keyword types and `this`.
pub(super) fn keyword(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let text = match node.kind() {
        NodeKind::TSAnyKeyword => "any",
        NodeKind::TSBigIntKeyword => "bigint",
        NodeKind::TSBooleanKeyword => "boolean",
        NodeKind::TSIntrinsicKeyword => "intrinsic",
        NodeKind::TSNeverKeyword => "never",
        NodeKind::TSNullKeyword => "null",
        NodeKind::TSNumberKeyword => "number",
        NodeKind::TSObjectKeyword => "object",
        NodeKind::TSStringKeyword => "string",
        NodeKind::TSSymbolKeyword => "symbol",
        NodeKind::TSUndefinedKeyword => "undefined",
        NodeKind::TSUnknownKeyword => "unknown",
        NodeKind::TSVoidKeyword => "void",
        NodeKind::TSThisType => "this",
        _ => return Err(GenerateError::unexpected(node, "a keyword type")),
    };
    state.write(text);
    Ok(())
}

pub(super) fn literal_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let literal = expect_node!(node, TSLiteralType);
    state.emit(&literal.literal)
}

pub(super) fn template_literal_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let template = expect_node!(node, TSTemplateLiteralType);
    format_template(state, node, &template.quasis, &template.types)
}

pub(super) fn type_reference(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let reference = expect_node!(node, TSTypeReference);
    state.emit(&reference.type_name)?;
    if let Some(arguments) = &reference.type_arguments {
        state.emit(arguments)?;
    }
    Ok(())
}

pub(super) fn qualified_name(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let name = expect_node!(node, TSQualifiedName);
    state.emit(&name.left)?;
    state.write(".");
    state.emit(&name.right)
}

pub(super) fn type_query(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let query = expect_node!(node, TSTypeQuery);
    state.write("typeof ");
    state.emit(&query.expr_name)?;
    if let Some(arguments) = &query.type_arguments {
        state.emit(arguments)?;
    }
    Ok(())
}

/// Emit `ty`, parenthesized when its kind is one of `wrapped`.
fn format_member_type(state: &mut EmitState<'_>, ty: &Node, wrapped: &[NodeKind]) -> Result<()> {
    if wrapped.contains(&ty.kind()) {
        state.emit_parenthesized(ty)
    } else {
        state.emit(ty)
    }
}

const IN_UNION: &[NodeKind] = &[
    NodeKind::TSFunctionType,
    NodeKind::TSConstructorType,
    NodeKind::TSConditionalType,
];

const IN_INTERSECTION: &[NodeKind] = &[
    NodeKind::TSUnionType,
    NodeKind::TSFunctionType,
    NodeKind::TSConstructorType,
    NodeKind::TSConditionalType,
];

/// Operands of `keyof`, `unique` and `readonly`.
const IN_TYPE_OPERATOR: &[NodeKind] = &[
    NodeKind::TSUnionType,
    NodeKind::TSIntersectionType,
    NodeKind::TSFunctionType,
    NodeKind::TSConstructorType,
    NodeKind::TSConditionalType,
    NodeKind::TSInferType,
];

/// Element types of `T[]` and object types of `T[K]`.
const IN_POSTFIX: &[NodeKind] = &[
    NodeKind::TSUnionType,
    NodeKind::TSIntersectionType,
    NodeKind::TSFunctionType,
    NodeKind::TSConstructorType,
    NodeKind::TSConditionalType,
    NodeKind::TSTypeOperator,
    NodeKind::TSInferType,
];

pub(super) fn union_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let union = expect_node!(node, TSUnionType);
    for (i, ty) in union.types.iter().enumerate() {
        if i > 0 {
            state.write(" | ");
        }
        format_member_type(state, ty, IN_UNION)?;
    }
    Ok(())
}

pub(super) fn intersection_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let intersection = expect_node!(node, TSIntersectionType);
    for (i, ty) in intersection.types.iter().enumerate() {
        if i > 0 {
            state.write(" & ");
        }
        format_member_type(state, ty, IN_INTERSECTION)?;
    }
    Ok(())
}

/// `<T>(a: A) => R`, and `new` for constructor types.
pub(super) fn function_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let signature = expect_node!(node, TSFunctionType | TSConstructorType);
    if node.kind() == NodeKind::TSConstructorType {
        if signature.is_abstract {
            state.write("abstract ");
        }
        state.write("new ");
    }
    if let Some(type_parameters) = &signature.type_parameters {
        state.emit(type_parameters)?;
    }
    format_sequence(state, &signature.params)?;
    state.write(" => ");
    if let Some(return_type) = &signature.return_type {
        state.emit(return_type)?;
    }
    Ok(())
}

pub(super) fn tuple_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let tuple = expect_node!(node, TSTupleType);
    state.write("[");
    state.emit_joined(&tuple.element_types, ", ")?;
    state.write("]");
    Ok(())
}

pub(super) fn optional_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let optional = expect_node!(node, TSOptionalType);
    format_member_type(state, &optional.type_annotation, IN_POSTFIX)?;
    state.write("?");
    Ok(())
}

pub(super) fn rest_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let rest = expect_node!(node, TSRestType);
    state.write("...");
    state.emit(&rest.type_annotation)
}

pub(super) fn parenthesized_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let parenthesized = expect_node!(node, TSParenthesizedType);
    state.emit_parenthesized(&parenthesized.type_annotation)
}

pub(super) fn named_tuple_member(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let member = expect_node!(node, TSNamedTupleMember);
    state.emit(&member.label)?;
    if member.optional {
        state.write("?");
    }
    state.write(": ");
    state.emit(&member.element_type)
}

pub(super) fn array_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let array = expect_node!(node, TSArrayType);
    format_member_type(state, &array.element_type, IN_POSTFIX)?;
    state.write("[]");
    Ok(())
}

pub(super) fn indexed_access_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let access = expect_node!(node, TSIndexedAccessType);
    format_member_type(state, &access.object_type, IN_POSTFIX)?;
    state.write("[");
    state.emit(&access.index_type)?;
    state.write("]");
    Ok(())
}

/// `keyof T`, `unique symbol`, `readonly T[]`.
pub(super) fn type_operator(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let operator = expect_node!(node, TSTypeOperator);
    state.write(&operator.operator);
    state.write(" ");
    format_member_type(state, &operator.type_annotation, IN_TYPE_OPERATOR)
}

pub(super) fn conditional_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let conditional = expect_node!(node, TSConditionalType);
    state.emit(&conditional.check_type)?;
    state.write(" extends ");
    state.emit(&conditional.extends_type)?;
    state.write(" ? ");
    state.emit(&conditional.true_type)?;
    state.write(" : ");
    state.emit(&conditional.false_type)
}

pub(super) fn infer_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let infer = expect_node!(node, TSInferType);
    state.write("infer ");
    state.emit(&infer.type_parameter)
}

/// `x is T`, `asserts x`, `asserts this is T`.
pub(super) fn type_predicate(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let predicate = expect_node!(node, TSTypePredicate);
    if predicate.asserts {
        state.write("asserts ");
    }
    state.emit(&predicate.parameter_name)?;
    if let Some(annotation) = &predicate.type_annotation {
        state.write(" is ");
        state.emit(annotation)?;
    }
    Ok(())
}

/// `{ readonly [K in C as N]?: T }` with optional `+`/`-` modifiers.
pub(super) fn mapped_type(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let mapped = expect_node!(node, TSMappedType);
    state.write("{ ");
    if let Some(prefix) = mapped.readonly.as_ref().and_then(|modifier| modifier.prefix()) {
        state.write(prefix);
        state.write("readonly ");
    }
    state.write("[");
    let mut constraint = mapped.constraint.as_deref();
    match (&mapped.type_parameter, &mapped.key) {
        (Some(parameter), _) => {
            let parameter = expect_node!(&**parameter, TSTypeParameter);
            format_type_parameter_name(state, parameter)?;
            constraint = constraint.or(parameter.constraint.as_deref());
        }
        (None, Some(key)) => state.emit(key)?,
        (None, None) => return Err(GenerateError::unexpected(node, "a type parameter or key")),
    }
    state.write(" in ");
    if let Some(constraint) = constraint {
        state.emit(constraint)?;
    }
    if let Some(name_type) = &mapped.name_type {
        state.write(" as ");
        state.emit(name_type)?;
    }
    state.write("]");
    if let Some(prefix) = mapped.optional.as_ref().and_then(|modifier| modifier.prefix()) {
        state.write(prefix);
        state.write("?");
    }
    state.emit_annotation(mapped.type_annotation.as_deref())?;
    state.write(" }");
    Ok(())
}

pub(super) fn type_parameters(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let parameters = expect_node!(node, TSTypeParameterDeclaration | TSTypeParameterInstantiation);
    state.write("<");
    state.emit_joined(&parameters.params, ", ")?;
    state.write(">");
    Ok(())
}

fn format_type_parameter_name(state: &mut EmitState<'_>, parameter: &TypeParameter) -> Result<()> {
    match &parameter.name {
        TypeParameterName::Node(name) => state.emit(name),
        TypeParameterName::Plain(name) => {
            state.write(name);
            Ok(())
        }
    }
}

/// `const in out T extends C = D`.
pub(super) fn type_parameter(node: &Node, state: &mut EmitState<'_>) -> Result<()> {
    let parameter = expect_node!(node, TSTypeParameter);
    if parameter.is_const {
        state.write("const ");
    }
    if parameter.is_in {
        state.write("in ");
    }
    if parameter.is_out {
        state.write("out ");
    }
    format_type_parameter_name(state, parameter)?;
    if let Some(constraint) = &parameter.constraint {
        state.write(" extends ");
        state.emit(constraint)?;
    }
    if let Some(default) = &parameter.default {
        state.write(" = ");
        state.emit(default)?;
    }
    Ok(())
}
