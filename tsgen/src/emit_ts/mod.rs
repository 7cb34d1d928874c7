/// Typed extension registry: procedures for type annotations, interfaces,
/// enums, decorators, namespaces, and the base kinds whose typed form
/// carries more syntax. Layered over [`crate::emit_js::registry`].
mod declarations;
mod expressions;
mod members;
mod modules;
mod types;

use crate::ast::NodeKind;
use crate::emit_js;
use crate::registry::Registry;

/// The extension registry on its own, without the base procedures.
pub fn extension() -> Registry {
    use NodeKind::*;

    let mut registry = Registry::new();
    registry
        // Bindings, functions and classes
        .register(Identifier, declarations::identifier)
        .register(VariableDeclaration, declarations::variable_declaration)
        .register(VariableDeclarator, declarations::variable_declarator)
        .register_all(&[FunctionDeclaration, FunctionExpression], declarations::function_declaration)
        .register_all(&[TSDeclareFunction, TSEmptyBodyFunctionExpression], declarations::declare_function)
        .register(ArrowFunctionExpression, declarations::arrow_function)
        .register(ClassDeclaration, declarations::class_declaration)
        .register_all(
            &[
                PropertyDefinition,
                AccessorProperty,
                TSAbstractPropertyDefinition,
                TSAbstractAccessorProperty,
            ],
            declarations::class_property,
        )
        .register_all(&[MethodDefinition, TSAbstractMethodDefinition], declarations::method_definition)
        .register(TSParameterProperty, declarations::parameter_property)
        .register(Decorator, declarations::decorator)
        // Expressions and patterns
        .register(NewExpression, expressions::new_expression)
        .register(CallExpression, expressions::call_expression)
        .register(TSAsExpression, expressions::as_expression)
        .register(TSSatisfiesExpression, expressions::satisfies_expression)
        .register(TSTypeAssertion, expressions::type_assertion)
        .register(TSNonNullExpression, expressions::non_null_expression)
        .register(RestElement, expressions::rest_element)
        .register(ObjectPattern, expressions::object_pattern)
        .register(ArrayPattern, expressions::array_pattern)
        // Modules
        .register(ImportDeclaration, modules::import_declaration)
        .register(ImportExpression, modules::import_expression)
        .register(ExportNamedDeclaration, modules::export_named_declaration)
        .register(ExportAllDeclaration, modules::export_all_declaration)
        .register(TSModuleDeclaration, modules::module_declaration)
        .register(TSModuleBlock, modules::module_block)
        // Declarations of types
        .register(TSInterfaceDeclaration, members::interface_declaration)
        .register(TSInterfaceBody, members::interface_body)
        .register_all(
            &[TSInterfaceHeritage, TSExpressionWithTypeArguments, TSClassImplements],
            members::heritage,
        )
        .register(TSTypeLiteral, members::type_literal)
        .register(TSPropertySignature, members::property_signature)
        .register(TSMethodSignature, members::method_signature)
        .register(TSIndexSignature, members::index_signature)
        .register_all(
            &[TSCallSignatureDeclaration, TSConstructSignatureDeclaration],
            members::call_signature,
        )
        .register(TSTypeAliasDeclaration, members::type_alias_declaration)
        .register(TSEnumDeclaration, members::enum_declaration)
        .register(TSEnumMember, members::enum_member)
        // Type syntax
        .register(TSTypeAnnotation, types::type_annotation)
        .register_all(
            &[
                TSAnyKeyword,
                TSBigIntKeyword,
                TSBooleanKeyword,
                TSIntrinsicKeyword,
                TSNeverKeyword,
                TSNullKeyword,
                TSNumberKeyword,
                TSObjectKeyword,
                TSStringKeyword,
                TSSymbolKeyword,
                TSUndefinedKeyword,
                TSUnknownKeyword,
                TSVoidKeyword,
                TSThisType,
            ],
            types::keyword,
        )
        .register(TSLiteralType, types::literal_type)
        .register(TSTemplateLiteralType, types::template_literal_type)
        .register(TSTypeReference, types::type_reference)
        .register(TSQualifiedName, types::qualified_name)
        .register(TSTypeQuery, types::type_query)
        .register(TSUnionType, types::union_type)
        .register(TSIntersectionType, types::intersection_type)
        .register_all(&[TSFunctionType, TSConstructorType], types::function_type)
        .register(TSTupleType, types::tuple_type)
        .register(TSOptionalType, types::optional_type)
        .register(TSRestType, types::rest_type)
        .register(TSParenthesizedType, types::parenthesized_type)
        .register(TSNamedTupleMember, types::named_tuple_member)
        .register(TSArrayType, types::array_type)
        .register(TSIndexedAccessType, types::indexed_access_type)
        .register(TSTypeOperator, types::type_operator)
        .register(TSConditionalType, types::conditional_type)
        .register(TSInferType, types::infer_type)
        .register(TSTypePredicate, types::type_predicate)
        .register(TSMappedType, types::mapped_type)
        .register_all(
            &[TSTypeParameterDeclaration, TSTypeParameterInstantiation],
            types::type_parameters,
        )
        .register(TSTypeParameter, types::type_parameter);
    registry
}

/// The base registry with the typed extension layered on top.
pub fn registry() -> Registry {
    emit_js::registry().layer(&extension())
}
