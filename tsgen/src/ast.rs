/// ESTree AST node types for JavaScript and its typed superset.
/// These are immutable, tagged values loaded from the JSON produced by
/// typescript-estree or acorn-typescript. Used during generation only.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;

/// Declares the `Node` union and its `NodeKind` discriminant from one list,
/// so the ESTree tag, the payload and the kind can never drift apart.
macro_rules! define_nodes {
    ($( $variant:ident($payload:ty) = $tag:literal, )*) => {
        /// One AST node. The ESTree `type` field selects the variant.
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        #[serde(tag = "type")]
        pub enum Node {
            $(
                #[serde(rename = $tag)]
                $variant($payload),
            )*
        }

        /// Discriminant of a [`Node`]; the key of the dispatch registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $( $variant, )*
        }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( Node::$variant(_) => NodeKind::$variant, )*
                }
            }
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$variant, )* ];

            /// The ESTree `type` tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( NodeKind::$variant => $tag, )*
                }
            }
        }
    };
}

define_nodes! {
    Program(Program) = "Program",

    // Statements
    BlockStatement(Block) = "BlockStatement",
    ClassBody(Block) = "ClassBody",
    StaticBlock(Block) = "StaticBlock",
    EmptyStatement(Leaf) = "EmptyStatement",
    ExpressionStatement(ExpressionStatement) = "ExpressionStatement",
    IfStatement(IfStatement) = "IfStatement",
    LabeledStatement(LabeledStatement) = "LabeledStatement",
    BreakStatement(Jump) = "BreakStatement",
    ContinueStatement(Jump) = "ContinueStatement",
    WithStatement(WithStatement) = "WithStatement",
    SwitchStatement(SwitchStatement) = "SwitchStatement",
    ReturnStatement(Argument) = "ReturnStatement",
    ThrowStatement(Operand) = "ThrowStatement",
    TryStatement(TryStatement) = "TryStatement",
    WhileStatement(Loop) = "WhileStatement",
    DoWhileStatement(Loop) = "DoWhileStatement",
    ForStatement(ForStatement) = "ForStatement",
    ForInStatement(ForIn) = "ForInStatement",
    ForOfStatement(ForIn) = "ForOfStatement",
    DebuggerStatement(Leaf) = "DebuggerStatement",

    // Declarations
    FunctionDeclaration(Function) = "FunctionDeclaration",
    FunctionExpression(Function) = "FunctionExpression",
    ArrowFunctionExpression(ArrowFunction) = "ArrowFunctionExpression",
    VariableDeclaration(VariableDeclaration) = "VariableDeclaration",
    VariableDeclarator(VariableDeclarator) = "VariableDeclarator",
    ClassDeclaration(Class) = "ClassDeclaration",
    ClassExpression(Class) = "ClassExpression",

    // Modules
    ImportDeclaration(ImportDeclaration) = "ImportDeclaration",
    ImportSpecifier(ImportSpecifier) = "ImportSpecifier",
    ImportDefaultSpecifier(LocalSpecifier) = "ImportDefaultSpecifier",
    ImportNamespaceSpecifier(LocalSpecifier) = "ImportNamespaceSpecifier",
    ImportAttribute(ImportAttribute) = "ImportAttribute",
    ImportExpression(ImportExpression) = "ImportExpression",
    ExportNamedDeclaration(ExportNamedDeclaration) = "ExportNamedDeclaration",
    ExportSpecifier(ExportSpecifier) = "ExportSpecifier",
    ExportDefaultDeclaration(ExportDefaultDeclaration) = "ExportDefaultDeclaration",
    ExportAllDeclaration(ExportAllDeclaration) = "ExportAllDeclaration",

    // Class members
    MethodDefinition(MethodDefinition) = "MethodDefinition",
    PropertyDefinition(PropertyDefinition) = "PropertyDefinition",
    AccessorProperty(PropertyDefinition) = "AccessorProperty",
    Decorator(Decorator) = "Decorator",

    // Expressions and patterns
    ThisExpression(Leaf) = "ThisExpression",
    Super(Leaf) = "Super",
    RestElement(Rest) = "RestElement",
    SpreadElement(Rest) = "SpreadElement",
    YieldExpression(YieldExpression) = "YieldExpression",
    AwaitExpression(Operand) = "AwaitExpression",
    TemplateLiteral(TemplateLiteral) = "TemplateLiteral",
    TemplateElement(TemplateElement) = "TemplateElement",
    TaggedTemplateExpression(TaggedTemplate) = "TaggedTemplateExpression",
    ArrayExpression(ArrayLike) = "ArrayExpression",
    ArrayPattern(ArrayLike) = "ArrayPattern",
    ObjectExpression(ObjectLike) = "ObjectExpression",
    ObjectPattern(ObjectLike) = "ObjectPattern",
    Property(Property) = "Property",
    SequenceExpression(SequenceExpression) = "SequenceExpression",
    UnaryExpression(UnaryExpression) = "UnaryExpression",
    UpdateExpression(UpdateExpression) = "UpdateExpression",
    AssignmentExpression(Binary) = "AssignmentExpression",
    AssignmentPattern(AssignmentPattern) = "AssignmentPattern",
    BinaryExpression(Binary) = "BinaryExpression",
    LogicalExpression(Binary) = "LogicalExpression",
    ConditionalExpression(ConditionalExpression) = "ConditionalExpression",
    NewExpression(Call) = "NewExpression",
    CallExpression(Call) = "CallExpression",
    ChainExpression(Wrapper) = "ChainExpression",
    MemberExpression(MemberExpression) = "MemberExpression",
    MetaProperty(MetaProperty) = "MetaProperty",
    Identifier(Identifier) = "Identifier",
    PrivateIdentifier(PrivateIdentifier) = "PrivateIdentifier",
    Literal(Literal) = "Literal",
    RegExpLiteral(Literal) = "RegExpLiteral",

    // Typed expressions
    TSAsExpression(TypeAssertion) = "TSAsExpression",
    TSSatisfiesExpression(TypeAssertion) = "TSSatisfiesExpression",
    TSTypeAssertion(TypeAssertion) = "TSTypeAssertion",
    TSNonNullExpression(Wrapper) = "TSNonNullExpression",

    // Typed declarations
    TSDeclareFunction(Function) = "TSDeclareFunction",
    TSEmptyBodyFunctionExpression(Function) = "TSEmptyBodyFunctionExpression",
    TSAbstractMethodDefinition(MethodDefinition) = "TSAbstractMethodDefinition",
    TSAbstractPropertyDefinition(PropertyDefinition) = "TSAbstractPropertyDefinition",
    TSAbstractAccessorProperty(PropertyDefinition) = "TSAbstractAccessorProperty",
    TSParameterProperty(ParameterProperty) = "TSParameterProperty",
    TSInterfaceDeclaration(InterfaceDeclaration) = "TSInterfaceDeclaration",
    TSInterfaceBody(InterfaceBody) = "TSInterfaceBody",
    TSInterfaceHeritage(Heritage) = "TSInterfaceHeritage",
    TSExpressionWithTypeArguments(Heritage) = "TSExpressionWithTypeArguments",
    TSClassImplements(Heritage) = "TSClassImplements",
    TSTypeAliasDeclaration(TypeAliasDeclaration) = "TSTypeAliasDeclaration",
    TSEnumDeclaration(EnumDeclaration) = "TSEnumDeclaration",
    TSEnumMember(EnumMember) = "TSEnumMember",
    TSModuleDeclaration(ModuleDeclaration) = "TSModuleDeclaration",
    TSModuleBlock(Block) = "TSModuleBlock",

    // Type syntax
    TSTypeAnnotation(TypeAnnotation) = "TSTypeAnnotation",
    TSAnyKeyword(Leaf) = "TSAnyKeyword",
    TSBigIntKeyword(Leaf) = "TSBigIntKeyword",
    TSBooleanKeyword(Leaf) = "TSBooleanKeyword",
    TSIntrinsicKeyword(Leaf) = "TSIntrinsicKeyword",
    TSNeverKeyword(Leaf) = "TSNeverKeyword",
    TSNullKeyword(Leaf) = "TSNullKeyword",
    TSNumberKeyword(Leaf) = "TSNumberKeyword",
    TSObjectKeyword(Leaf) = "TSObjectKeyword",
    TSStringKeyword(Leaf) = "TSStringKeyword",
    TSSymbolKeyword(Leaf) = "TSSymbolKeyword",
    TSUndefinedKeyword(Leaf) = "TSUndefinedKeyword",
    TSUnknownKeyword(Leaf) = "TSUnknownKeyword",
    TSVoidKeyword(Leaf) = "TSVoidKeyword",
    TSThisType(Leaf) = "TSThisType",
    TSLiteralType(LiteralType) = "TSLiteralType",
    TSTemplateLiteralType(TemplateLiteralType) = "TSTemplateLiteralType",
    TSTypeReference(TypeReference) = "TSTypeReference",
    TSQualifiedName(QualifiedName) = "TSQualifiedName",
    TSTypeQuery(TypeQuery) = "TSTypeQuery",
    TSUnionType(TypeList) = "TSUnionType",
    TSIntersectionType(TypeList) = "TSIntersectionType",
    TSTupleType(TupleType) = "TSTupleType",
    TSOptionalType(TypeAnnotation) = "TSOptionalType",
    TSRestType(TypeAnnotation) = "TSRestType",
    TSParenthesizedType(TypeAnnotation) = "TSParenthesizedType",
    TSNamedTupleMember(NamedTupleMember) = "TSNamedTupleMember",
    TSArrayType(ArrayType) = "TSArrayType",
    TSIndexedAccessType(IndexedAccessType) = "TSIndexedAccessType",
    TSTypeOperator(TypeOperator) = "TSTypeOperator",
    TSConditionalType(ConditionalType) = "TSConditionalType",
    TSInferType(InferType) = "TSInferType",
    TSTypePredicate(TypePredicate) = "TSTypePredicate",
    TSFunctionType(Signature) = "TSFunctionType",
    TSConstructorType(Signature) = "TSConstructorType",
    TSConstructSignatureDeclaration(Signature) = "TSConstructSignatureDeclaration",
    TSCallSignatureDeclaration(Signature) = "TSCallSignatureDeclaration",
    TSMappedType(MappedType) = "TSMappedType",
    TSTypeLiteral(TypeLiteral) = "TSTypeLiteral",
    TSPropertySignature(PropertySignature) = "TSPropertySignature",
    TSMethodSignature(MethodSignature) = "TSMethodSignature",
    TSIndexSignature(IndexSignature) = "TSIndexSignature",
    TSTypeParameterDeclaration(TypeParameters) = "TSTypeParameterDeclaration",
    TSTypeParameterInstantiation(TypeParameters) = "TSTypeParameterInstantiation",
    TSTypeParameter(TypeParameter) = "TSTypeParameter",
}

type Child = Box<Node>;

/// Treats an explicit JSON `null` the same as an absent list.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

fn default_init() -> String {
    "init".into()
}

fn default_method() -> String {
    "method".into()
}

// ── Shared payloads ────────────────────────────────────────────────────

/// Payload of variants that carry nothing but their tag.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Leaf {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operand {
    pub argument: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Argument {
    pub argument: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wrapper {
    pub expression: Child,
}

// ── Statements ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Child,
    pub directive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IfStatement {
    pub test: Child,
    pub consequent: Child,
    pub alternate: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabeledStatement {
    pub label: Child,
    pub body: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Jump {
    pub label: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithStatement {
    pub object: Child,
    pub body: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchStatement {
    pub discriminant: Child,
    pub cases: Vec<SwitchCase>,
}

/// `case <test>:` or `default:` when `test` is absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchCase {
    pub test: Option<Child>,
    pub consequent: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TryStatement {
    pub block: Child,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatchClause {
    pub param: Option<Child>,
    pub body: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Loop {
    pub test: Child,
    pub body: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForStatement {
    pub init: Option<Child>,
    pub test: Option<Child>,
    pub update: Option<Child>,
    pub body: Child,
}

/// Shared by `for-in` and `for-of`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForIn {
    pub left: Child,
    pub right: Child,
    pub body: Child,
    #[serde(default, rename = "await")]
    pub is_await: bool,
}

// ── Declarations ───────────────────────────────────────────────────────

/// Function declarations, expressions, declared functions, and the bodiless
/// function values of overload signatures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub id: Option<Child>,
    pub params: Vec<Node>,
    pub body: Option<Child>,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub generator: bool,
    #[serde(default)]
    pub declare: bool,
    pub type_parameters: Option<Child>,
    pub return_type: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowFunction {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: Vec<Node>,
    pub body: Child,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    pub type_parameters: Option<Child>,
    pub return_type: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    pub kind: String,
    pub declarations: Vec<Node>,
    #[serde(default)]
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclarator {
    pub id: Child,
    pub init: Option<Child>,
    #[serde(default)]
    pub definite: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Option<Child>,
    pub super_class: Option<Child>,
    pub body: Child,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub decorators: Vec<Node>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub declare: bool,
    pub type_parameters: Option<Child>,
    #[serde(alias = "superTypeParameters")]
    pub super_type_arguments: Option<Child>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub implements: Vec<Node>,
}

// ── Modules ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specifiers: Vec<Node>,
    pub source: Child,
    pub import_kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSpecifier {
    pub imported: Child,
    pub local: Child,
    pub import_kind: Option<String>,
}

/// Default and namespace import specifiers carry only the local binding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocalSpecifier {
    pub local: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportAttribute {
    pub key: Child,
    pub value: Child,
}

/// `import(source)` with an optional options argument, given either as the
/// legacy positional `arguments` list or as a named `options` expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportExpression {
    pub source: Child,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub arguments: Vec<Node>,
    #[serde(alias = "attributes")]
    pub options: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportNamedDeclaration {
    pub declaration: Option<Child>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specifiers: Vec<Node>,
    pub source: Option<Child>,
    pub export_kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSpecifier {
    pub local: Child,
    pub exported: Child,
    pub export_kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportDefaultDeclaration {
    pub declaration: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAllDeclaration {
    pub exported: Option<Child>,
    pub source: Child,
    pub export_kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Vec<Node>,
}

// ── Class members ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition {
    pub key: Child,
    pub value: Child,
    #[serde(default = "default_method")]
    pub kind: String,
    #[serde(default)]
    pub computed: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "override")]
    pub is_override: bool,
    #[serde(default)]
    pub optional: bool,
    pub accessibility: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub decorators: Vec<Node>,
    pub type_parameters: Option<Child>,
}

/// Class fields and auto-accessors, abstract or not.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub key: Child,
    pub value: Option<Child>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub declare: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "override")]
    pub is_override: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub definite: bool,
    #[serde(default)]
    pub optional: bool,
    pub accessibility: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub decorators: Vec<Node>,
    pub type_annotation: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Decorator {
    pub expression: Child,
}

/// Constructor parameter with an accessibility or `readonly` modifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterProperty {
    pub parameter: Child,
    pub accessibility: Option<String>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "override")]
    pub is_override: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub decorators: Vec<Node>,
}

// ── Expressions and patterns ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rest {
    pub argument: Child,
    pub type_annotation: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YieldExpression {
    pub argument: Option<Child>,
    #[serde(default)]
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateLiteral {
    pub quasis: Vec<Node>,
    pub expressions: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateElement {
    pub value: TemplateValue,
    #[serde(default)]
    pub tail: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateValue {
    pub raw: String,
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedTemplate {
    pub tag: Child,
    pub quasi: Child,
}

/// Array expressions and patterns; holes are `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayLike {
    pub elements: Vec<Option<Node>>,
    pub type_annotation: Option<Child>,
}

/// Object expressions and patterns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectLike {
    pub properties: Vec<Node>,
    pub type_annotation: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub key: Child,
    pub value: Child,
    #[serde(default = "default_init")]
    pub kind: String,
    #[serde(default)]
    pub method: bool,
    #[serde(default)]
    pub shorthand: bool,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceExpression {
    pub expressions: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnaryExpression {
    pub operator: String,
    #[serde(default = "default_true")]
    pub prefix: bool,
    pub argument: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpression {
    pub operator: String,
    #[serde(default)]
    pub prefix: bool,
    pub argument: Child,
}

/// Binary, logical and assignment expressions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Binary {
    pub operator: String,
    pub left: Child,
    pub right: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentPattern {
    pub left: Child,
    pub right: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionalExpression {
    pub test: Child,
    pub consequent: Child,
    pub alternate: Child,
}

/// Call and `new` expressions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub callee: Child,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub arguments: Vec<Node>,
    #[serde(default)]
    pub optional: bool,
    #[serde(alias = "typeParameters")]
    pub type_arguments: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberExpression {
    pub object: Child,
    pub property: Child,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetaProperty {
    pub meta: Child,
    pub property: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    pub type_annotation: Option<Child>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub decorators: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrivateIdentifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub value: Value,
    pub raw: Option<String>,
    pub regex: Option<RegexLiteral>,
    pub bigint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegexLiteral {
    pub pattern: String,
    pub flags: String,
}

// ── Typed expressions and declarations ─────────────────────────────────

/// `x as T`, `x satisfies T` and `<T>x`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAssertion {
    pub expression: Child,
    pub type_annotation: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDeclaration {
    pub id: Child,
    pub body: Child,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extends: Vec<Node>,
    pub type_parameters: Option<Child>,
    #[serde(default)]
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterfaceBody {
    pub body: Vec<Node>,
}

/// An expression followed by optional type arguments: interface `extends`
/// clauses and class `implements` clauses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heritage {
    pub expression: Child,
    #[serde(alias = "typeParameters")]
    pub type_arguments: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDeclaration {
    pub id: Child,
    pub type_annotation: Child,
    pub type_parameters: Option<Child>,
    #[serde(default)]
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumDeclaration {
    pub id: Child,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<Node>,
    pub body: Option<EnumBody>,
    #[serde(default, rename = "const")]
    pub is_const: bool,
    #[serde(default)]
    pub declare: bool,
}

impl EnumDeclaration {
    /// Members in source order, wherever the parser put them.
    pub fn members(&self) -> &[Node] {
        match &self.body {
            Some(body) if self.members.is_empty() => &body.members,
            _ => &self.members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumBody {
    pub members: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumMember {
    pub id: Child,
    pub initializer: Option<Child>,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModuleDeclaration {
    pub id: Child,
    pub body: Option<Child>,
    #[serde(default)]
    pub declare: bool,
    #[serde(default)]
    pub global: bool,
    pub kind: Option<String>,
}

impl ModuleDeclaration {
    pub fn is_global(&self) -> bool {
        self.global || self.kind.as_deref() == Some("global")
    }
}

// ── Type syntax ────────────────────────────────────────────────────────

/// A single wrapped type: annotations, optional/rest tuple elements and
/// parenthesized types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAnnotation {
    pub type_annotation: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiteralType {
    pub literal: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateLiteralType {
    pub quasis: Vec<Node>,
    pub types: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    pub type_name: Child,
    #[serde(alias = "typeParameters")]
    pub type_arguments: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QualifiedName {
    pub left: Child,
    pub right: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeQuery {
    pub expr_name: Child,
    #[serde(alias = "typeParameters")]
    pub type_arguments: Option<Child>,
}

/// Members of a union or intersection, in source order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeList {
    pub types: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleType {
    pub element_types: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedTupleMember {
    pub label: Child,
    pub element_type: Child,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayType {
    pub element_type: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedAccessType {
    pub object_type: Child,
    pub index_type: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOperator {
    pub operator: String,
    pub type_annotation: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalType {
    pub check_type: Child,
    pub extends_type: Child,
    pub true_type: Child,
    pub false_type: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferType {
    pub type_parameter: Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypePredicate {
    pub parameter_name: Child,
    pub type_annotation: Option<Child>,
    #[serde(default)]
    pub asserts: bool,
}

/// Function and constructor types, call and construct signatures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(default, alias = "parameters", deserialize_with = "null_as_empty")]
    pub params: Vec<Node>,
    #[serde(alias = "typeAnnotation")]
    pub return_type: Option<Child>,
    pub type_parameters: Option<Child>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

/// `+`/`-` mapped-type modifiers, or a plain `true`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MappedModifier {
    Flag(bool),
    Sign(String),
}

impl MappedModifier {
    /// Source prefix for the modifier, or `None` when it is switched off.
    pub fn prefix(&self) -> Option<&str> {
        match self {
            MappedModifier::Flag(true) => Some(""),
            MappedModifier::Flag(false) => None,
            MappedModifier::Sign(sign) if sign == "+" || sign == "-" => Some(sign),
            MappedModifier::Sign(_) => Some(""),
        }
    }
}

/// `{ [K in C as N]?: T }`, either with a `typeParameter` carrying the
/// constraint or with separate `key` and `constraint` fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedType {
    pub type_parameter: Option<Child>,
    pub key: Option<Child>,
    pub constraint: Option<Child>,
    pub name_type: Option<Child>,
    pub type_annotation: Option<Child>,
    pub optional: Option<MappedModifier>,
    pub readonly: Option<MappedModifier>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeLiteral {
    pub members: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySignature {
    pub key: Child,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    pub type_annotation: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSignature {
    pub key: Child,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default = "default_method")]
    pub kind: String,
    #[serde(default, alias = "parameters", deserialize_with = "null_as_empty")]
    pub params: Vec<Node>,
    #[serde(alias = "typeAnnotation")]
    pub return_type: Option<Child>,
    pub type_parameters: Option<Child>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSignature {
    pub parameters: Vec<Node>,
    pub type_annotation: Option<Child>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeParameters {
    pub params: Vec<Node>,
}

/// typescript-estree names a type parameter with an `Identifier`,
/// acorn-typescript with a bare string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeParameterName {
    Node(Child),
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeParameter {
    pub name: TypeParameterName,
    pub constraint: Option<Child>,
    pub default: Option<Child>,
    #[serde(default, rename = "in")]
    pub is_in: bool,
    #[serde(default, rename = "out")]
    pub is_out: bool,
    #[serde(default, rename = "const")]
    pub is_const: bool,
}

// ── Queries ────────────────────────────────────────────────────────────

impl Node {
    /// Load a node from ESTree JSON text.
    pub fn from_json(text: &str) -> Result<Node> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a node from an already-parsed ESTree JSON value.
    pub fn from_value(value: Value) -> Result<Node> {
        Ok(serde_json::from_value(value)?)
    }

    /// Operator of binary, logical, assignment, unary and update expressions.
    pub fn operator(&self) -> Option<&str> {
        match self {
            Node::BinaryExpression(b) | Node::LogicalExpression(b) | Node::AssignmentExpression(b) => {
                Some(&b.operator)
            }
            Node::UnaryExpression(u) => Some(&u.operator),
            Node::UpdateExpression(u) => Some(&u.operator),
            _ => None,
        }
    }

    /// Name of an identifier, or `None` for any other variant.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Node::Identifier(id) => Some(&id.name),
            _ => None,
        }
    }

    /// Text of a module export name: an identifier or a string literal.
    pub fn module_export_name(&self) -> Option<String> {
        match self {
            Node::Identifier(id) => Some(id.name.clone()),
            Node::Literal(lit) => Some(match &lit.raw {
                Some(raw) => raw.clone(),
                None => lit.value.to_string(),
            }),
            _ => None,
        }
    }

    /// The function payload of function-shaped variants.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Node::FunctionDeclaration(f)
            | Node::FunctionExpression(f)
            | Node::TSDeclareFunction(f)
            | Node::TSEmptyBodyFunctionExpression(f) => Some(f),
            _ => None,
        }
    }
}
