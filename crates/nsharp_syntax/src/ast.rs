//! Abstract syntax tree for the N# language.
//!
//! The tree is shared by every dialect: the indentation-dialect parser in
//! this crate builds it, and renderers for the other surface syntaxes
//! traverse it with exhaustive matches. There is no visitor interface; a new
//! renderer is a new exhaustive-match function ([`collect_errors`] is the
//! in-repo exemplar of the pattern).
//!
//! Nodes are built bottom-up by the parser and never mutated afterwards.
//! Every node's position points at its first token.

use std::fmt;

use nsharp_core::lang::tokens::TokenKind;

/// Location of a character in source, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A node with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub pos: Position,
    pub node: T,
}

impl<T> Located<T> {
    pub fn new(pos: Position, node: T) -> Self {
        Self { pos, node }
    }
}

/// Root node: one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub name: String,
    pub statements: Vec<Located<Statement>>,
}

// ============================================================================
// Names and types
// ============================================================================

/// One segment of a dotted name, optionally carrying generic type arguments
/// (`List<i32>` is one part with one argument).
#[derive(Debug, Clone, PartialEq)]
pub struct NamePart {
    pub name: String,
    pub type_args: Vec<QualifiedName>,
}

impl NamePart {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_args: Vec::new(),
        }
    }
}

/// Dotted, optionally generic name. Used both as an expression atom and as a
/// type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedName {
    pub pos: Position,
    pub parts: Vec<NamePart>,
}

impl QualifiedName {
    /// The name as a single undotted identifier, if that is what it is.
    pub fn as_simple(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [part] if part.type_args.is_empty() => Some(&part.name),
            _ => None,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", part.name)?;
            if !part.type_args.is_empty() {
                write!(f, "<")?;
                for (j, arg) in part.type_args.iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Member/type modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Protected,
    Internal,
    Private,
    Static,
    Virtual,
    Override,
    Abstract,
}

impl Modifier {
    /// Map a modifier-range token to its AST modifier.
    ///
    /// Returns `None` for tokens outside the modifier range; the parser
    /// treats a `None` for an in-range token as a table defect and panics.
    pub fn from_token(kind: TokenKind) -> Option<Modifier> {
        match kind {
            TokenKind::Public => Some(Modifier::Public),
            TokenKind::Protected => Some(Modifier::Protected),
            TokenKind::Internal => Some(Modifier::Internal),
            TokenKind::Private => Some(Modifier::Private),
            TokenKind::Static => Some(Modifier::Static),
            TokenKind::Virtual => Some(Modifier::Virtual),
            TokenKind::Override => Some(Modifier::Override),
            TokenKind::Abstract => Some(Modifier::Abstract),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Internal => "internal",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Virtual => "virtual",
            Modifier::Override => "override",
            Modifier::Abstract => "abstract",
        };
        write!(f, "{s}")
    }
}

/// Which declaration keyword introduced a class-like type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
    Struct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub modifiers: Vec<Modifier>,
    pub kind: ClassKind,
    pub name: String,
    pub parent: Option<QualifiedName>,
    pub interfaces: Vec<QualifiedName>,
    pub body: Vec<Located<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub pos: Position,
    pub ty: QualifiedName,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    pub return_type: Option<QualifiedName>,
    pub name: String,
    pub params: Vec<Param>,
    /// Empty for abstract methods (no indented body follows the signature).
    pub body: Vec<Located<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: QualifiedName,
    pub name: String,
    /// Empty body on a bare `get` line means an auto-implemented accessor.
    pub get_body: Vec<Located<Statement>>,
    pub set_body: Vec<Located<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: QualifiedName,
    pub name: String,
    pub value: Located<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: QualifiedName,
    pub name: String,
    pub value: Option<Located<Expression>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `ns A.B`
    Namespace(Vec<String>),
    /// `use A.B`
    Import(Vec<String>),
    Class(ClassDecl),
    Method(MethodDecl),
    Property(PropertyDecl),
    Constant(ConstantDecl),
    Field(FieldDecl),
    If(IfStmt),
    For(ForStmt),
    Case(CaseStmt),
    Break,
    Continue,
    Return(Option<Located<Expression>>),
    Try(TryStmt),
    Expression(Located<Expression>),
    /// Blank line, preserved for round-tripping.
    Space,
    /// `;` comment, preserved for round-tripping.
    Comment(String),
    /// Sentinel standing in for an unparseable statement.
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Located<Expression>,
    pub body: Vec<Located<Statement>>,
    /// `else if` chains are a single nested `If` statement in here.
    pub else_body: Vec<Located<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    /// `for x in xs` binds `x`; `for cond` loops on a condition.
    pub var: Option<String>,
    pub iterated: Located<Expression>,
    pub body: Vec<Located<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    pub subject: Located<Expression>,
    pub branches: Vec<CaseBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    pub pos: Position,
    /// Branch values; `_` (discard) is the default branch.
    pub values: Vec<Located<Expression>>,
    pub body: Vec<Located<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub body: Vec<Located<Statement>>,
    pub catches: Vec<CatchClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub pos: Position,
    pub ty: Option<QualifiedName>,
    pub name: Option<String>,
    pub body: Vec<Located<Statement>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(QualifiedName),
    /// Numeric literal; the literal text is preserved verbatim.
    Number(String),
    /// Character literal, already unescaped.
    Character(String),
    StringInterpolation(StringInterpolation),
    Binary {
        op: BinaryOp,
        left: Box<Located<Expression>>,
        right: Box<Located<Expression>>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Located<Expression>>,
    },
    /// Right-associative; produced at statement level, never by climbing.
    Assignment {
        op: AssignmentOp,
        left: Box<Located<Expression>>,
        right: Box<Located<Expression>>,
    },
    MethodCall {
        target: Box<Located<Expression>>,
        args: Vec<Located<Expression>>,
    },
    /// Postfix member access on a non-identifier target (`f().g`).
    Member {
        target: Box<Located<Expression>>,
        name: NamePart,
    },
    /// `new Type(args)`
    ConstructorCall {
        ty: QualifiedName,
        args: Vec<Located<Expression>>,
    },
    /// `this`
    CurrentObjectInstance,
    /// `_`
    Discard,
    Literal(LiteralToken),
    Parenthesized(Box<Located<Expression>>),
    /// Sentinel standing in for an unparseable expression.
    Error(String),
}

/// One multi-line interpolated string. `lines` has at least one entry; a
/// line with zero embedded-expression segments is a pure literal.
#[derive(Debug, Clone, PartialEq)]
pub struct StringInterpolation {
    pub lines: Vec<Vec<StringSegment>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StringSegment {
    Literal(String),
    Expression(Located<Expression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralToken {
    True,
    False,
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Modulus,
    Add,
    Subtract,
    LeftShift,
    RightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Is,
    Equal,
    NotEqual,
    And,
    Or,
    NullCoalesce,
}

impl BinaryOp {
    /// Map an operator-range token to its AST operator.
    pub fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Multiply => Some(BinaryOp::Multiply),
            TokenKind::Divide => Some(BinaryOp::Divide),
            TokenKind::Modulus => Some(BinaryOp::Modulus),
            TokenKind::Add => Some(BinaryOp::Add),
            TokenKind::Subtract => Some(BinaryOp::Subtract),
            TokenKind::LeftShift => Some(BinaryOp::LeftShift),
            TokenKind::RightShift => Some(BinaryOp::RightShift),
            TokenKind::BitwiseAnd => Some(BinaryOp::BitwiseAnd),
            TokenKind::BitwiseOr => Some(BinaryOp::BitwiseOr),
            TokenKind::BitwiseXor => Some(BinaryOp::BitwiseXor),
            TokenKind::LessThan => Some(BinaryOp::LessThan),
            TokenKind::LessThanOrEqual => Some(BinaryOp::LessThanOrEqual),
            TokenKind::GreaterThan => Some(BinaryOp::GreaterThan),
            TokenKind::GreaterThanOrEqual => Some(BinaryOp::GreaterThanOrEqual),
            TokenKind::Is => Some(BinaryOp::Is),
            TokenKind::Equal => Some(BinaryOp::Equal),
            TokenKind::NotEqual => Some(BinaryOp::NotEqual),
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            TokenKind::NullCoalesce => Some(BinaryOp::NullCoalesce),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulus => "%",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::BitwiseOr => "|",
            BinaryOp::BitwiseXor => "^",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::Is => "is",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::NullCoalesce => "??",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Not,
    BitwiseNot,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "not",
            UnaryOp::BitwiseNot => "~",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOp {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    LeftShift,
    RightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    NullCoalesce,
}

impl AssignmentOp {
    /// Map an assignment-range token to its AST operator.
    pub fn from_token(kind: TokenKind) -> Option<AssignmentOp> {
        match kind {
            TokenKind::Assign => Some(AssignmentOp::Assign),
            TokenKind::AddAssign => Some(AssignmentOp::Add),
            TokenKind::SubtractAssign => Some(AssignmentOp::Subtract),
            TokenKind::MultiplyAssign => Some(AssignmentOp::Multiply),
            TokenKind::DivideAssign => Some(AssignmentOp::Divide),
            TokenKind::ModulusAssign => Some(AssignmentOp::Modulus),
            TokenKind::LeftShiftAssign => Some(AssignmentOp::LeftShift),
            TokenKind::RightShiftAssign => Some(AssignmentOp::RightShift),
            TokenKind::BitwiseAndAssign => Some(AssignmentOp::BitwiseAnd),
            TokenKind::BitwiseOrAssign => Some(AssignmentOp::BitwiseOr),
            TokenKind::BitwiseXorAssign => Some(AssignmentOp::BitwiseXor),
            TokenKind::NullCoalesceAssign => Some(AssignmentOp::NullCoalesce),
            _ => None,
        }
    }
}

impl fmt::Display for AssignmentOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssignmentOp::Assign => "=",
            AssignmentOp::Add => "+=",
            AssignmentOp::Subtract => "-=",
            AssignmentOp::Multiply => "*=",
            AssignmentOp::Divide => "/=",
            AssignmentOp::Modulus => "%=",
            AssignmentOp::LeftShift => "<<=",
            AssignmentOp::RightShift => ">>=",
            AssignmentOp::BitwiseAnd => "&=",
            AssignmentOp::BitwiseOr => "|=",
            AssignmentOp::BitwiseXor => "^=",
            AssignmentOp::NullCoalesce => "??=",
        };
        write!(f, "{s}")
    }
}

// ============================================================================
// Error-sentinel traversal
// ============================================================================

/// Collect every `Error` sentinel node in the tree, in source order.
///
/// Tooling that only holds the tree can rebuild the diagnostic list from
/// this. The matches are exhaustive on purpose: adding a node variant must
/// force this traversal to be revisited.
pub fn collect_errors(file: &File) -> Vec<(Position, &str)> {
    let mut out = Vec::new();
    for stmt in &file.statements {
        walk_statement(stmt, &mut out);
    }
    out
}

fn walk_block<'a>(block: &'a [Located<Statement>], out: &mut Vec<(Position, &'a str)>) {
    for stmt in block {
        walk_statement(stmt, out);
    }
}

fn walk_statement<'a>(stmt: &'a Located<Statement>, out: &mut Vec<(Position, &'a str)>) {
    match &stmt.node {
        Statement::Namespace(_)
        | Statement::Import(_)
        | Statement::Break
        | Statement::Continue
        | Statement::Space
        | Statement::Comment(_) => {}
        Statement::Class(c) => walk_block(&c.body, out),
        Statement::Method(m) => walk_block(&m.body, out),
        Statement::Property(p) => {
            walk_block(&p.get_body, out);
            walk_block(&p.set_body, out);
        }
        Statement::Constant(c) => walk_expression(&c.value, out),
        Statement::Field(f) => {
            if let Some(value) = &f.value {
                walk_expression(value, out);
            }
        }
        Statement::If(i) => {
            walk_expression(&i.condition, out);
            walk_block(&i.body, out);
            walk_block(&i.else_body, out);
        }
        Statement::For(f) => {
            walk_expression(&f.iterated, out);
            walk_block(&f.body, out);
        }
        Statement::Case(c) => {
            walk_expression(&c.subject, out);
            for branch in &c.branches {
                for value in &branch.values {
                    walk_expression(value, out);
                }
                walk_block(&branch.body, out);
            }
        }
        Statement::Return(value) => {
            if let Some(value) = value {
                walk_expression(value, out);
            }
        }
        Statement::Try(t) => {
            walk_block(&t.body, out);
            for catch in &t.catches {
                walk_block(&catch.body, out);
            }
        }
        Statement::Expression(e) => walk_expression(e, out),
        Statement::Error(message) => out.push((stmt.pos, message.as_str())),
    }
}

fn walk_expression<'a>(expr: &'a Located<Expression>, out: &mut Vec<(Position, &'a str)>) {
    match &expr.node {
        Expression::Identifier(_)
        | Expression::Number(_)
        | Expression::Character(_)
        | Expression::CurrentObjectInstance
        | Expression::Discard
        | Expression::Literal(_) => {}
        Expression::StringInterpolation(s) => {
            for line in &s.lines {
                for segment in line {
                    if let StringSegment::Expression(e) = segment {
                        walk_expression(e, out);
                    }
                }
            }
        }
        Expression::Binary { left, right, .. } | Expression::Assignment { left, right, .. } => {
            walk_expression(left, out);
            walk_expression(right, out);
        }
        Expression::Unary { operand, .. } => walk_expression(operand, out),
        Expression::MethodCall { target, args } => {
            walk_expression(target, out);
            for arg in args {
                walk_expression(arg, out);
            }
        }
        Expression::Member { target, .. } => walk_expression(target, out),
        Expression::ConstructorCall { args, .. } => {
            for arg in args {
                walk_expression(arg, out);
            }
        }
        Expression::Parenthesized(inner) => walk_expression(inner, out),
        Expression::Error(message) => out.push((expr.pos, message.as_str())),
    }
}
