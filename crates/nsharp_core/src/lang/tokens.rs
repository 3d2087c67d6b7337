//! The closed token-kind enumeration for the indentation dialect.
//!
//! `TokenKind` is laid out in **semantic ranges**: structural tokens, trivia,
//! literals, declaration keywords, statement keywords, modifiers, binary
//! operators grouped by precedence tier, assignment operators, and
//! punctuation. Classification questions ("is this a modifier?", "is this an
//! assignment operator?") are answered by range comparison over the derived
//! ordering, never by per-kind branching, so a kind inserted into a range is
//! picked up by every query automatically.
//!
//! ## Notes
//! - The enum is `Copy` and carries no payloads; literal text travels on the
//!   token record in `nsharp_syntax`, which keeps range comparison possible.
//! - Keep the declaration order in sync with the range helpers below when
//!   adding kinds.

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    // ========== Structural ==========
    Indent,
    Dedent,
    EndOfLine,
    EndOfFile,
    /// Lexical error; the token text carries the message.
    Error,

    // ========== Trivia ==========
    Comment,
    Space,

    // ========== Identifiers and literals ==========
    Identifier,
    BacktickIdentifier,
    Number,
    CharacterLiteral,
    StringStart,
    StringLiteral,
    StringEnd,
    True,
    False,
    Null,
    /// The `_` placeholder.
    Discard,

    // ========== Declaration keywords ==========
    Namespace,
    Use,
    Class,
    Interface,
    Struct,
    Constant,

    // ========== Statement keywords ==========
    If,
    Else,
    Case,
    For,
    In,
    Break,
    Continue,
    Return,
    Try,
    Catch,
    Get,
    Set,
    From,
    New,
    This,

    // ========== Modifiers ==========
    Public,
    Protected,
    Internal,
    Private,
    Static,
    Virtual,
    Override,
    Abstract,

    // ========== Binary operators, grouped by precedence tier ==========
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

    // ========== Prefix-only operators ==========
    Not,
    BitwiseNot,

    // ========== Assignment operators ==========
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModulusAssign,
    LeftShiftAssign,
    RightShiftAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    NullCoalesceAssign,

    // ========== Punctuation ==========
    Dot,
    /// The `..` statement-continuation marker.
    DoubleDot,
    Comma,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftCurly,
    RightCurly,
}

impl TokenKind {
    /// Trivia preserved for round-tripping (comments, blank lines).
    pub fn is_trivia(self) -> bool {
        (Self::Comment..=Self::Space).contains(&self)
    }

    /// Identifier or literal-bearing token.
    pub fn is_literal(self) -> bool {
        (Self::Identifier..=Self::Discard).contains(&self)
    }

    /// Keyword that opens a declaration (`ns`, `use`, `class`, ...).
    pub fn is_declaration_keyword(self) -> bool {
        (Self::Namespace..=Self::Constant).contains(&self)
    }

    /// Member/type modifier (`public`, `static`, ...).
    pub fn is_modifier(self) -> bool {
        (Self::Public..=Self::Abstract).contains(&self)
    }

    /// Infix binary operator (participates in precedence climbing).
    pub fn is_binary_operator(self) -> bool {
        (Self::Multiply..=Self::NullCoalesce).contains(&self)
    }

    /// Simple or compound assignment operator.
    pub fn is_assignment_operator(self) -> bool {
        (Self::Assign..=Self::NullCoalesceAssign).contains(&self)
    }

    /// Token that may legally end a physical line while the statement
    /// continues on the next one (trailing operator, open delimiter, ...).
    pub fn is_continuation_postfix(self) -> bool {
        self.is_binary_operator()
            || self.is_assignment_operator()
            || matches!(
                self,
                Self::Dot | Self::Comma | Self::LeftParen | Self::LeftBracket
            )
    }

    /// Token that marks the start of a line as the continuation of the
    /// previous statement (`..` marker, leading `.` of a method chain,
    /// closing delimiter of a wrapped list).
    pub fn is_continuation_prefix(self) -> bool {
        matches!(
            self,
            Self::DoubleDot | Self::Dot | Self::RightParen | Self::RightBracket
        )
    }
}
