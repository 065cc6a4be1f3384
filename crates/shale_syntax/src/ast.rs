//! Abstract Syntax Tree definitions for shale.
//!
//! The tree is purely syntactic: no scopes, no bindings, no node identity beyond position. Every node owns its
//! children, and nothing is mutated after the parser builds it.
//!
//! ## Serialization
//! Nodes serialize (via `serde`) as objects tagged by a `kind` field, e.g.
//! `{"kind":"Binary","op":"+","left":{..},"right":{..}}`. A [`Script`] serializes as a bare array of statements.

use serde::Serialize;
use shale_core::lang::keywords::KeywordId;
use shale_core::lang::punctuation::PunctuatorId;
use std::fmt;

/// Source location span (byte offsets, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type Ident = String;

/// A whole source text: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Script {
    pub body: Vec<Statement>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Statement {
    #[serde(rename = "BlockStatementList")]
    Block(Block),
    /// A `var`/`const` declaration with a single declarator.
    VarDecl(VarDecl),
    /// A `var`/`const` declaration with two or more declarators.
    VarDeclList { list: Vec<VarDecl> },
    #[serde(rename = "ExprStatement")]
    Expr { expr: Expr },
    #[serde(rename = "EmptyStatement")]
    Empty,
    #[serde(rename = "IfStatement")]
    If(IfStmt),
    #[serde(rename = "WhileStatement")]
    While(WhileStmt),
    #[serde(rename = "ForStatement")]
    For(ForStmt),
    #[serde(rename = "DoWhileStatement")]
    DoWhile(DoWhileStmt),
    #[serde(rename = "SwitchStatement")]
    Switch(SwitchStmt),
    #[serde(rename = "BreakStatement")]
    Break { label: Option<Ident> },
    #[serde(rename = "ContinueStatement")]
    Continue { label: Option<Ident> },
    #[serde(rename = "ReturnStatement")]
    Return { argument: Option<Expr> },
    #[serde(rename = "ThrowStatement")]
    Throw { argument: Expr },
    #[serde(rename = "TryCatchStatement")]
    TryCatch(TryCatchStmt),
    #[serde(rename = "LabelStatement")]
    Label { label: Ident, body: Box<Statement> },
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Block {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Var,
    Const,
}

impl BindingKind {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Var => Some(BindingKind::Var),
            KeywordId::Const => Some(BindingKind::Const),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub name: Ident,
    #[serde(rename = "type")]
    pub binding: BindingKind,
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoWhileStmt {
    pub body: Box<Statement>,
    pub condition: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub condition: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Box<Statement>,
}

/// The first clause of a `for (...; ...; ...)` header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    /// Always a [`Statement::VarDecl`] or [`Statement::VarDeclList`].
    Declaration(Box<Statement>),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchStmt {
    pub discriminant: Expr,
    pub cases: Vec<CaseClause>,
}

/// `case test:` or, when `test` is `None`, `default:`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub struct CaseClause {
    pub test: Option<Expr>,
    pub body: Vec<Statement>,
}

impl CaseClause {
    pub fn is_default(&self) -> bool {
        self.test.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TryCatchStmt {
    pub body: Block,
    pub param: Ident,
    pub handler: Block,
    pub finalizer: Option<Block>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Expr {
    Identifier {
        name: Ident,
    },
    Number {
        value: f64,
    },
    String {
        value: String,
    },
    Boolean {
        value: bool,
    },
    Null,
    /// `this` or `super`
    Fixed {
        value: FixedRef,
    },
    /// `[a, , b]`; holes are `None`.
    ArrayLiteral {
        elements: Vec<Option<Expr>>,
    },
    /// Comma-separated clause of a `for` header; holes are `None`.
    ExprList {
        list: Vec<Option<Expr>>,
    },
    /// `owner.member`
    MemberAccess {
        owner: Box<Expr>,
        member: Ident,
    },
    /// `owner[index]`
    ArrayAccess {
        owner: Box<Expr>,
        index: Box<Expr>,
    },
    FunctionCall {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Assignment {
        op: AssignOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Ternary {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnaryPlus {
        operand: Box<Expr>,
    },
    UnaryMinus {
        operand: Box<Expr>,
    },
    LogicalNot {
        operand: Box<Expr>,
    },
    BitwiseNot {
        operand: Box<Expr>,
    },
    PreInc {
        operand: Box<Expr>,
    },
    PreDec {
        operand: Box<Expr>,
    },
    PostInc {
        operand: Box<Expr>,
    },
    PostDec {
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<Ident>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn number(value: f64) -> Self {
        Expr::Number { value }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Wrap `operand` in the node for a prefix operator.
    pub fn prefix(op: PrefixOp, operand: Expr) -> Self {
        let operand = Box::new(operand);
        match op {
            PrefixOp::Plus => Expr::UnaryPlus { operand },
            PrefixOp::Minus => Expr::UnaryMinus { operand },
            PrefixOp::Not => Expr::LogicalNot { operand },
            PrefixOp::BitNot => Expr::BitwiseNot { operand },
            PrefixOp::Increment => Expr::PreInc { operand },
            PrefixOp::Decrement => Expr::PreDec { operand },
        }
    }

    /// Valid left-hand side of an assignment.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Expr::Identifier { .. } | Expr::MemberAccess { .. } | Expr::ArrayAccess { .. }
        )
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expr::Identifier { name } => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedRef {
    This,
    Super,
}

/// Prefix operators: `+ - ! ~ ++ --`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Plus,
    Minus,
    Not,
    BitNot,
    Increment,
    Decrement,
}

impl PrefixOp {
    pub fn from_punctuator(id: PunctuatorId) -> Option<Self> {
        Some(match id {
            PunctuatorId::Plus => PrefixOp::Plus,
            PunctuatorId::Minus => PrefixOp::Minus,
            PunctuatorId::Bang => PrefixOp::Not,
            PunctuatorId::Tilde => PrefixOp::BitNot,
            PunctuatorId::PlusPlus => PrefixOp::Increment,
            PunctuatorId::MinusMinus => PrefixOp::Decrement,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "instanceof")]
    Instanceof,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = ">>>")]
    UShr,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,
}

impl BinaryOp {
    pub fn from_punctuator(id: PunctuatorId) -> Option<Self> {
        Some(match id {
            PunctuatorId::PipePipe => BinaryOp::Or,
            PunctuatorId::AmpAmp => BinaryOp::And,
            PunctuatorId::Pipe => BinaryOp::BitOr,
            PunctuatorId::Caret => BinaryOp::BitXor,
            PunctuatorId::Amp => BinaryOp::BitAnd,
            PunctuatorId::EqEq => BinaryOp::Eq,
            PunctuatorId::BangEq => BinaryOp::NotEq,
            PunctuatorId::Lt => BinaryOp::Lt,
            PunctuatorId::Gt => BinaryOp::Gt,
            PunctuatorId::LtEq => BinaryOp::LtEq,
            PunctuatorId::GtEq => BinaryOp::GtEq,
            PunctuatorId::ShiftLeft => BinaryOp::Shl,
            PunctuatorId::ShiftRight => BinaryOp::Shr,
            PunctuatorId::UnsignedShiftRight => BinaryOp::UShr,
            PunctuatorId::Plus => BinaryOp::Add,
            PunctuatorId::Minus => BinaryOp::Sub,
            PunctuatorId::Star => BinaryOp::Mul,
            PunctuatorId::Slash => BinaryOp::Div,
            PunctuatorId::Percent => BinaryOp::Mod,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Instanceof => "instanceof",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignOp {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "*=")]
    Mul,
    #[serde(rename = "/=")]
    Div,
    #[serde(rename = "%=")]
    Mod,
    #[serde(rename = "+=")]
    Add,
    #[serde(rename = "-=")]
    Sub,
    #[serde(rename = "<<=")]
    Shl,
    #[serde(rename = ">>=")]
    Shr,
    #[serde(rename = ">>>=")]
    UShr,
    #[serde(rename = "&=")]
    BitAnd,
    #[serde(rename = "^=")]
    BitXor,
    #[serde(rename = "|=")]
    BitOr,
}

impl AssignOp {
    pub fn from_punctuator(id: PunctuatorId) -> Option<Self> {
        Some(match id {
            PunctuatorId::Assign => AssignOp::Assign,
            PunctuatorId::StarAssign => AssignOp::Mul,
            PunctuatorId::SlashAssign => AssignOp::Div,
            PunctuatorId::PercentAssign => AssignOp::Mod,
            PunctuatorId::PlusAssign => AssignOp::Add,
            PunctuatorId::MinusAssign => AssignOp::Sub,
            PunctuatorId::ShiftLeftAssign => AssignOp::Shl,
            PunctuatorId::ShiftRightAssign => AssignOp::Shr,
            PunctuatorId::UnsignedShiftRightAssign => AssignOp::UShr,
            PunctuatorId::AmpAssign => AssignOp::BitAnd,
            PunctuatorId::CaretAssign => AssignOp::BitXor,
            PunctuatorId::PipeAssign => AssignOp::BitOr,
            _ => return None,
        })
    }
}
