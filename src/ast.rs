//! Syntax tree for CSVQL queries.
//!
//! Every node is built exactly once during a parse, owned by its parent and
//! never mutated afterwards. Mutually exclusive alternatives are enums, so
//! invariants like "`*` or a column list, never both" hold by construction.

use serde::Serialize;

use crate::error::{CsvqlError, CsvqlResult};

/// AST node for a complete `SELECT ... FROM ... [WHERE ...]` query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectQuery {
    pub select: SelectClause,
    pub from: FromClause,
}

/// Projection: `*`, or a non-empty comma-separated list of expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectClause {
    All,
    Columns(Vec<AliasedExpression>),
}

/// A projected expression with an optional `AS name` alias.
/// The alias is absent unless spelled out; it never defaults to the
/// expression's own text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasedExpression {
    pub expression: Expression,
    pub alias: Option<String>,
}

/// FROM target with an optional WHERE clause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromClause {
    pub target: String,
    pub where_clause: Option<WhereClause>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereClause {
    pub expression: Expression,
}

/// Logical OR of one or more conjunctions, left to right
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    pub disjuncts: Vec<Conjunction>,
}

/// Logical AND of one or more comparisons; AND binds tighter than OR
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conjunction {
    pub conjuncts: Vec<Comparison>,
}

/// At most one relational application per node. A bare operand (no
/// relation) is a valid truthy comparison; chained relations like
/// `a < b < c` require explicit parentheses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub lhs: Operand,
    /// Operator and right-hand side together: both present or both absent
    pub relation: Option<(RelOp, Operand)>,
}

/// Additive level: at most one `+`/`-` application per node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operand {
    pub lhs: Factor,
    pub op: Option<(AddOp, Factor)>,
}

/// Multiplicative level: at most one `*`/`/`/`%` application per node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factor {
    pub lhs: Term,
    pub op: Option<(MulOp, Term)>,
}

/// Tightest level: a literal, a symbol reference, or a parenthesized
/// sub-expression. Parenthesization is the only way to override the default
/// precedence or to build longer arithmetic/relational chains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Term {
    Constant(ConstantValue),
    Symbol(SymbolRef),
    SubExpression(Box<Expression>),
}

/// A named reference, optionally invoked as a function call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolRef {
    pub name: String,
    /// `Some` means call parentheses were present; the list is never empty
    pub arguments: Option<Vec<Expression>>,
}

impl SymbolRef {
    /// Plain reference without call parentheses
    pub fn reference(name: String) -> Self {
        Self {
            name,
            arguments: None,
        }
    }

    /// Function call. The grammar requires at least one argument whenever
    /// call parentheses appear; an empty list here is a parser bug.
    pub fn call(name: String, arguments: Vec<Expression>) -> CsvqlResult<Self> {
        if arguments.is_empty() {
            return Err(CsvqlError::Internal(
                "function call constructed with an empty argument list".to_string(),
            ));
        }
        Ok(Self {
            name,
            arguments: Some(arguments),
        })
    }
}

/// Literal value; exactly one meaning per value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ConstantValue {
    Number(f64),
    String(String),
    Boolean(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddOp {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MulOp {
    Multiply,
    Divide,
    Modulo,
}
