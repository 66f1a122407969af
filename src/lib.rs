//! CSVQL Core - storage-independent CSVQL query language front-end.
//!
//! This crate provides the tokenizer and recursive descent parser for CSVQL,
//! a small SQL-like query language (`SELECT ... FROM ... [WHERE ...]`) over
//! tabular data. It turns a query string into an immutable syntax tree with
//! no data-source dependencies; resolving symbol names against real columns
//! and evaluating the tree against rows is the caller's job.
//!
//! # Main Components
//!
//! - **Lexer**: turns raw text into a finite sequence of typed tokens
//! - **Parser**: recursive descent over the token sequence, with explicit
//!   precedence levels (OR, AND, comparison, additive, multiplicative, term)
//! - **AST**: the [`SelectQuery`] tree produced by a successful parse
//!
//! # Example
//!
//! ```rust
//! use csvql_core::{parse, SelectClause};
//!
//! let query = parse("SELECT name, age AS years FROM people WHERE age >= 21").unwrap();
//!
//! let SelectClause::Columns(columns) = &query.select else {
//!     panic!("expected a column list");
//! };
//! assert_eq!(columns.len(), 2);
//! assert_eq!(columns[1].alias.as_deref(), Some("years"));
//! assert_eq!(query.from.target, "people");
//! assert!(query.from.where_clause.is_some());
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types for convenience
pub use ast::{
    AddOp, AliasedExpression, Comparison, Conjunction, ConstantValue, Expression, Factor,
    FromClause, MulOp, Operand, RelOp, SelectClause, SelectQuery, SymbolRef, Term, WhereClause,
};
pub use error::{CsvqlError, CsvqlResult};
pub use lexer::{Lexer, SpannedToken, Token};
pub use parser::{parse, Parser};
