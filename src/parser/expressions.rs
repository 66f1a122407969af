//! Expression precedence cascade for CSVQL.
//!
//! Loosest to tightest: OR, AND, comparison, additive, multiplicative, term.
//! The OR and AND levels accept arbitrary-length chains. The comparison,
//! additive and multiplicative levels apply AT MOST one operation per node,
//! so `a + b + c` and `a < b < c` do not parse flat; only explicit
//! parentheses recover equivalent grouping.

use crate::ast::{
    AddOp, Comparison, Conjunction, ConstantValue, Expression, Factor, MulOp, Operand, RelOp,
    SymbolRef, Term,
};
use crate::error::CsvqlResult;
use crate::lexer::Token;
use crate::parser::Parser;

impl Parser {
    /// OR level: one or more AND groups
    pub(super) fn parse_expression(&mut self) -> CsvqlResult<Expression> {
        let mut disjuncts = vec![self.parse_conjunction()?];

        while *self.current_token() == Token::Or {
            self.advance();
            disjuncts.push(self.parse_conjunction()?);
        }

        Ok(Expression { disjuncts })
    }

    /// AND level: one or more comparisons
    fn parse_conjunction(&mut self) -> CsvqlResult<Conjunction> {
        let mut conjuncts = vec![self.parse_comparison()?];

        while *self.current_token() == Token::And {
            self.advance();
            conjuncts.push(self.parse_comparison()?);
        }

        Ok(Conjunction { conjuncts })
    }

    /// A single optional relational application; a bare operand is a valid
    /// truthy comparison
    fn parse_comparison(&mut self) -> CsvqlResult<Comparison> {
        let lhs = self.parse_operand()?;

        let relation = match self.rel_op() {
            Some(op) => {
                self.advance();
                Some((op, self.parse_operand()?))
            }
            None => None,
        };

        Ok(Comparison { lhs, relation })
    }

    fn rel_op(&self) -> Option<RelOp> {
        match self.current_token() {
            Token::Equal => Some(RelOp::Eq),
            Token::NotEqual => Some(RelOp::NotEq),
            Token::LessThan => Some(RelOp::Lt),
            Token::LessThanEq => Some(RelOp::LtEq),
            Token::GreaterThan => Some(RelOp::Gt),
            Token::GreaterThanEq => Some(RelOp::GtEq),
            _ => None,
        }
    }

    /// Additive level: at most one `+`/`-` application
    fn parse_operand(&mut self) -> CsvqlResult<Operand> {
        let lhs = self.parse_factor()?;

        let add_op = match self.current_token() {
            Token::Plus => Some(AddOp::Plus),
            Token::Minus => Some(AddOp::Minus),
            _ => None,
        };

        let op = match add_op {
            Some(add_op) => {
                self.advance();
                Some((add_op, self.parse_factor()?))
            }
            None => None,
        };

        Ok(Operand { lhs, op })
    }

    /// Multiplicative level: at most one `*`/`/`/`%` application
    fn parse_factor(&mut self) -> CsvqlResult<Factor> {
        let lhs = self.parse_term()?;

        let mul_op = match self.current_token() {
            Token::Star => Some(MulOp::Multiply),
            Token::Slash => Some(MulOp::Divide),
            Token::Percent => Some(MulOp::Modulo),
            _ => None,
        };

        let op = match mul_op {
            Some(mul_op) => {
                self.advance();
                Some((mul_op, self.parse_term()?))
            }
            None => None,
        };

        Ok(Factor { lhs, op })
    }

    fn parse_term(&mut self) -> CsvqlResult<Term> {
        match self.current_token().clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Term::Constant(ConstantValue::Number(n)))
            }

            Token::String(s) => {
                self.advance();
                Ok(Term::Constant(ConstantValue::String(s)))
            }

            Token::True => {
                self.advance();
                Ok(Term::Constant(ConstantValue::Boolean(true)))
            }

            Token::False => {
                self.advance();
                Ok(Term::Constant(ConstantValue::Boolean(false)))
            }

            Token::Identifier(name) => {
                self.advance();
                Ok(Term::Symbol(self.parse_symbol_ref(name)?))
            }

            // Parentheses reset precedence: the content is a full
            // expression, so grouping can locally invert the default
            // OR-looser-than-AND ordering.
            Token::LeftParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(Token::RightParen)?;
                Ok(Term::SubExpression(Box::new(expression)))
            }

            other => Err(self.syntax_error(format!("Unexpected token in expression: {:?}", other))),
        }
    }

    /// Plain reference, or a function call when `(` follows. A call takes
    /// one or more comma-separated argument expressions; empty argument
    /// lists are not part of the grammar.
    fn parse_symbol_ref(&mut self, name: String) -> CsvqlResult<SymbolRef> {
        if *self.current_token() != Token::LeftParen {
            return Ok(SymbolRef::reference(name));
        }

        self.advance(); // consume '('

        let mut arguments = vec![self.parse_expression()?];
        while *self.current_token() == Token::Comma {
            self.advance();
            arguments.push(self.parse_expression()?);
        }

        self.expect(Token::RightParen)?;

        SymbolRef::call(name, arguments)
    }
}
