//! Recursive descent parser for CSVQL queries.
//!
//! One-token lookahead over the lexer's output. The first error aborts the
//! parse; there is no recovery and no partial tree.

use crate::ast::{AliasedExpression, FromClause, SelectClause, SelectQuery, WhereClause};
use crate::error::{CsvqlError, CsvqlResult};
use crate::lexer::{Lexer, SpannedToken, Token};

mod expressions;


/// CSVQL parser. One value per parse call; holds no state across calls.
pub struct Parser {
    tokens: Vec<SpannedToken>,
    position: usize,
}

impl Parser {
    pub fn new(input: &str) -> CsvqlResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;

        Ok(Self {
            tokens,
            position: 0,
        })
    }

    fn current_token(&self) -> &Token {
        self.tokens
            .get(self.position)
            .map(|t| &t.token)
            .unwrap_or(&Token::Eof)
    }

    fn current_offset(&self) -> usize {
        match self.tokens.get(self.position) {
            Some(t) => t.offset,
            None => self.tokens.last().map(|t| t.offset).unwrap_or(0),
        }
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn syntax_error(&self, message: String) -> CsvqlError {
        CsvqlError::Syntax {
            message,
            offset: self.current_offset(),
        }
    }

    fn expect(&mut self, expected: Token) -> CsvqlResult<()> {
        if *self.current_token() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.syntax_error(format!(
                "Expected {:?}, found {:?}",
                expected,
                self.current_token()
            )))
        }
    }

    fn expect_identifier(&mut self) -> CsvqlResult<String> {
        match self.current_token().clone() {
            Token::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            other => Err(self.syntax_error(format!("Expected identifier, found {:?}", other))),
        }
    }

    pub fn parse(&mut self) -> CsvqlResult<SelectQuery> {
        let select = self.parse_select_clause()?;
        let from = self.parse_from_clause()?;

        // Anything left over past the optional WHERE clause is an error
        self.expect(Token::Eof)?;

        Ok(SelectQuery { select, from })
    }

    fn parse_select_clause(&mut self) -> CsvqlResult<SelectClause> {
        self.expect(Token::Select)?;

        // `*` is the whole projection: it takes no alias and cannot be
        // combined with other items, so FROM must follow immediately.
        if *self.current_token() == Token::Star {
            self.advance();
            return Ok(SelectClause::All);
        }

        let mut columns = vec![self.parse_aliased_expression()?];
        while *self.current_token() == Token::Comma {
            self.advance();
            columns.push(self.parse_aliased_expression()?);
        }

        Ok(SelectClause::Columns(columns))
    }

    fn parse_aliased_expression(&mut self) -> CsvqlResult<AliasedExpression> {
        let expression = self.parse_expression()?;

        let alias = if *self.current_token() == Token::As {
            self.advance();
            Some(self.expect_identifier()?)
        } else {
            None
        };

        Ok(AliasedExpression { expression, alias })
    }

    fn parse_from_clause(&mut self) -> CsvqlResult<FromClause> {
        self.expect(Token::From)?;

        // The target is a plain identifier; keywords like WHERE cannot
        // stand in for it.
        let target = self.expect_identifier()?;

        let where_clause = if *self.current_token() == Token::Where {
            self.advance();
            Some(WhereClause {
                expression: self.parse_expression()?,
            })
        } else {
            None
        };

        Ok(FromClause {
            target,
            where_clause,
        })
    }
}

/// Parse a query string into its syntax tree.
pub fn parse(input: &str) -> CsvqlResult<SelectQuery> {
    tracing::trace!("Parsing query: {}", input);
    let mut parser = Parser::new(input)?;
    parser.parse()
}
