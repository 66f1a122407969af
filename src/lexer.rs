//! Tokenizer for CSVQL queries.
//!
//! Single pass, left to right; whitespace is skipped, every emitted token
//! carries the character offset it started at, and the stream always ends
//! with `Token::Eof`.

use crate::error::{CsvqlError, CsvqlResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Select,
    From,
    Where,
    As,
    And,
    Or,
    True,
    False,

    // Identifiers and literals
    Identifier(String),
    Number(f64),
    String(String),

    // Operators
    Equal,         // =
    NotEqual,      // != or <>
    LessThan,      // <
    LessThanEq,    // <=
    GreaterThan,   // >
    GreaterThanEq, // >=
    Plus,          // +
    Minus,         // -
    Star,          // *
    Slash,         // /
    Percent,       // %

    // Delimiters
    Comma,      // ,
    Dot,        // .
    LeftParen,  // (
    RightParen, // )

    // Special
    Eof,
}

/// A token paired with the character offset it started at
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub offset: usize,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Numbers are classified before operators, so a `+`/`-` directly
    /// followed by digits starts a signed number rather than an operator.
    fn at_number_start(&self) -> bool {
        match self.current_char {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('.') => matches!(self.peek(1), Some(c) if c.is_ascii_digit()),
            Some('+') | Some('-') => match self.peek(1) {
                Some(c) if c.is_ascii_digit() => true,
                Some('.') => matches!(self.peek(2), Some(c) if c.is_ascii_digit()),
                _ => false,
            },
            _ => false,
        }
    }

    fn read_number(&mut self, start: usize) -> CsvqlResult<Token> {
        let mut num_str = String::new();

        if let Some(sign @ ('+' | '-')) = self.current_char {
            num_str.push(sign);
            self.advance();
        }

        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // The dot is part of the number only when a digit follows; a
        // trailing dot is left behind as a Dot token.
        if self.current_char == Some('.') && matches!(self.peek(1), Some(c) if c.is_ascii_digit()) {
            num_str.push('.');
            self.advance();
            while let Some(ch) = self.current_char {
                if ch.is_ascii_digit() {
                    num_str.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // Exponent is consumed only when well formed; `3e` stays a number
        // followed by an identifier.
        if let Some(e @ ('e' | 'E')) = self.current_char {
            let mut lookahead = 1;
            if matches!(self.peek(1), Some('+') | Some('-')) {
                lookahead = 2;
            }
            if matches!(self.peek(lookahead), Some(c) if c.is_ascii_digit()) {
                num_str.push(e);
                self.advance();
                if let Some(sign @ ('+' | '-')) = self.current_char {
                    num_str.push(sign);
                    self.advance();
                }
                while let Some(ch) = self.current_char {
                    if ch.is_ascii_digit() {
                        num_str.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        num_str
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| CsvqlError::Lexical {
                message: format!("Invalid number: {}", num_str),
                offset: start,
            })
    }

    /// String contents are taken verbatim between the delimiters: no escape
    /// processing, any character except the delimiter is allowed, including
    /// raw newlines.
    fn read_string(&mut self, start: usize) -> CsvqlResult<Token> {
        let quote = self.current_char.unwrap();
        self.advance(); // Skip opening quote

        let mut string = String::new();

        while let Some(ch) = self.current_char {
            if ch == quote {
                self.advance(); // Skip closing quote
                return Ok(Token::String(string));
            }
            string.push(ch);
            self.advance();
        }

        Err(CsvqlError::Lexical {
            message: "Unterminated string".to_string(),
            offset: start,
        })
    }

    fn read_identifier(&mut self) -> Token {
        let mut ident = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Keywords win over identifiers, case-insensitively, but only on a
        // full-word match; `selecting` stays an identifier.
        match ident.to_uppercase().as_str() {
            "SELECT" => Token::Select,
            "FROM" => Token::From,
            "WHERE" => Token::Where,
            "AS" => Token::As,
            "AND" => Token::And,
            "OR" => Token::Or,
            "TRUE" => Token::True,
            "FALSE" => Token::False,
            _ => Token::Identifier(ident),
        }
    }

    pub fn next_token(&mut self) -> CsvqlResult<SpannedToken> {
        self.skip_whitespace();
        let start = self.position;

        let token = match self.current_char {
            None => Token::Eof,

            Some(_) if self.at_number_start() => {
                return Ok(SpannedToken {
                    token: self.read_number(start)?,
                    offset: start,
                });
            }

            Some('\'') | Some('"') => {
                return Ok(SpannedToken {
                    token: self.read_string(start)?,
                    offset: start,
                });
            }

            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                return Ok(SpannedToken {
                    token: self.read_identifier(),
                    offset: start,
                });
            }

            Some('=') => {
                self.advance();
                Token::Equal
            }

            Some('!') => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    Token::NotEqual
                } else {
                    return Err(CsvqlError::Lexical {
                        message: "Expected '=' after '!'".to_string(),
                        offset: start,
                    });
                }
            }

            Some('<') => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    Token::LessThanEq
                } else if self.current_char == Some('>') {
                    self.advance();
                    Token::NotEqual // <>
                } else {
                    Token::LessThan
                }
            }

            Some('>') => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    Token::GreaterThanEq
                } else {
                    Token::GreaterThan
                }
            }

            Some('+') => {
                self.advance();
                Token::Plus
            }
            Some('-') => {
                self.advance();
                Token::Minus
            }
            Some('*') => {
                self.advance();
                Token::Star
            }
            Some('/') => {
                self.advance();
                Token::Slash
            }
            Some('%') => {
                self.advance();
                Token::Percent
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('.') => {
                self.advance();
                Token::Dot
            }
            Some('(') => {
                self.advance();
                Token::LeftParen
            }
            Some(')') => {
                self.advance();
                Token::RightParen
            }

            Some(ch) => {
                return Err(CsvqlError::Lexical {
                    message: format!("Unexpected character: {}", ch),
                    offset: start,
                });
            }
        };

        Ok(SpannedToken {
            token,
            offset: start,
        })
    }

    pub fn tokenize(&mut self) -> CsvqlResult<Vec<SpannedToken>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let at_end = token.token == Token::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }

        tracing::trace!("Tokenized {} tokens", tokens.len());
        Ok(tokens)
    }
}
