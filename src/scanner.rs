use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::token::{Token, Type};
use crate::literal::Literal;
use crate::error::{Error, ScanError};

pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column_offset: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner.
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source: source.chars().peekmore(),
            tokens: vec!(),
            start: 0,
            current: 0,
            line: 1,
            column_offset: 0,
        }
    }

    /// Scans the source code and returns a vector of tokens.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        let column = self.start - self.column_offset;
        self.tokens.push(Token::new(Type::EOF, String::new(), None, self.line, column));

        self.tokens.clone()
    }

    /// Returns the next character.
    fn advance(&mut self) -> char {
        match self.source.next() {
            Some(char) => {
                self.current += 1;
                char
            },
            None => panic!("tried to advance past end of the file."),
        }
    }

    /// Returns the next character without consuming it, or '\0' at end of file.
    fn peek(&mut self) -> char {
        self.source.reset_cursor();
        *self.source.peek().unwrap_or(&'\0')
    }

    /// Returns the character after next without consuming it, or '\0' at end of file.
    fn peek_next(&mut self) -> char {
        self.source.reset_cursor();
        self.source.advance_cursor();
        *self.source.peek().unwrap_or(&'\0')
    }

    /// Consumes the next character if it matches the expected one.
    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }

        self.advance();
        true
    }

    /// Adds a new token to the list of tokens.
    fn add_token(&mut self, kind: Type, lexeme: String, literal: Option<Literal>) {
        let column = self.start - self.column_offset;
        self.tokens.push(Token::new(kind, lexeme, literal, self.line, column));
    }

    /// Adds a new single char token to the list of tokens.
    fn add_single_char_token(&mut self, kind: Type) {
        let c = self.advance();
        self.add_token(kind, c.to_string(), None);
    }

    /// Returns if the scanner has reached the end of the file.
    fn is_at_end(&mut self) -> bool {
        self.source.reset_cursor();
        self.source.peek().is_none()
    }

    /// Handles a string literal.
    fn string(&mut self) {
        self.advance(); // Move past the opening double quote.

        let start_line = self.line;
        let mut value = Vec::new();

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
                self.column_offset = self.current + 1;
            }
            value.push(self.advance());
        }

        if self.is_at_end() {
            ScanError {
                line: start_line,
                message: String::from("Unterminated string."),
            }.throw();
            return;
        }

        self.advance(); // Move past the closing double quote.

        let value: String = value.into_iter().collect();

        // Literal does not include the surrounding quotes unlike the lexeme.
        self.add_token(Type::String, value.clone(), Some(Literal::String(value)));
    }

    /// Handles a number literal.
    fn number(&mut self) {
        let mut value = Vec::new();

        while self.peek().is_ascii_digit() {
            value.push(self.advance());
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            value.push(self.advance()); // Consume the dot.

            while self.peek().is_ascii_digit() {
                value.push(self.advance());
            }
        }

        let value: String = value.into_iter().collect();
        let value_num: f64 = value.parse().expect("scanned digits to form a valid number");

        self.add_token(Type::Number, value, Some(Literal::Number(value_num)));
    }

    /// Handles an identifier or a keyword.
    fn identifier(&mut self) {
        let mut value = Vec::new();

        // is_alphanumeric does not include underscores.
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            value.push(self.advance());
        }

        let value = String::from_iter(value);
        let token_type = match value.as_str() {
            "and"      => Type::And,
            "class"    => Type::Class,
            "else"     => Type::Else,
            "false"    => Type::False,
            "for"      => Type::For,
            "fun"      => Type::Fun,
            "if"       => Type::If,
            "nil"      => Type::Nil,
            "or"       => Type::Or,
            "print"    => Type::Print,
            "return"   => Type::Return,
            "break"    => Type::Break,
            "super"    => Type::Super,
            "this"     => Type::This,
            "true"     => Type::True,
            "var"      => Type::Var,
            "while"    => Type::While,
            _          => Type::Identifier,
        };

        self.add_token(token_type, value, None);
    }

    /// Scans the next token.
    fn scan_token(&mut self) {
        let c = self.peek();
        match c {
            // One character tokens
            '(' => self.add_single_char_token(Type::LeftParen),
            ')' => self.add_single_char_token(Type::RightParen),
            '{' => self.add_single_char_token(Type::LeftBrace),
            '}' => self.add_single_char_token(Type::RightBrace),
            ',' => self.add_single_char_token(Type::Comma),
            '.' => self.add_single_char_token(Type::Dot),
            '-' => self.add_single_char_token(Type::Minus),
            '+' => self.add_single_char_token(Type::Plus),
            ';' => self.add_single_char_token(Type::Semicolon),
            '*' => self.add_single_char_token(Type::Star),

            // One or two character tokens
            '!' => {
                self.advance();
                let kind = if self.matches('=') { Type::BangEqual } else { Type::Bang };
                let lexeme = if kind == Type::BangEqual { "!=" } else { "!" };
                self.add_token(kind, lexeme.to_string(), None);
            },
            '=' => {
                self.advance();
                let kind = if self.matches('=') { Type::EqualEqual } else { Type::Equal };
                let lexeme = if kind == Type::EqualEqual { "==" } else { "=" };
                self.add_token(kind, lexeme.to_string(), None);
            },
            '<' => {
                self.advance();
                let kind = if self.matches('=') { Type::LessEqual } else { Type::Less };
                let lexeme = if kind == Type::LessEqual { "<=" } else { "<" };
                self.add_token(kind, lexeme.to_string(), None);
            },
            '>' => {
                self.advance();
                let kind = if self.matches('=') { Type::GreaterEqual } else { Type::Greater };
                let lexeme = if kind == Type::GreaterEqual { ">=" } else { ">" };
                self.add_token(kind, lexeme.to_string(), None);
            },
            '/' => {
                self.advance();
                if self.matches('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(Type::Slash, "/".to_string(), None);
                }
            },

            // Ignore whitespace
            ' ' | '\r' | '\t' => {
                self.advance();
            },

            // Update line counter
            '\n' => {
                self.advance();
                self.line += 1;
                self.column_offset = self.current;
            },

            // String
            '"' => self.string(),

            // Numbers
            c if c.is_ascii_digit() => self.number(),

            // Identifiers
            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => {
                self.advance();

                ScanError {
                    line: self.line,
                    message: format!("Unexpected character '{c}'."),
                }.throw();
            },
        }
    }
}
