//! Lexer for tokenizing date patterns.
//!
//! The lexer converts a pattern into a stream of tokens. It handles:
//! - Directives, matched longest first (`MMMM` never splits into `MM` `MM`)
//! - `[...]` escapes, whose content is literal text
//! - Everything else, one literal character at a time

use crate::parser::tokens::{SpannedToken, Token, DIRECTIVES};

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken<'a> {
        let start = self.position;

        let Some(ch) = self.current_char() else {
            return SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            };
        };

        if ch == '[' {
            if let Some(content) = self.try_match_escape() {
                return SpannedToken {
                    token: Token::Escaped(content),
                    start,
                    end: self.position,
                };
            }
        }

        let rest = self.remaining();
        let token = match DIRECTIVES.iter().find(|(text, _)| rest.starts_with(*text)) {
            Some((text, directive)) => {
                self.position += text.len();
                Token::Directive(*directive)
            }
            None => {
                self.advance();
                Token::Literal(ch)
            }
        };

        SpannedToken {
            token,
            start,
            end: self.position,
        }
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the remaining input as a string slice.
    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Tries to match a `[...]` escape at the current position.
    ///
    /// The content runs up to the first `]` and may not contain `[`. When
    /// there is no such closing bracket the `[` is not an escape.
    fn try_match_escape(&mut self) -> Option<&'a str> {
        let body = &self.remaining()[1..];
        let close = body.find(']')?;
        let content = &body[..close];
        if content.contains('[') {
            return None;
        }
        // '[' and ']' are one byte each
        self.position += close + 2;
        Some(content)
    }

    /// Returns all remaining tokens as a vector, ending with `Eof`.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Vec<SpannedToken<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
