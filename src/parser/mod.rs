//! Compiler for date patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{CompiledFormat, Segment};
use lexer::Lexer;
use tokens::Token;

/// Compile a pattern string into a CompiledFormat.
///
/// Compilation never fails: whatever is not a directive is literal text.
pub fn compile(pattern: &str) -> CompiledFormat {
    let mut builder = SegmentBuilder::new();

    for spanned in Lexer::new(pattern).tokenize() {
        match spanned.token {
            Token::Directive(directive) => builder.add_segment(Segment::Directive(directive)),
            Token::Literal(ch) => builder.push_literal_char(ch),
            Token::Escaped(text) => builder.push_literal_str(text),
            Token::Eof => break,
        }
    }

    CompiledFormat::from_segments(pattern, builder.build())
}

/// Collects segments, coalescing adjacent literal text into one run.
struct SegmentBuilder {
    segments: Vec<Segment>,
    pending_literal: String,
}

impl SegmentBuilder {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            pending_literal: String::new(),
        }
    }

    fn push_literal_char(&mut self, ch: char) {
        self.pending_literal.push(ch);
    }

    fn push_literal_str(&mut self, s: &str) {
        self.pending_literal.push_str(s);
    }

    fn flush_literal(&mut self) {
        if !self.pending_literal.is_empty() {
            let text = std::mem::take(&mut self.pending_literal);
            self.segments.push(Segment::Literal(text));
        }
    }

    fn add_segment(&mut self, segment: Segment) {
        self.flush_literal();
        self.segments.push(segment);
    }

    fn build(mut self) -> Vec<Segment> {
        self.flush_literal();
        self.segments
    }
}
