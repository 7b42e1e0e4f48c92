use lexers::{scan_integer, scan_quoted_string, scan_word, skip_whitespace, Scanner};
use std::str::Chars;
use thiserror::Error;

use crate::ast::{Literal, Node};
use crate::stack::ensure_sufficient_stack;

/// Every variant is a syntax error in the source text.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum ParseError {
    #[error("Unexpected syntax: {0}")]
    UnexpectedSyntax(String),
    #[error("Expected ',' or ')'")]
    ExpectedSeparator,
    #[error("Unexpected text after program")]
    TrailingText,
}

pub type ParseResult = Result<Node, ParseError>;

/* Grammar:
 *
 *  program     := expression EOF ;
 *  expression  := atom { "(" [ expression { "," expression } [ "," ] ] ")" } ;
 *  atom        := STRING | NUMBER | WORD ;
 *
 */

/// Nesting depth is limited only by memory, the stack grows as needed.
pub struct Parser<'a> {
    src: Scanner<Chars<'a>>,
}

impl<'a> Parser<'a> {
    pub fn parse_str(source: &'a str) -> ParseResult {
        let mut parser = Parser { src: Scanner::from_str(source) };
        let program = parser.expression()?;
        skip_whitespace(&mut parser.src);
        if parser.src.peek().is_some() {
            return Err(ParseError::TrailingText);
        }
        Ok(program)
    }

    fn expression(&mut self) -> ParseResult {
        ensure_sufficient_stack(|| self.primary())
    }

    fn primary(&mut self) -> ParseResult {
        skip_whitespace(&mut self.src);
        let atom = if let Some(s) = scan_quoted_string(&mut self.src, '"') {
            Node::Value(Literal::Str(s))
        } else if let Some(digits) = scan_integer(&mut self.src) {
            let n = digits
                .parse::<f64>()
                .map_err(|_| ParseError::UnexpectedSyntax(digits.clone()))?;
            Node::Value(Literal::Num(n))
        } else if let Some(name) = scan_word(&mut self.src) {
            Node::Word(name)
        } else {
            return Err(ParseError::UnexpectedSyntax(self.src.remaining()));
        };
        self.application(atom)
    }

    // each "(...)" following an expression applies it, so f(1)(2) nests left
    fn application(&mut self, mut expr: Node) -> ParseResult {
        loop {
            skip_whitespace(&mut self.src);
            if self.src.accept(&'(').is_none() {
                return Ok(expr);
            }
            skip_whitespace(&mut self.src);
            let mut args = Vec::new();
            while self.src.accept(&')').is_none() {
                args.push(self.expression()?);
                skip_whitespace(&mut self.src);
                if self.src.accept(&',').is_some() {
                    skip_whitespace(&mut self.src);
                } else if self.src.peek() != Some(')') {
                    return Err(ParseError::ExpectedSeparator);
                }
            }
            self.src.ignore();
            expr = Node::apply(expr, args);
        }
    }
}

pub fn parse(source: &str) -> ParseResult {
    Parser::parse_str(source)
}
