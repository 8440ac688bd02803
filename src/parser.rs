//! Token stream to rules, or to a single query.
//!
//! Maintains a per-rule variable scope (display name -> `Variable`),
//! reset at the start of each rule; `_` bypasses the scope entirely since
//! every occurrence must allocate its own fresh variable.
// Adapted from brolog/parse.py's `Parser` class, which implements exactly
// the grammar this crate needs; suiron-rust's parse_terms.rs/parse_goals.rs
// informed the Rust recursive-descent structure and doc-comment style, but
// that code parses at a coarser, string-level granularity than this
// crate's token-driven grammar.

use std::collections::HashMap;

use crate::error::{Error, ParseError};
use crate::lexer::tokenize;
use crate::predicate::{Cut, Goal, Predicate};
use crate::rule::Rule;
use crate::term::{List, Term, Variable};
use crate::token::{Token, TokenType};

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    current_scope: HashMap<String, Variable>,
}

impl Parser {
    pub fn from_tokens(tokens: Vec<Token>) -> Parser {
        Parser { tokens, position: 0, current_scope: HashMap::new() }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn pop(&mut self) -> Result<Token, ParseError> {
        if self.position >= self.tokens.len() {
            return Err(ParseError::eof("Unexpected end of file"));
        }
        let token = self.tokens[self.position].clone();
        self.position += 1;
        Ok(token)
    }

    fn expect(&mut self, value: &str) -> Result<Token, ParseError> {
        let token = self.pop()?;
        if !token.is(value) {
            return Err(ParseError::unexpected(
                format!("Expected '{}', but got '{}'", value, token.value),
                token,
            ));
        }
        Ok(token)
    }

    fn at(&self, value: &str) -> bool {
        self.peek().map(|t| t.is(value)).unwrap_or(false)
    }

    /// Parses an entire program: a sequence of rules until the tokens run
    /// out. The variable scope is reset at the start of each rule.
    pub fn parse_program(&mut self) -> Result<Vec<Rule>, ParseError> {
        let mut rules = Vec::new();
        while self.peek().is_some() {
            self.current_scope = HashMap::new();
            rules.push(self.parse_rule()?);
        }
        Ok(rules)
    }

    /// Parses a single predicate — the REPL query entry point. Does not
    /// reset the scope first, since a query is its own standalone rule.
    pub fn parse_query(&mut self) -> Result<Predicate, ParseError> {
        self.current_scope = HashMap::new();
        self.parse_head()
    }

    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        let head = self.parse_head()?;
        let token = self.pop()?;
        match token.value.as_str() {
            "." => Ok(Rule::fact(head)),
            ":-" => {
                let body = self.parse_body()?;
                let closing = self.pop()?;
                if !closing.is(".") {
                    return Err(ParseError::unexpected(
                        format!("Expected '.' at the end of a rule, but got '{}'", closing.value),
                        closing,
                    ));
                }
                Ok(Rule::new(head, body))
            }
            _ => Err(ParseError::unexpected(
                format!("Unexpected token while parsing rule: {}", token.value),
                token,
            )),
        }
    }

    fn parse_head(&mut self) -> Result<Predicate, ParseError> {
        let token = self.peek().cloned();
        match self.parse_predicate()? {
            Goal::Call(p) => Ok(p),
            Goal::Cut(_) => Err(ParseError::unexpected(
                "Cut ('!') cannot be a rule head",
                token.expect("parse_predicate consumed a token"),
            )),
        }
    }

    fn parse_body(&mut self) -> Result<Vec<Goal>, ParseError> {
        let mut body = vec![self.parse_predicate()?];
        while self.at(",") {
            self.pop()?;
            body.push(self.parse_predicate()?);
        }
        Ok(body)
    }

    fn parse_predicate(&mut self) -> Result<Goal, ParseError> {
        let token = self.pop()?;
        if token.token_type != TokenType::Name {
            return Err(ParseError::unexpected(format!("Expected a name, but got '{}'", token.value), token));
        }
        if token.value == "!" {
            return Ok(Goal::Cut(Cut::fresh()));
        }

        self.expect("(")?;
        let args = self.parse_args()?;
        self.expect(")")?;
        Ok(Goal::Call(Predicate::new(token.value, args)))
    }

    fn parse_args(&mut self) -> Result<Vec<Term>, ParseError> {
        if self.at(")") {
            return Ok(Vec::new());
        }
        let mut args = vec![self.parse_term()?];
        while self.at(",") {
            self.pop()?;
            args.push(self.parse_term()?);
        }
        Ok(args)
    }

    fn parse_term(&mut self) -> Result<Term, ParseError> {
        let token = self.pop()?;
        match token.token_type {
            TokenType::Variable => {
                if token.value == "_" {
                    return Ok(Term::Variable(Variable::fresh("_")));
                }
                let var = self
                    .current_scope
                    .entry(token.value.clone())
                    .or_insert_with(|| Variable::fresh(token.value.clone()))
                    .clone();
                Ok(Term::Variable(var))
            }
            TokenType::Name => {
                if self.at("(") {
                    self.pop()?;
                    let args = self.parse_args()?;
                    self.expect(")")?;
                    Ok(Term::Function(crate::term::Function::new(token.value, args)))
                } else {
                    Ok(Term::Atom(token.value))
                }
            }
            TokenType::Special if token.value == "[" => self.parse_list(),
            _ => Err(ParseError::unexpected(
                format!("Unexpected token while parsing term: {}", token.value),
                token,
            )),
        }
    }

    fn parse_list(&mut self) -> Result<Term, ParseError> {
        if self.at("]") {
            self.pop()?;
            return Ok(Term::List(List::Empty));
        }

        let head = self.parse_term()?;

        if self.at("|") {
            let bar = self.pop()?;
            let tail = self.parse_term()?;
            if !matches!(tail, Term::List(_) | Term::Variable(_)) {
                return Err(ParseError::unexpected(
                    format!("Expected a list or variable after '|', but got: {}", tail),
                    bar,
                ));
            }
            self.expect("]")?;
            return Ok(Term::List(List::cons(head, tail)));
        }

        let mut items = vec![head];
        while self.at(",") {
            self.pop()?;
            items.push(self.parse_term()?);
        }
        self.expect("]")?;
        Ok(Term::List(List::from_sequence(items)))
    }
}

/// Tokenizes and parses `text` as a whole program: an ordered sequence of
/// rules until the source is exhausted.
pub fn parse_program(text: &str) -> Result<Vec<Rule>, Error> {
    let tokens = tokenize(text)?;
    Ok(Parser::from_tokens(tokens).parse_program()?)
}

/// Tokenizes and parses `text` as a single query predicate, for REPL use.
pub fn parse_query(text: &str) -> Result<Predicate, Error> {
    let tokens = tokenize(text)?;
    Ok(Parser::from_tokens(tokens).parse_query()?)
}
