//! Token-stream pattern matcher that publishes declaration events.
//!
//! The recognizer pulls tokens one at a time and checks each against the
//! dialect's [`DeclRule`]s. It keeps no state between tokens: a rule that
//! fires owns the trigger token, at most one lookahead token, and for
//! [`DeclRule::ReturnType`] one peeked byte.

use symscan_lexer_core::{Dialect, Token, TokenKind, Tokenizer};
use tracing::{debug, trace};

use crate::registry::{InsertOutcome, SymbolRegistry};
use crate::rules::{rules_for, DeclRule, FUNCTION};

/// A `(name, declared type)` pair proposed for the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclEvent {
    pub name: String,
    pub declared_type: String,
}

pub struct Recognizer<'a> {
    tokens: Tokenizer<'a>,
    rules: &'static [DeclRule],
}

impl<'a> Recognizer<'a> {
    pub fn new(source: &'a [u8], dialect: Dialect) -> Self {
        Self {
            tokens: Tokenizer::new(source, dialect),
            rules: rules_for(dialect),
        }
    }

    /// Consume tokens to end of input, inserting every event into
    /// `registry`.
    pub fn run(self, registry: &mut SymbolRegistry) {
        self.for_each_event(|event| publish(registry, &event));
    }

    /// Consume tokens to end of input and return the raw event stream,
    /// duplicates included.
    pub fn events(self) -> Vec<DeclEvent> {
        let mut events = Vec::new();
        self.for_each_event(|event| events.push(event));
        events
    }

    fn for_each_event(mut self, mut sink: impl FnMut(DeclEvent)) {
        loop {
            let token = self.tokens.next_token();
            if token.is_eof() {
                break;
            }
            for rule in self.rules {
                if rule.triggers(&token) {
                    if let Some(event) = self.apply(rule, &token) {
                        sink(event);
                    }
                }
            }
        }
    }

    fn apply(&mut self, rule: &DeclRule, trigger: &Token) -> Option<DeclEvent> {
        match *rule {
            DeclRule::Declarator { declared, .. } => {
                let name = self.next_identifier()?;
                Some(DeclEvent {
                    name: name.lexeme,
                    declared_type: declared.tag(trigger),
                })
            }
            DeclRule::ReturnType { .. } => {
                let name = self.next_identifier()?;
                let declared_type = if self.tokens.peek_non_space() == Some(b'(') {
                    FUNCTION.to_owned()
                } else {
                    trigger.lexeme.clone()
                };
                Some(DeclEvent {
                    name: name.lexeme,
                    declared_type,
                })
            }
            DeclRule::EveryToken { declared, .. } => Some(DeclEvent {
                name: trigger.lexeme.clone(),
                declared_type: declared.tag(trigger),
            }),
        }
    }

    /// Read one lookahead token; keep it only if it is an identifier.
    fn next_identifier(&mut self) -> Option<Token> {
        let token = self.tokens.next_token();
        (token.kind == TokenKind::Identifier).then_some(token)
    }
}

fn publish(registry: &mut SymbolRegistry, event: &DeclEvent) {
    match registry.insert(&event.name, &event.declared_type) {
        InsertOutcome::Inserted => trace!(
            name = %event.name,
            declared_type = %event.declared_type,
            "declaration recorded"
        ),
        InsertOutcome::Duplicate => trace!(name = %event.name, "duplicate declaration dropped"),
        InsertOutcome::Full => trace!(name = %event.name, "symbol table full, declaration dropped"),
    }
}

/// Scan `source` as `dialect` and return the populated registry.
pub fn recognize(source: &[u8], dialect: Dialect) -> SymbolRegistry {
    debug!(%dialect, bytes = source.len(), "recognizing declarations");
    let mut registry = SymbolRegistry::new();
    Recognizer::new(source, dialect).run(&mut registry);
    debug!(%dialect, entries = registry.len(), "recognition complete");
    registry
}
