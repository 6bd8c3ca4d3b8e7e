//! Per-dialect declaration rules.
//!
//! Rules are data: each dialect owns a static slice of [`DeclRule`] values
//! and the recognizer evaluates all of them, in order, against every token.
//! A rule that fires may read one lookahead token of its own, so two rules
//! firing on the same trigger read two different tokens.

use symscan_lexer_core::{Dialect, Token, TokenKind};

/// Type tag recorded for function declarations.
pub const FUNCTION: &str = "function";

/// Type tag recorded for sigil and Ruby identifier declarations.
pub const VARIABLE: &str = "variable";

/// The type tag a fired rule records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Declared {
    /// The trigger's own lexeme (`int`, `let`, `String`).
    Trigger,
    Fixed(&'static str),
}

impl Declared {
    pub fn tag(self, trigger: &Token) -> String {
        match self {
            Declared::Trigger => trigger.lexeme.clone(),
            Declared::Fixed(tag) => tag.to_owned(),
        }
    }
}

/// One guarded declaration pattern.
#[derive(Clone, Copy, Debug)]
pub enum DeclRule {
    /// A keyword in `keywords` (or an identifier spelled as one of
    /// `lexemes`) followed by an identifier declares that identifier.
    Declarator {
        keywords: &'static [&'static str],
        lexemes: &'static [&'static str],
        declared: Declared,
    },
    /// A type keyword followed by an identifier declares a function when the
    /// next non-space byte is `(`, otherwise a value of that type.
    ReturnType { keywords: &'static [&'static str] },
    /// Every token of `kind` declares itself.
    EveryToken { kind: TokenKind, declared: Declared },
}

impl DeclRule {
    /// Does `token` start this pattern?
    pub fn triggers(&self, token: &Token) -> bool {
        match *self {
            DeclRule::Declarator {
                keywords, lexemes, ..
            } => {
                token.is_one_of(TokenKind::Keyword, keywords)
                    || token.is_one_of(TokenKind::Identifier, lexemes)
            }
            DeclRule::ReturnType { keywords } => token.is_one_of(TokenKind::Keyword, keywords),
            DeclRule::EveryToken { kind, .. } => token.kind == kind,
        }
    }
}

const C_RULES: &[DeclRule] = &[DeclRule::ReturnType {
    keywords: &["int", "float", "char", "double", "void"],
}];

/// Return types shared by the C# and Java function rule. `string` and
/// `bool` are not Java keywords, so they never fire there.
const MANAGED_RETURN_TYPES: &[&str] = &["void", "int", "string", "bool", "float", "double", "char"];

const CSHARP_RULES: &[DeclRule] = &[
    DeclRule::Declarator {
        keywords: &["int", "string", "bool", "float", "double", "char", "var"],
        lexemes: &[],
        declared: Declared::Trigger,
    },
    DeclRule::ReturnType {
        keywords: MANAGED_RETURN_TYPES,
    },
];

const JAVA_RULES: &[DeclRule] = &[
    DeclRule::Declarator {
        keywords: &[
            "int", "float", "double", "char", "boolean", "var", "let", "const",
        ],
        lexemes: &["String"],
        declared: Declared::Trigger,
    },
    DeclRule::ReturnType {
        keywords: MANAGED_RETURN_TYPES,
    },
];

const JAVASCRIPT_RULES: &[DeclRule] = &[
    DeclRule::Declarator {
        keywords: &["var", "let", "const"],
        lexemes: &[],
        declared: Declared::Trigger,
    },
    DeclRule::Declarator {
        keywords: &["function"],
        lexemes: &[],
        declared: Declared::Fixed(FUNCTION),
    },
];

const PERL_RULES: &[DeclRule] = &[
    DeclRule::Declarator {
        keywords: &["sub"],
        lexemes: &[],
        declared: Declared::Fixed(FUNCTION),
    },
    DeclRule::EveryToken {
        kind: TokenKind::Variable,
        declared: Declared::Fixed(VARIABLE),
    },
];

// Ruby records every identifier, call sites and library names included.
// Sigil names are recorded alongside plain identifiers.
const RUBY_RULES: &[DeclRule] = &[
    DeclRule::Declarator {
        keywords: &["def"],
        lexemes: &[],
        declared: Declared::Fixed(FUNCTION),
    },
    DeclRule::EveryToken {
        kind: TokenKind::Identifier,
        declared: Declared::Fixed(VARIABLE),
    },
    DeclRule::EveryToken {
        kind: TokenKind::Variable,
        declared: Declared::Fixed(VARIABLE),
    },
];

/// The rule set for `dialect`, in evaluation order.
pub fn rules_for(dialect: Dialect) -> &'static [DeclRule] {
    match dialect {
        Dialect::C => C_RULES,
        Dialect::CSharp => CSHARP_RULES,
        Dialect::Java => JAVA_RULES,
        Dialect::JavaScript => JAVASCRIPT_RULES,
        Dialect::Perl => PERL_RULES,
        Dialect::Ruby => RUBY_RULES,
    }
}
