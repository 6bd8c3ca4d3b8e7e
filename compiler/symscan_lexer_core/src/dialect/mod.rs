//! Per-language lexical profiles.
//!
//! A [`Dialect`] names one of the six host languages; its [`LexProfile`] is
//! the static configuration the tokenizer consults: comment markers, extra
//! identifier bytes, sigils, and the keyword table.
//!
//! # Keyword Tables
//!
//! Each table is sorted and duplicate-free so membership is a binary
//! search. The tests in this module enforce the ordering; keep it when
//! editing a table.

use std::fmt;

/// One of the languages the scanner understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    C,
    CSharp,
    Java,
    JavaScript,
    Perl,
    Ruby,
}

impl Dialect {
    /// Every dialect, in reporting order.
    pub const ALL: [Dialect; 6] = [
        Dialect::C,
        Dialect::CSharp,
        Dialect::Java,
        Dialect::JavaScript,
        Dialect::Perl,
        Dialect::Ruby,
    ];

    /// Display name, as printed in the symbol table header.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::C => "C",
            Dialect::CSharp => "C#",
            Dialect::Java => "Java",
            Dialect::JavaScript => "JavaScript",
            Dialect::Perl => "Perl",
            Dialect::Ruby => "Ruby",
        }
    }

    /// The fixed input filename the per-dialect scanner reads.
    pub fn source_file(self) -> &'static str {
        match self {
            Dialect::C => "source.c",
            Dialect::CSharp => "source.cs",
            Dialect::Java => "source.java",
            Dialect::JavaScript => "script.js",
            Dialect::Perl => "perl.pl",
            Dialect::Ruby => "source.rb",
        }
    }

    /// Look up a dialect by display name or common alias, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "c" => Some(Dialect::C),
            "c#" | "cs" | "csharp" => Some(Dialect::CSharp),
            "java" => Some(Dialect::Java),
            "js" | "javascript" => Some(Dialect::JavaScript),
            "pl" | "perl" => Some(Dialect::Perl),
            "rb" | "ruby" => Some(Dialect::Ruby),
            _ => None,
        }
    }

    /// The lexical profile for this dialect.
    pub fn profile(self) -> &'static LexProfile {
        match self {
            Dialect::C => &C,
            Dialect::CSharp => &CSHARP,
            Dialect::Java => &JAVA,
            Dialect::JavaScript => &JAVASCRIPT,
            Dialect::Perl => &PERL,
            Dialect::Ruby => &RUBY,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static lexical configuration for one dialect.
#[derive(Debug)]
pub struct LexProfile {
    /// Line-comment marker: one byte (`#`) or two (`//`).
    pub line_comment: Option<&'static [u8]>,
    /// Block-comment open/close pair, both two bytes.
    pub block_comment: Option<(&'static [u8], &'static [u8])>,
    /// Bytes allowed in identifiers beyond ASCII letters, digits and `_`.
    pub ident_extra: &'static [u8],
    /// Identifier-start bytes that mark the token as a variable.
    pub sigils: &'static [u8],
    /// Sorted keyword table.
    pub keywords: &'static [&'static str],
}

impl LexProfile {
    /// Can `byte` start an identifier?
    #[inline]
    pub fn is_ident_start(&self, byte: u8) -> bool {
        byte.is_ascii_alphabetic() || byte == b'_' || self.ident_extra.contains(&byte)
    }

    /// Can `byte` continue an identifier?
    #[inline]
    pub fn is_ident_continue(&self, byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || byte == b'_' || self.ident_extra.contains(&byte)
    }

    #[inline]
    pub fn is_sigil(&self, byte: u8) -> bool {
        self.sigils.contains(&byte)
    }

    /// Is `text` a reserved word in this dialect?
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.binary_search(&text).is_ok()
    }
}

static C: LexProfile = LexProfile {
    line_comment: Some(b"//"),
    block_comment: Some((b"/*", b"*/")),
    ident_extra: b"",
    sigils: b"",
    keywords: &[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while",
    ],
};

static CSHARP: LexProfile = LexProfile {
    line_comment: Some(b"//"),
    block_comment: None,
    ident_extra: b"",
    sigils: b"",
    keywords: &[
        "abstract",
        "as",
        "base",
        "bool",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "checked",
        "class",
        "const",
        "continue",
        "decimal",
        "default",
        "delegate",
        "do",
        "double",
        "else",
        "enum",
        "event",
        "explicit",
        "extern",
        "false",
        "finally",
        "fixed",
        "float",
        "for",
        "foreach",
        "goto",
        "if",
        "implicit",
        "in",
        "int",
        "interface",
        "internal",
        "is",
        "lock",
        "long",
        "namespace",
        "new",
        "null",
        "object",
        "operator",
        "out",
        "override",
        "params",
        "private",
        "protected",
        "public",
        "readonly",
        "ref",
        "return",
        "sbyte",
        "sealed",
        "short",
        "sizeof",
        "stackalloc",
        "static",
        "string",
        "struct",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "uint",
        "ulong",
        "unchecked",
        "unsafe",
        "ushort",
        "using",
        "virtual",
        "void",
        "volatile",
        "while",
    ],
};

static JAVA: LexProfile = LexProfile {
    line_comment: Some(b"//"),
    block_comment: None,
    ident_extra: b"",
    sigils: b"",
    keywords: &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
    ],
};

static JAVASCRIPT: LexProfile = LexProfile {
    line_comment: Some(b"//"),
    block_comment: None,
    ident_extra: b"$",
    sigils: b"",
    keywords: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "export",
        "extends",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
    ],
};

static PERL: LexProfile = LexProfile {
    line_comment: Some(b"#"),
    block_comment: None,
    ident_extra: b"$@%",
    sigils: b"$@%",
    keywords: &["sub"],
};

static RUBY: LexProfile = LexProfile {
    line_comment: Some(b"#"),
    block_comment: None,
    ident_extra: b"@$",
    sigils: b"@$",
    keywords: &["def"],
};
