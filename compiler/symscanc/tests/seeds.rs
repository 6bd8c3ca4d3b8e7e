//! End-to-end scans through the library pipeline: source bytes in,
//! rendered symbol table out.

use pretty_assertions::assert_eq;
use symscanc::commands::scan_source;
use symscanc::reporting::render_symbol_table;
use symscanc::Dialect;

const RULE: &str = "---------------------------------------------------";

fn scan(dialect: Dialect, source: &str) -> String {
    render_symbol_table(dialect, &scan_source(dialect, source.as_bytes()))
}

/// Expected table text for `rows` of `(key, name, type)`.
fn table(dialect: Dialect, key: &str, rows: &[(u32, &str, &str)]) -> String {
    let mut out = format!(
        "{} Symbol Table:\n{RULE}\n{key}\tName\t\tType\t\tSize\n{RULE}\n",
        dialect.name()
    );
    for (k, name, ty) in rows {
        out.push_str(&format!("{k}\t{name:<12}\t{ty:<12}\t\n"));
    }
    out
}

#[test]
fn c_variable_then_function() {
    assert_eq!(
        scan(Dialect::C, "int x; void f() { }"),
        table(Dialect::C, "Index", &[(0, "x", "int"), (1, "f", "function")])
    );
}

#[test]
fn c_function_with_typed_parameters() {
    assert_eq!(
        scan(
            Dialect::C,
            "int add(int a, int b) { return a+b; } int z = 1;"
        ),
        table(
            Dialect::C,
            "Index",
            &[
                (0, "add", "function"),
                (1, "a", "int"),
                (2, "b", "int"),
                (3, "z", "int"),
            ]
        )
    );
}

#[test]
fn javascript_declarators_with_duplicate() {
    assert_eq!(
        scan(
            Dialect::JavaScript,
            "var a = 1; let b; const c = 2; function g(){} function g(){}"
        ),
        table(
            Dialect::JavaScript,
            "Hash",
            &[
                (97, "a", "var"),
                (98, "b", "let"),
                (99, "c", "const"),
                (3, "g", "function"),
            ]
        )
    );
}

#[test]
fn ruby_greedy_identifiers() {
    assert_eq!(
        scan(Dialect::Ruby, "def greet; puts x; end"),
        table(
            Dialect::Ruby,
            "Hash",
            &[
                (45, "greet", "function"),
                (40, "puts", "variable"),
                (20, "x", "variable"),
                (71, "end", "variable"),
            ]
        )
    );
}

#[test]
fn perl_sub_and_sigils() {
    assert_eq!(
        scan(Dialect::Perl, "sub hi { my $n = 1; } @arr = ();"),
        table(
            Dialect::Perl,
            "Hash",
            &[
                (29, "hi", "function"),
                (26, "$n", "variable"),
                (89, "@arr", "variable"),
            ]
        )
    );
}

#[test]
fn csharp_keyword_types() {
    assert_eq!(
        scan(Dialect::CSharp, "string name; bool ok; void Go() { }"),
        table(
            Dialect::CSharp,
            "Hash",
            &[(7, "name", "string"), (48, "ok", "bool"), (12, "Go", "function")]
        )
    );
}

#[test]
fn empty_input_prints_header_only() {
    assert_eq!(scan(Dialect::Java, ""), table(Dialect::Java, "Hash", &[]));
}

#[test]
fn comment_only_input_has_no_entries() {
    assert_eq!(
        scan(Dialect::Perl, "# sub nothing { }\n"),
        table(Dialect::Perl, "Hash", &[])
    );
}

#[test]
fn hundred_and_one_declarations_keep_first_hundred() {
    let source: String = (0..=100).map(|i| format!("int v{i};\n")).collect();
    let output = scan(Dialect::C, &source);
    let rows: Vec<_> = output.lines().skip(4).collect();
    assert_eq!(rows.len(), 100);
    assert_eq!(rows[0], "0\tv0          \tint         \t");
    assert_eq!(rows[99], "99\tv99         \tint         \t");
}

#[test]
fn blank_lines_and_trailing_whitespace_do_not_change_output() {
    for dialect in Dialect::ALL {
        let source = "int x; var y; sub z {} def w; $v = 1;";
        let padded = format!("{source}\n\n   \t\n");
        assert_eq!(scan(dialect, source), scan(dialect, &padded), "{dialect}");
    }
}
