// tests/codegen_tests.rs

use parlance::codegen::{GeneratorConfig, SkipReason, Transpiler, PROGRAM_HEADER};
use parlance::syntax::parse;
use parlance::{AstNode, Fragment, Tag};
use proptest::prelude::*;

fn lower(statement: &str) -> String {
    let node = parse(statement).unwrap();
    Transpiler::new().transpile(&node).into_text()
}

fn bare_program(statements: &[AstNode]) -> String {
    let mut transpiler = Transpiler::with_config(GeneratorConfig {
        emit_header: false,
        ..GeneratorConfig::default()
    });
    transpiler.transpile_program(statements).code
}

// ---
// Single statements
// ---

#[test]
fn test_documented_statement_lowering() {
    assert_eq!(lower("let x be 5."), "x = 5");
    assert_eq!(lower(r#"print "Hello"."#), r#"print("Hello")"#);
    assert_eq!(lower("define y as 10."), "y = 10");
}

#[test]
fn test_set_is_an_alias_of_define() {
    assert_eq!(lower("set total to 7."), lower("define total as 7."));
}

#[test]
fn test_print_without_argument() {
    assert_eq!(lower("print."), "print()");
}

#[test]
fn test_if_inlines_single_statement_body() {
    assert_eq!(lower(r#"if ready, print "go"."#), "if ready:\n    print(\"go\")");
}

#[test]
fn test_string_backslash_is_escaped() {
    assert_eq!(lower(r#"print "a\"."#), r#"print("a\\")"#);
    assert_eq!(lower(r#"print "C:\tmp"."#), r#"print("C:\\tmp")"#);
}

#[test]
fn test_loops_emit_headers_only() {
    assert_eq!(lower("for each item in items."), "for item in items:");
    assert_eq!(lower("while running."), "while running:");
}

#[test]
fn test_return_forms() {
    assert_eq!(lower("return."), "return");
    assert_eq!(lower("return answer."), "return answer");
}

#[test]
fn test_binary_forms_default_to_addition() {
    // Operators are dropped by the grammar; every binary form lowers to `+`.
    assert_eq!(lower("let x be a + b."), "x = a + b");
    assert_eq!(lower("let x be a * b."), "x = a + b");
    assert_eq!(lower("let x be 1 + 2 + 3."), "x = 1 + 2 + 3");
}

#[test]
fn test_import_records_module() {
    let node = parse("import math.").unwrap();
    let mut transpiler = Transpiler::new();
    assert_eq!(transpiler.transpile(&node).text(), "import math");
    assert_eq!(transpiler.context().imports().collect::<Vec<_>>(), vec!["math"]);
}

// ---
// Arity boundary: every recognized tag degrades instead of failing
// ---

#[test]
fn test_underfilled_nodes_render_empty_for_every_statement_tag() {
    let underfilled = [
        (Tag::Let, 1),
        (Tag::Define, 1),
        (Tag::Set, 0),
        (Tag::If, 1),
        (Tag::For, 1),
        (Tag::While, 0),
        (Tag::Import, 0),
    ];
    for (tag, count) in underfilled {
        let children = vec![AstNode::identifier("x"); count];
        let node = AstNode::composite(tag.clone(), children);
        let fragment = Transpiler::new().transpile(&node);
        assert_eq!(fragment.text(), "", "{} with {} children", tag, count);
        assert!(
            matches!(fragment.skip_reason(), Some(SkipReason::Arity { found, .. }) if *found == count),
            "{} should report an arity problem",
            tag
        );
    }
}

#[test]
fn test_print_and_return_accept_zero_children() {
    for tag in [Tag::Print, Tag::Return] {
        let fragment = Transpiler::new().transpile(&AstNode::composite(tag.clone(), vec![]));
        assert!(!fragment.is_skipped(), "{} with no children", tag);
    }
}

#[test]
fn test_assignment_target_must_be_identifier() {
    let node = AstNode::composite(Tag::Let, vec![AstNode::number(1.0), AstNode::number(2.0)]);
    let mut transpiler = Transpiler::new();
    assert_eq!(
        transpiler.transpile(&node),
        Fragment::Skipped(SkipReason::ExpectedIdentifier {
            tag: "let".into(),
            found: "number".into(),
        })
    );
    assert_eq!(transpiler.context().declared().count(), 0);
}

#[test]
fn test_empty_generic_node_is_skipped() {
    let node = AstNode::composite(Tag::Rule("value".into()), vec![]);
    assert_eq!(
        Transpiler::new().transpile(&node).skip_reason(),
        Some(&SkipReason::Empty { tag: "value".into() })
    );
}

#[test]
fn test_malformed_child_skips_whole_statement() {
    let empty = AstNode::composite(Tag::Rule("value".into()), vec![]);
    let node = AstNode::composite(Tag::Print, vec![empty]);
    assert!(Transpiler::new().transpile(&node).is_skipped());
}

// ---
// Guarded statements
// ---

fn guarded(body: AstNode) -> AstNode {
    AstNode::composite(Tag::If, vec![AstNode::identifier("ready"), body])
}

#[test]
fn test_guarded_import_is_skipped_and_not_recorded() {
    let mut transpiler = Transpiler::new();
    let node = guarded(AstNode::composite(Tag::Import, vec![AstNode::identifier("os")]));
    assert_eq!(
        transpiler.transpile(&node),
        Fragment::Skipped(SkipReason::UnsupportedBody {
            tag: "if".into(),
            body: "import".into(),
        })
    );
    assert!(!transpiler.context().has_imports());
}

#[test]
fn test_guarded_import_does_not_duplicate_top_level_import() {
    let statements = vec![
        parse("import os.").unwrap(),
        guarded(AstNode::composite(Tag::Import, vec![AstNode::identifier("os")])),
    ];
    let code = bare_program(&statements);
    assert_eq!(code, "import os\n");
    assert_eq!(code.matches("import os").count(), 1);
}

#[test]
fn test_blocks_are_not_nested_under_if() {
    let nested_if = guarded(guarded(parse("print c.").unwrap()));
    let nested_for = guarded(parse("for x in y.").unwrap());
    let nested_while = guarded(parse("while running.").unwrap());
    for node in [nested_if, nested_for, nested_while] {
        let fragment = Transpiler::new().transpile(&node);
        assert!(
            matches!(fragment, Fragment::Skipped(SkipReason::UnsupportedBody { .. })),
            "{} should be skipped",
            node
        );
    }
}

// ---
// Programs
// ---

#[test]
fn test_program_starts_with_header() {
    let statements = vec![parse("let x be 1.").unwrap()];
    let output = Transpiler::new().transpile_program(&statements);
    let expected = format!("{}\nx = 1", PROGRAM_HEADER.join("\n"));
    assert_eq!(output.code, expected);
    assert!(output.skipped.is_empty());
}

#[test]
fn test_imports_are_sorted_and_deduplicated() {
    let statements: Vec<AstNode> = ["import sys.", "let a be 1.", "import math.", "import sys."]
        .iter()
        .map(|s| parse(s).unwrap())
        .collect();
    assert_eq!(bare_program(&statements), "import math\nimport sys\n\na = 1");
}

#[test]
fn test_program_without_imports_has_no_import_block() {
    let statements = vec![parse("print 1.").unwrap(), parse("print 2.").unwrap()];
    assert_eq!(bare_program(&statements), "print(1)\nprint(2)");
}

#[test]
fn test_skipped_statements_are_reported_by_index() {
    let statements = vec![
        parse("let a be 1.").unwrap(),
        AstNode::composite(Tag::While, vec![]),
        parse("print a.").unwrap(),
    ];
    let mut transpiler = Transpiler::with_config(GeneratorConfig {
        emit_header: false,
        ..GeneratorConfig::default()
    });
    let output = transpiler.transpile_program(&statements);
    assert_eq!(output.code, "a = 1\nprint(a)");
    assert_eq!(output.skipped.len(), 1);
    assert_eq!(output.skipped[0].index, 1);
}

#[test]
fn test_context_is_reset_between_programs() {
    let mut transpiler = Transpiler::new();
    transpiler.transpile_program(&[parse("import os.").unwrap(), parse("let a be 1.").unwrap()]);
    let second = transpiler.transpile_program(&[parse("print 1.").unwrap()]);
    assert!(!second.code.contains("import os"));
    assert!(!transpiler.context().is_declared("a"));
}

fn import_lines(code: &str) -> Vec<&str> {
    code.lines().filter(|line| line.trim_start().starts_with("import ")).collect()
}

proptest! {
    #[test]
    fn import_block_is_sorted_and_unique(
        statements in prop::collection::vec(
            (0usize..3, prop::sample::select(vec!["os", "sys", "math", "json"])),
            0..12,
        )
    ) {
        let nodes: Vec<AstNode> = statements
            .iter()
            .map(|(form, module)| {
                let import = AstNode::composite(Tag::Import, vec![AstNode::identifier(*module)]);
                match form {
                    0 => import,
                    1 => guarded(import),
                    _ => AstNode::composite(Tag::Print, vec![AstNode::identifier(*module)]),
                }
            })
            .collect();
        let code = bare_program(&nodes);
        let imports = import_lines(&code);
        prop_assert!(imports.iter().all(|line| !line.starts_with(' ')));
        prop_assert!(imports.windows(2).all(|pair| pair[0] < pair[1]));

        let mut expected: Vec<String> = statements
            .iter()
            .filter(|(form, _)| *form == 0)
            .map(|(_, module)| format!("import {}", module))
            .collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(imports, expected);
    }
}
