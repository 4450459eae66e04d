//! Parser Tests - Statement splitting
//!
//! Statements end at a top-level `;` (inclusive) or at end of input.

use rstest::rstest;
use sqlfold::base::{Position, Span};
use sqlfold::parse;
use sqlfold::syntax::TokenList;

use crate::helpers::tree_assertions::*;

#[rstest]
#[case("select 1;", 4, Span::from_coords(0, 0, 0, 9))]
#[case("select 1", 3, Span::from_coords(0, 0, 0, 8))]
fn test_single_statement(#[case] input: &str, #[case] len: usize, #[case] span: Span) {
    let statement = parse_single(input, len);
    assert_eq!(statement.span(), span);
    assert_eq!(statement.is_terminated(), input.ends_with(';'));
}

#[test]
fn test_three_statements() {
    let statements = parse_statements("select 1;select 2;select 3;");
    assert_eq!(statements.len(), 3);
    for (index, statement) in statements.iter().enumerate() {
        let start = index * 9;
        assert_statement(statement, 4, &format!("select {};", index + 1));
        assert_eq!(statement.span(), Span::from_coords(0, start, 0, start + 9));
    }
}

#[test]
fn test_three_statements_without_final_semicolon() {
    let statements = parse_statements("select 1;select 2;select 3");
    assert_eq!(statements.len(), 3);
    assert_statement(&statements[2], 3, "select 3");
    assert_eq!(statements[2].span(), Span::from_coords(0, 18, 0, 26));
    assert!(!statements[2].is_terminated());
}

#[test]
fn test_empty_input_has_no_statements() {
    let document = parse("");
    assert!(document.is_empty());
    assert_eq!(document.statements().count(), 0);
}

#[test]
fn test_text_after_last_semicolon_is_a_statement() {
    let statements = parse_statements("select 1;\n");
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[1].text(), "\n");
}

#[test]
fn test_semicolon_inside_parenthesis_does_not_split() {
    let statements = parse_statements("select (1; 2); select 3");
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].text(), "select (1; 2);");
}

#[test]
fn test_multiline_statement_spans() {
    let statements = parse_statements("select 1;\nselect\n  2");
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[1].span().start, Position::new(0, 9));
    assert_eq!(statements[1].span().end, Position::new(2, 3));
}
