//! Parser Tests - Identifiers, members and functions

use rstest::rstest;
use sqlfold::syntax::{Node, NodeKind, SyntaxKind, TokenList};

use crate::helpers::tree_assertions::*;

// ============================================================================
// Identifiers
// ============================================================================

#[rstest]
#[case("abc")]
#[case("\"abc\"")]
#[case("`abc`")]
#[case("`abc")]
#[case("*")]
fn test_identifier(#[case] input: &str) {
    let statement = parse_single(input, 1);
    assert_identifier(&statement.children()[0], input);
}

#[test]
fn test_select_identifier() {
    let statement = parse_single("select abc", 3);
    let list = statement.children();
    assert_item(&list[0], "select");
    assert_item(&list[1], " ");
    assert_identifier(&list[2], "abc");
}

#[test]
fn test_from_identifier() {
    let statement = parse_single("select abc from def", 7);
    let list = statement.children();
    assert_item(&list[0], "select");
    assert_identifier(&list[2], "abc");
    assert_item(&list[4], "from");
    assert_identifier(&list[6], "def");
}

#[test]
fn test_keywords_ignore_case() {
    let statement = parse_single("SeLeCt abc FROM def", 7);
    assert_item(&statement.children()[0], "SeLeCt");
    assert_item(&statement.children()[4], "FROM");
}

// ============================================================================
// Member identifiers
// ============================================================================

#[rstest]
#[case("a.b", "a", "b")]
#[case("\"abc\".\"def\"", "\"abc\"", "\"def\"")]
#[case("`abc`.`def`", "`abc`", "`def`")]
#[case("a.", "a", "")]
#[case("a.*", "a", "*")]
fn test_member_identifier(#[case] input: &str, #[case] parent: &str, #[case] child: &str) {
    let statement = parse_single(input, 1);
    assert_member(&statement.children()[0], input, parent, child);
}

#[test]
fn test_member_identifier_select() {
    let statement = parse_single("select foo.bar from abc", 7);
    let list = statement.children();
    assert_item(&list[0], "select");
    assert_member(&list[2], "foo.bar", "foo", "bar");
    assert_item(&list[4], "from");
    assert_identifier(&list[6], "abc");
}

#[test]
fn test_incomplete_member_identifier_select() {
    let statement = parse_single("SELECT foo. FROM foo", 7);
    let list = statement.children();
    assert_item(&list[0], "SELECT");
    assert_item(&list[1], " ");
    assert_member(&list[2], "foo.", "foo", "");
    assert_item(&list[3], " ");
    assert_item(&list[4], "FROM");
    assert_item(&list[5], " ");
    assert_identifier(&list[6], "foo");
}

#[test]
fn test_member_identifier_from() {
    let statement = parse_single("select foo from myschema.abc", 7);
    let list = statement.children();
    assert_identifier(&list[2], "foo");
    assert_member(&list[6], "myschema.abc", "myschema", "abc");
}

#[test]
fn test_member_identifiers_in_list() {
    let statement = parse_single("a.*, b.id", 1);
    as_identifier_list(&statement.children()[0], "a.*, b.id");
    let list = children(&statement.children()[0], 4);
    assert_member(&list[0], "a.*", "a", "*");
    assert_item(&list[1], ",");
    assert_item(&list[2], " ");
    assert_member(&list[3], "b.id", "b", "id");
}

#[test]
fn test_member_chain_is_left_deep() {
    let statement = parse_single("db.schema.table_name", 1);
    let member = as_member(&statement.children()[0], "db.schema.table_name");
    assert_eq!(member.child_text(), "table_name");
    assert_member(member.parent(), "db.schema", "db", "schema");
}

#[test]
fn test_member_child_may_be_a_keyword() {
    let statement = parse_single("t.order", 1);
    let member = as_member(&statement.children()[0], "t.order");
    assert!(matches!(member.child(), Some(Node::Identifier(_))));
}

#[test]
fn test_spaced_dot_is_not_a_member() {
    let statement = parse_single("a . b", 5);
    assert_identifier(&statement.children()[0], "a");
    assert_item(&statement.children()[2], ".");
}

// ============================================================================
// Functions
// ============================================================================

#[rstest]
#[case("foo()", "foo", 0)]
#[case("foo(a)", "foo", 1)]
#[case("foo(a, b, c)", "foo", 1)]
#[case("count(*)", "count", 1)]
fn test_function(#[case] input: &str, #[case] name: &str, #[case] arguments: usize) {
    let statement = parse_single(input, 1);
    assert_node(&statement.children()[0], NodeKind::FunctionLiteral, input);
    let Node::FunctionLiteral(function) = &statement.children()[0] else {
        unreachable!()
    };
    assert_identifier(function.name(), name);
    assert_eq!(function.arguments().len(), arguments);
}

#[test]
fn test_qualified_function() {
    let statement = parse_single("pg_catalog.now()", 1);
    let Node::FunctionLiteral(function) = &statement.children()[0] else {
        panic!("expected a function, got {:?}", statement.children()[0].kind());
    };
    assert_member(function.name(), "pg_catalog.now", "pg_catalog", "now");
    assert!(function.parenthesis().is_some_and(|p| p.is_closed()));
}

#[test]
fn test_space_before_paren_is_not_a_function() {
    let statement = parse_single("foo (a)", 3);
    assert_identifier(&statement.children()[0], "foo");
    assert_eq!(statement.children()[2].kind(), NodeKind::Parenthesis);
}

#[test]
fn test_function_names_are_not_keywords() {
    let statement = parse_single("DATE(x)", 1);
    assert_eq!(statement.children()[0].kind(), NodeKind::FunctionLiteral);
    let name = match &statement.children()[0] {
        Node::FunctionLiteral(function) => function.name().token_kind(),
        _ => None,
    };
    assert_eq!(name, Some(SyntaxKind::WORD));
}

#[test]
fn test_long_member_chain_is_split_into_bounded_runs() {
    let input = format!("a{}", ".b".repeat(10_000));
    let statements = parse_statements(&input);
    let members: Vec<_> = statements[0]
        .children()
        .iter()
        .filter(|node| node.kind() == NodeKind::MemberIdentifier)
        .collect();
    assert!(members.len() > 1);

    let mut node = members[0];
    let mut depth = 0;
    while let Node::MemberIdentifier(member) = node {
        node = member.parent();
        depth += 1;
    }
    assert!(depth < 100);
    assert_identifier(node, "a");
}
