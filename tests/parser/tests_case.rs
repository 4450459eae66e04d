//! Parser Tests - CASE blocks

use sqlfold::syntax::{Node, NodeKind, TokenList};

use crate::helpers::tree_assertions::*;

fn switch_case(node: &Node) -> &sqlfold::syntax::SwitchCase {
    let Node::SwitchCase(case) = node else {
        panic!("expected a switch case, got {:?}", node.kind());
    };
    case
}

#[test]
fn test_closed_case() {
    let input = "case when a = 1 then 'x' else 'y' end";
    let statement = parse_single(input, 1);
    assert_node(&statement.children()[0], NodeKind::SwitchCase, input);
    assert!(switch_case(&statement.children()[0]).is_closed());
}

#[test]
fn test_case_in_select() {
    let statement = parse_single("select case when a then b end from t", 7);
    let list = statement.children();
    assert_item(&list[0], "select");
    assert_node(&list[2], NodeKind::SwitchCase, "case when a then b end");
    assert_item(&list[4], "from");
}

#[test]
fn test_case_with_alias() {
    let statement = parse_single("select case when a then b end as c", 3);
    let aliased = assert_aliased(
        &statement.children()[2],
        "case when a then b end as c",
        "case when a then b end",
        "c",
    );
    assert!(aliased.has_as_keyword());
}

#[test]
fn test_case_with_bare_alias() {
    let statement = parse_single("select CASE WHEN a THEN b END c", 3);
    let aliased = assert_aliased(
        &statement.children()[2],
        "CASE WHEN a THEN b END c",
        "CASE WHEN a THEN b END",
        "c",
    );
    assert!(!aliased.has_as_keyword());
}

#[test]
fn test_case_in_list() {
    let statement = parse_single("select a, case when b then c end, d", 3);
    let list = as_identifier_list(&statement.children()[2], "a, case when b then c end, d");
    let kinds: Vec<_> = list.elements().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::Identifier, NodeKind::SwitchCase, NodeKind::Identifier]
    );
}

#[test]
fn test_unterminated_case_runs_to_end() {
    let statement = parse_single("select case when a then", 3);
    let node = &statement.children()[2];
    assert_node(node, NodeKind::SwitchCase, "case when a then");
    assert!(!switch_case(node).is_closed());
}

#[test]
fn test_nested_case_needs_both_ends() {
    let input = "case when a then case when b then 1 end else 2 end";
    let statement = parse_single(input, 1);
    let case = switch_case(&statement.children()[0]);
    assert!(case.is_closed());
    assert_eq!(case.text(), input);
}

#[test]
fn test_case_contents_are_opaque() {
    let statement = parse_single("case when a = 1 then x end", 1);
    let children = statement.children()[0].children().unwrap_or_default();
    assert!(children.iter().all(|node| node.token().is_some()));
}
