//! Parser Tests - Identifier lists

use rstest::rstest;
use sqlfold::base::Position;
use sqlfold::syntax::{Node, NodeKind, TokenList};

use crate::helpers::tree_assertions::*;

#[rstest]
#[case("foo, bar", &["foo", "bar"])]
#[case("foo , bar", &["foo", "bar"])]
#[case("foo, bar, baz", &["foo", "bar", "baz"])]
#[case("1, 'two', null", &["1", "'two'", "null"])]
#[case("foo.a, count(*), c.*", &["foo.a", "count(*)", "c.*"])]
#[case("a + 1, b = 2", &["a + 1", "b = 2"])]
fn test_identifier_list(#[case] input: &str, #[case] elements: &[&str]) {
    let statement = parse_single(input, 1);
    let list = as_identifier_list(&statement.children()[0], input);
    let texts: Vec<_> = list.elements().map(Node::text).collect();
    assert_eq!(texts, elements);
}

#[rstest]
#[case("foo,", 1)]
#[case("foo, ", 1)]
#[case("foo, bar,", 2)]
fn test_dangling_comma(#[case] input: &str, #[case] elements: usize) {
    let statement = parse_single(input, 1);
    let list = as_identifier_list(&statement.children()[0], input);
    assert_eq!(list.elements().count(), elements);
}

#[test]
fn test_select_list() {
    let statement = parse_single("select foo, bar from abc", 7);
    let list = statement.children();
    assert_item(&list[0], "select");
    as_identifier_list(&list[2], "foo, bar");
    assert_item(&list[4], "from");
    assert_identifier(&list[6], "abc");
}

#[test]
fn test_empty_slot_keeps_trailing_space() {
    let statement = parse_single("select foo,  from abc", 6);
    let list = statement.children();
    assert_item(&list[0], "select");
    assert_item(&list[1], " ");
    let identifiers = as_identifier_list(&list[2], "foo,  ");
    assert_eq!(identifiers.index_at(Position::new(0, 12)), Some(1));
    assert_item(&list[3], "from");
    assert_item(&list[4], " ");
    assert_identifier(&list[5], "abc");
}

#[test]
fn test_keywords_end_the_list() {
    let statement = parse_single("foo, from", 2);
    as_identifier_list(&statement.children()[0], "foo, ");
    assert_item(&statement.children()[1], "from");
}

#[test]
fn test_list_inside_group() {
    let statement = parse_single("insert into t (a, b) values (1, 2)", 9);
    let list = statement.children();
    assert_node(&list[0], NodeKind::MultiKeyword, "insert into");
    let columns = as_parenthesis(&list[4], "(a, b)");
    as_identifier_list(&columns.inner()[0], "a, b");
    let values = as_parenthesis(&list[8], "(1, 2)");
    as_identifier_list(&values.inner()[0], "1, 2");
}

#[rstest]
#[case(0, None)]
#[case(1, Some(0))]
#[case(2, Some(0))]
#[case(3, Some(0))]
#[case(4, Some(0))]
#[case(5, Some(1))]
#[case(6, Some(1))]
#[case(9, Some(1))]
#[case(10, Some(2))]
#[case(11, Some(2))]
#[case(17, Some(2))]
#[case(18, None)]
fn test_index_at(#[case] column: usize, #[case] expected: Option<usize>) {
    let statement = parse_single("(foo, bar, foobar)", 1);
    let parenthesis = as_parenthesis(&statement.children()[0], "(foo, bar, foobar)");
    let list = as_identifier_list(&parenthesis.inner()[0], "foo, bar, foobar");
    assert_eq!(list.index_at(Position::new(0, column)), expected);
}

#[test]
fn test_index_at_other_line() {
    let statement = parse_single("foo,\nbar", 1);
    let list = as_identifier_list(&statement.children()[0], "foo,\nbar");
    assert_eq!(list.index_at(Position::new(1, 0)), Some(1));
    assert_eq!(list.index_at(Position::new(2, 0)), None);
}
