//! Parser Tests - Multi-word keywords

use rstest::rstest;
use sqlfold::base::Span;
use sqlfold::syntax::{Node, NodeKind, TokenList};

use crate::helpers::tree_assertions::*;

#[rstest]
#[case("order by", 2)]
#[case("ORDER BY", 2)]
#[case("group by", 2)]
#[case("insert into", 2)]
#[case("delete from", 2)]
#[case("inner join", 2)]
#[case("primary key", 2)]
#[case("is not", 2)]
#[case("left outer join", 3)]
fn test_multi_keyword(#[case] input: &str, #[case] keywords: usize) {
    let statement = parse_single(input, 1);
    assert_node(&statement.children()[0], NodeKind::MultiKeyword, input);
    let Node::MultiKeyword(multi) = &statement.children()[0] else {
        unreachable!()
    };
    assert_eq!(multi.keywords().count(), keywords);
    assert!(multi.children().iter().all(|node| node.kind() == NodeKind::Item));
}

#[test]
fn test_multi_keyword_span() {
    let statement = parse_single("order by", 1);
    assert_eq!(statement.children()[0].span(), Span::from_coords(0, 0, 0, 8));
}

#[rstest]
#[case("order  by")]
#[case("order\tby")]
fn test_words_must_be_single_spaced(#[case] input: &str) {
    let statement = parse_single(input, 3);
    assert_item(&statement.children()[0], "order");
    assert_item(&statement.children()[2], "by");
}

#[test]
fn test_longest_match_wins() {
    let statement = parse_single("select * from a left outer join b", 11);
    assert_node(&statement.children()[8], NodeKind::MultiKeyword, "left outer join");
}

#[test]
fn test_group_by_after_lists() {
    let statement = parse_single("select a, b, c from abc group by d, e, f", 11);
    let list = statement.children();
    as_identifier_list(&list[2], "a, b, c");
    assert_identifier(&list[6], "abc");
    assert_node(&list[8], NodeKind::MultiKeyword, "group by");
    as_identifier_list(&list[10], "d, e, f");
}

#[test]
fn test_partial_multi_keyword_stays_split() {
    let statement = parse_single("left outer", 3);
    assert_item(&statement.children()[0], "left");
    assert_item(&statement.children()[2], "outer");
}
