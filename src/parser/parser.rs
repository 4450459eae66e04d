//! Tree builder entry point

use tracing::trace;

use super::grammar::parse_nodes;
use super::keywords::is_keyword;
use super::lexer::tokenize;
use crate::syntax::{Cursor, Document, Node, Statement, SyntaxKind, Token};

/// Parse SQL text into a lossless [`Document`]
///
/// Never fails: unbalanced parens, dangling operators, unterminated quotes
/// and any other half-typed input come back as tree shape.
///
/// ```
/// use sqlfold::syntax::TokenList;
///
/// let document = sqlfold::parse("select 1;select 2");
/// assert_eq!(document.len(), 2);
/// assert_eq!(document.text(), "select 1;select 2");
/// ```
pub fn parse(input: &str) -> Document {
    let tokens = tokenize(input);
    let ends = statement_ends(&tokens);
    trace!(tokens = tokens.len(), statements = ends.len(), "split statements");

    let mut tokens = tokens.into_iter();
    let mut start = 0;
    let statements = ends
        .into_iter()
        .map(|end| {
            let nodes = tokens.by_ref().take(end - start).map(leaf).collect();
            start = end;
            Statement::from_nodes(parse_nodes(nodes))
        })
        .collect();
    Document::new(statements)
}

/// Token index just past each statement
///
/// A `;` ends a statement only outside parentheses. Whatever follows the
/// last `;`, whitespace included, is one more statement.
fn statement_ends(tokens: &[Token]) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut depth = 0usize;
    let mut cursor = Cursor::new(tokens);
    while let Some(token) = cursor.current() {
        match token.kind {
            SyntaxKind::L_PAREN => depth += 1,
            SyntaxKind::R_PAREN => depth = depth.saturating_sub(1),
            SyntaxKind::SEMICOLON if depth == 0 => ends.push(cursor.index() + 1),
            _ => {}
        }
        cursor.advance();
    }
    if ends.last().copied().unwrap_or(0) < tokens.len() {
        ends.push(tokens.len());
    }
    ends
}

/// Keyword words become items; names, quoted names and `*` identifiers
fn leaf(token: Token) -> Node {
    match token.kind {
        SyntaxKind::WORD if is_keyword(token.text()) => Node::Item(token),
        SyntaxKind::WORD | SyntaxKind::QUOTED_IDENT | SyntaxKind::WILDCARD => {
            Node::Identifier(token)
        }
        _ => Node::Item(token),
    }
}
