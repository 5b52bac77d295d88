use crate::error::Error;
use crate::functions::Function;
use crate::token::{Identifier, Op, Token};

/// Expression tree built from the token list, before typing.
///
/// Groups hold the content of one bracket pair, without the brackets. Calls
/// and powers are produced later by the rewrites in `rewrite`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Token),
    Group(Vec<Node>),
    Call {
        name: String,
        function: &'static Function,
        arg: Box<Node>,
    },
    Raise(Box<Node>, Box<Node>),
}

impl Node {
    pub fn is_operator(&self, op: Op) -> bool {
        *self == Node::Leaf(Token::Operator(op))
    }

    /// `()` holds nothing, and cannot stand for an operand
    pub fn is_empty_group(&self) -> bool {
        match self {
            Node::Group(children) => children.is_empty(),
            _ => false,
        }
    }

    /// Function name as written, if this is a function leaf
    pub fn function(&self) -> Option<(&str, &'static Function)> {
        match self {
            Node::Leaf(Token::Identifier(Identifier::Function { name, function })) => {
                Some((name.as_str(), *function))
            }
            _ => None,
        }
    }

    fn is_bracket(&self) -> bool {
        match self {
            Node::Leaf(Token::LParen) | Node::Leaf(Token::RParen) => true,
            _ => false,
        }
    }
}

/// Nest the flat token list, one [`Node::Group`] per bracket pair.
///
/// Each pass scans from the left and collapses the first completed pair, which
/// is always the innermost-leftmost one, then starts over.
pub fn resolve_groups(tokens: Vec<Token>) -> Result<Vec<Node>, Error> {
    let mut nodes: Vec<Node> = tokens.into_iter().map(Node::Leaf).collect();
    while nodes.iter().any(Node::is_bracket) {
        let mut open = None;
        let mut closed = None;
        for (i, node) in nodes.iter().enumerate() {
            match node {
                Node::Leaf(Token::LParen) => open = Some(i),
                Node::Leaf(Token::RParen) => match open {
                    Some(start) => {
                        closed = Some((start, i));
                        break;
                    }
                    None => return Err(Error::UnmatchedRightParen),
                },
                _ => {}
            }
        }
        match closed {
            Some((start, end)) => {
                let mut inner: Vec<Node> = nodes.drain(start..=end).collect();
                inner.pop();
                inner.remove(0);
                nodes.insert(start, Node::Group(inner));
            }
            None => return Err(Error::UnmatchedLeftParen),
        }
    }
    Ok(nodes)
}
