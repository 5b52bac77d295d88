//! Tree rewrites run between grouping and typing: function names absorb the
//! element after them, and `^` absorbs its two neighbours.

use crate::error::Error;
use crate::node::Node;
use crate::token::Op;

type Pass = fn(&mut Vec<Node>) -> Result<(), Error>;

/// Run `pass` on every sequence nested below `node`
fn descend(node: &mut Node, pass: Pass) -> Result<(), Error> {
    match node {
        Node::Leaf(_) => Ok(()),
        Node::Group(children) => pass(children),
        Node::Call { arg, .. } => descend(arg, pass),
        Node::Raise(base, exponent) => {
            descend(base, pass)?;
            descend(exponent, pass)
        }
    }
}

/// Turn every `name arg` pair into a [`Node::Call`], children first.
///
/// A name directly followed by another name takes that name's call as its
/// argument, so stacked names nest.
pub fn calls(nodes: &mut Vec<Node>) -> Result<(), Error> {
    for node in nodes.iter_mut() {
        descend(node, calls)?;
    }
    let mut i = 0;
    while i < nodes.len() {
        call_at(nodes, i)?;
        i += 1;
    }
    Ok(())
}

fn call_at(nodes: &mut Vec<Node>, i: usize) -> Result<(), Error> {
    let (name, function) = match nodes[i].function() {
        Some((name, function)) => (name.to_owned(), function),
        None => return Ok(()),
    };
    if nodes.get(i + 1).map_or(true, Node::is_empty_group) {
        return Err(Error::MissingFunctionArgument(name));
    }
    call_at(nodes, i + 1)?;
    let arg = nodes.remove(i + 1);
    nodes[i] = Node::Call {
        name,
        function,
        arg: Box::new(arg),
    };
    Ok(())
}

/// Turn every `a ^ b` into a [`Node::Raise`], children first.
///
/// The scan restarts just before each replacement, so chains group from the
/// left: `a^b^c` is `(a^b)^c`.
pub fn powers(nodes: &mut Vec<Node>) -> Result<(), Error> {
    for node in nodes.iter_mut() {
        descend(node, powers)?;
    }
    let mut i = 0;
    while i < nodes.len() {
        if nodes[i].is_operator(Op::Exp) {
            let has_base = i > 0 && !nodes[i - 1].is_empty_group();
            let has_exponent = nodes.get(i + 1).map_or(false, |n| !n.is_empty_group());
            if !has_base || !has_exponent {
                return Err(Error::MissingPowerOperand);
            }
            let exponent = nodes.remove(i + 1);
            nodes.remove(i);
            let base = nodes.remove(i - 1);
            nodes.insert(i - 1, Node::Raise(Box::new(base), Box::new(exponent)));
            i -= 1;
        }
        i += 1;
    }
    Ok(())
}
