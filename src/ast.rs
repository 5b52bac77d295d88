use crate::error::Error;
use crate::functions::Arity;
use crate::node::Node;
use crate::token::{Identifier, Op, Token, Variable};

/// Ast nodes for the expressions
#[derive(Debug, Clone)]
pub enum Ast {
    /// A reserved name, resolved at evaluation time
    Variable(Variable),
    /// A constant value
    Value(f64),
    /// <left> op <right>, where `^` is the raise operation
    Binary(Op, Box<Ast>, Box<Ast>),
    /// op <operand>, for `+` and `-`
    Unary(Op, Box<Ast>),
    /// name(<arg>), always a single-argument table function
    Call {
        /// Lowercase table name
        name: &'static str,
        /// The table function
        func: fn(f64) -> f64,
        /// The single argument
        arg: Box<Ast>,
    },
}

impl PartialEq<Self> for Ast {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ast::Variable(a), Ast::Variable(b)) => a == b,
            (Ast::Value(v), Ast::Value(v2)) => v.to_le_bytes() == v2.to_le_bytes(),
            (Ast::Binary(op, a, b), Ast::Binary(op2, a2, b2)) => op == op2 && a == a2 && b == b2,
            (Ast::Unary(op, a), Ast::Unary(op2, a2)) => op == op2 && a == a2,
            (
                Ast::Call { name, arg, .. },
                Ast::Call {
                    name: name2,
                    arg: arg2,
                    ..
                },
            ) => name == name2 && arg == arg2,
            _ => false,
        }
    }
}

impl Ast {
    /// Type the fully rewritten tree. Every sequence must read as operands
    /// separated by `+ - * /`, with optional prefix signs.
    pub(crate) fn from_nodes(nodes: &[Node]) -> Result<Self, Error> {
        let mut builder = Builder { nodes, pos: 0 };
        let ast = builder.expression()?;
        if builder.pos == nodes.len() {
            Ok(ast)
        } else {
            Err(Error::Syntax)
        }
    }

    fn from_node(node: &Node) -> Result<Self, Error> {
        Self::from_nodes(std::slice::from_ref(node))
    }

    /// If the AST node correspond to a constant, get `Some(constant)`. Else,
    /// get `None`
    pub fn value(&self) -> Option<f64> {
        if let Self::Value(value) = *self {
            Some(value)
        } else {
            None
        }
    }

    /// Optimize the AST by doing constants propagation
    pub fn optimize(self) -> Self {
        match self {
            Self::Variable(_) | Self::Value(_) => self,
            Self::Call { name, func, arg } => {
                let arg = arg.optimize();
                if let Some(arg) = arg.value() {
                    return Self::Value(func(arg));
                }
                return Self::Call {
                    name,
                    func,
                    arg: Box::new(arg),
                };
            }
            Self::Unary(op, operand) => {
                let operand = operand.optimize();
                if let Some(value) = operand.value() {
                    return Self::Value(unary(op, value));
                }
                return Self::Unary(op, Box::new(operand));
            }
            Self::Binary(op, left, right) => {
                let left = left.optimize();
                let right = right.optimize();
                if let (Some(left), Some(right)) = (left.value(), right.value()) {
                    return Self::Value(binary(op, left, right));
                }
                return Self::Binary(op, Box::new(left), Box::new(right));
            }
        }
    }
}

/// Apply a prefix operator
pub(crate) fn unary(op: Op, value: f64) -> f64 {
    match op {
        Op::Minus => -value,
        _ => value,
    }
}

/// Apply an infix operator
pub(crate) fn binary(op: Op, left: f64, right: f64) -> f64 {
    match op {
        Op::Plus => left + right,
        Op::Minus => left - right,
        Op::Mul => left * right,
        Op::Div => left / right,
        Op::Exp => libm::pow(left, right),
    }
}

/// Precedence climbing over one node sequence
struct Builder<'a> {
    nodes: &'a [Node],
    pos: usize,
}

impl<'a> Builder<'a> {
    fn expression(&mut self) -> Result<Ast, Error> {
        self.binary(1)
    }

    fn peek_infix(&self) -> Option<Op> {
        match self.nodes.get(self.pos) {
            Some(Node::Leaf(Token::Operator(op))) if *op != Op::Exp => Some(*op),
            _ => None,
        }
    }

    fn binary(&mut self, min_precedence: u8) -> Result<Ast, Error> {
        let mut left = self.prefix()?;
        while let Some(op) = self.peek_infix() {
            if op.precedence() < min_precedence {
                break;
            }
            self.pos += 1;
            let right = self.binary(op.precedence() + 1)?;
            left = Ast::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    /// A run of prefix signs collapses into at most one negation
    fn prefix(&mut self) -> Result<Ast, Error> {
        let mut negate = false;
        while let Some(Node::Leaf(Token::Operator(op))) = self.nodes.get(self.pos) {
            if !op.is_unary() {
                break;
            }
            if *op == Op::Minus {
                negate = !negate;
            }
            self.pos += 1;
        }
        let operand = self.operand()?;
        if negate {
            Ok(Ast::Unary(Op::Minus, Box::new(operand)))
        } else {
            Ok(operand)
        }
    }

    fn operand(&mut self) -> Result<Ast, Error> {
        let node = self.nodes.get(self.pos).ok_or(Error::Syntax)?;
        self.pos += 1;
        match node {
            Node::Leaf(Token::Number(value)) => Ok(Ast::Value(*value)),
            Node::Leaf(Token::Identifier(Identifier::Variable(variable))) => {
                Ok(Ast::Variable(*variable))
            }
            Node::Group(children) => Ast::from_nodes(children),
            Node::Raise(base, exponent) => Ok(Ast::Binary(
                Op::Exp,
                Box::new(Ast::from_node(base)?),
                Box::new(Ast::from_node(exponent)?),
            )),
            Node::Call { function, arg, .. } => match function.arity() {
                Arity::Unary(func) => Ok(Ast::Call {
                    name: function.name(),
                    func,
                    arg: Box::new(Ast::from_node(arg)?),
                }),
                Arity::Binary(..) => Err(Error::Syntax),
            },
            Node::Leaf(_) => Err(Error::Syntax),
        }
    }
}
