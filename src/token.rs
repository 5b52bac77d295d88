use crate::functions::Function;

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// A reserved variable or a function name
    Identifier(Identifier),
    /// An arithmetic operator
    Operator(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// What an alphabetic token resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    /// Reference into the binding environment
    Variable(Variable),
    /// Function table entry, with the spelling used in the input
    Function {
        /// The name as written by the user
        name: String,
        /// The table entry it matched
        function: &'static Function,
    },
}

/// Reserved names, resolved against a [`Bindings`](struct.Bindings.html) at
/// evaluation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// `x`
    X,
    /// `e`
    E,
    /// `pi`
    Pi,
}

impl Variable {
    /// Match `name` against the reserved names. The match is case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Self::X),
            "e" => Some(Self::E),
            "pi" => Some(Self::Pi),
            _ => None,
        }
    }

    /// The name as written in expressions
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::E => "e",
            Self::Pi => "pi",
        }
    }
}

/// Allowed operators in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`, infix or prefix
    Plus,
    /// `-`, infix or prefix
    Minus,
    /// `*`, also implied by adjacency
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Operator spelled by `c`, if any
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// Check if the operator can also be used in prefix position
    pub fn is_unary(self) -> bool {
        match self {
            Self::Plus | Self::Minus => true,
            Self::Mul | Self::Div | Self::Exp => false,
        }
    }

    /// Inverse of [`Op::from_char`]
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }
}
