use crate::error::Error;
use crate::functions;
use crate::token::{Identifier, Op, Token, Variable};

#[must_use]
/// Check if `ident` would be accepted as a name inside an expression, either
/// a reserved variable or a function from the table.
///
/// # Examples
///
/// ```
/// # use plotfn::is_identifier;
///
/// assert_eq!(is_identifier("pi"), true);
/// assert_eq!(is_identifier("COSH"), true);
/// assert_eq!(is_identifier("X"), false);
/// assert_eq!(is_identifier("foo"), false);
/// ```
pub fn is_identifier(ident: &str) -> bool {
    Variable::from_name(ident).is_some() || functions::lookup(ident).is_some()
}

/// A helper struct for lexing the input
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    /// Whitespace is dropped up front, so `2 x` and `2x` lex the same.
    pub fn new(string: &str) -> Self {
        Self {
            chars: string.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
        }
    }

    /// Split the input into tokens, inserting the multiplications implied by
    /// adjacency (`4x`, `5(`, `)(`, `)x`).
    pub fn parse(&mut self) -> Result<Vec<Token>, Error> {
        let mut output: Vec<Token> = Vec::new();
        while let Some(token) = self.next_token()? {
            if let Some(previous) = output.last() {
                if implies_multiplication(previous, &token) {
                    output.push(Token::Operator(Op::Mul));
                }
            }
            output.push(token);
        }
        Ok(output)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let c = match self.peek(0) {
            Some(c) => c,
            None => return Ok(None),
        };
        self.pos += 1;
        let token = match c {
            c if is_number_part(c) => {
                let mut literal = self.run(c, is_number_part).replace('_', ".");
                if let Some(exponent) = self.exponent() {
                    literal.push_str(&exponent);
                }
                match literal.parse() {
                    Ok(number) => Token::Number(number),
                    Err(_) => return Err(Error::Syntax),
                }
            }
            c if c.is_ascii_alphabetic() => {
                let run = self.run(c, is_name_part).replace('_', ".");
                Token::Identifier(classify(run)?)
            }
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => match Op::from_char(other) {
                Some(op) => Token::Operator(op),
                None => return Err(Error::Syntax),
            },
        };
        Ok(Some(token))
    }

    /// Collect `first` and every following character accepted by `part`
    fn run(&mut self, first: char, part: fn(char) -> bool) -> String {
        let mut run = String::new();
        run.push(first);
        while let Some(c) = self.peek(0) {
            if !part(c) {
                break;
            }
            self.pos += 1;
            run.push(c);
        }
        run
    }

    /// Take the exponent of a number: `e`, an optional sign and at least one
    /// digit. Anything else leaves the `e` to be read as the constant.
    fn exponent(&mut self) -> Option<String> {
        if self.peek(0) != Some('e') {
            return None;
        }
        let sign = match self.peek(1) {
            Some(c @ '+') | Some(c @ '-') => Some(c),
            _ => None,
        };
        let digits = if sign.is_some() { 2 } else { 1 };
        if !self.peek(digits).map_or(false, |c| c.is_ascii_digit()) {
            return None;
        }
        self.pos += digits;

        let mut exponent = String::from("e");
        exponent.extend(sign);
        while let Some(c) = self.peek(0) {
            if !c.is_ascii_digit() {
                break;
            }
            self.pos += 1;
            exponent.push(c);
        }
        Some(exponent)
    }
}

/// Resolve an alphabetic run against the reserved names (case sensitive) and
/// then the function table (case insensitive).
fn classify(name: String) -> Result<Identifier, Error> {
    if let Some(variable) = Variable::from_name(&name) {
        return Ok(Identifier::Variable(variable));
    }
    match functions::lookup(&name) {
        Some(function) => Ok(Identifier::Function { name, function }),
        None => Err(Error::InvalidIdentifier(name)),
    }
}

fn implies_multiplication(previous: &Token, next: &Token) -> bool {
    match (previous, next) {
        (Token::Number(_), Token::Identifier(_))
        | (Token::Number(_), Token::LParen)
        | (Token::RParen, Token::Number(_))
        | (Token::RParen, Token::Identifier(_))
        | (Token::RParen, Token::LParen) => true,
        _ => false,
    }
}

/// Check if `c` can appear inside a number. `_` is an alternate decimal point.
fn is_number_part(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '_'
}

/// Check if `c` can appear after the first letter of a name
fn is_name_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}
