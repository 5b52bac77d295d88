#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::float_cmp
)]

//! plotfn, a crate turning typed-in curves into callable functions.
//!
//! A player types an expression of `x`, such as `2sin(x) + x^2/4`, and the
//! game samples the resulting function pixel by pixel to draw a shot. The
//! easiest way to use this crate is with [`Expr`](struct.Expr.html):
//!
//! ```
//! use plotfn::{Bindings, Expr};
//!
//! let expr = Expr::parse("2x + 1").unwrap();
//! assert_eq!(expr.call(3.0), 7.0);
//! assert_eq!(expr.eval(&Bindings::new(0.5)), 2.0);
//! ```
//!
//! Parsing either yields an `Expr` or an [`Error`](enum.Error.html) whose
//! message can be shown to the player as is:
//!
//! ```
//! use plotfn::Expr;
//!
//! let err = Expr::parse("sin(x").unwrap_err();
//! assert_eq!(err.to_string(), "unmatched left parenthesis (");
//! ```
//!
//! # Language definition
//!
//! - numbers: `12`, `0.5`, `.5`, with `_` accepted in place of the decimal
//!   point (`1_5` is `1.5`), and exponent notation with a lowercase `e`
//!   followed by digits (`1e5`, `2.5e-3`);
//! - the reserved names `x`, `e` and `pi`, case sensitive. `e` and `pi`
//!   default to their mathematical values but can be overridden through
//!   [`Bindings`](struct.Bindings.html);
//! - operators `+`, `-`, `*`, `/` with the usual precedence, prefix `+` and
//!   `-`, and `^`. Chained powers group from the left: `2^3^2` is `64`. The
//!   exponent is a single element, so a signed one needs parentheses:
//!   `e^(-x)`, while `e^-x` is a syntax error;
//! - parentheses;
//! - function names, case insensitive, applied to the element right after
//!   them: `sin(x + 1)`, `sin 2`. A call binds tighter than `^`, so
//!   `sin(x)^2` squares the sine. Available: `sin`, `cos`, `tan`, `asin`,
//!   `acos`, `atan`, `sec`, `csc`, `cot`, `asec`, `acsc`, `acot`, `sinh`,
//!   `cosh`, `tanh`, `sech`, `csch`, `coth`, `asinh`, `acosh`, `atanh`,
//!   `asech`, `acsch`, `acoth`, `exp`, `ln`, `log` (base 10), `sqrt`, `abs`,
//!   `floor`, `ceil`. The table also holds `max` and `min`, reachable only
//!   through [`Function::apply`](functions/struct.Function.html#method.apply);
//! - implicit multiplication after a number (`4x`, `5(x+1)`, `2e`, `2e-x`)
//!   and after a closing parenthesis (`(x)(x)`, `(x)2`).
//!
//! Whitespace is ignored everywhere, so `2 x` is `2x` and `sin x` is the
//! unknown name `sinx`.
//!
//! # Technical details
//!
//! The text is tokenized, brackets are nested into groups, function names and
//! `^` are rewritten into call and power nodes, and the result is typed into
//! an [`Ast`](enum.Ast.html). Constants are folded, and the AST is turned into
//! a tree of closures. Nothing but the table functions and the bound values
//! of `x`, `e` and `pi` is reachable from an expression. Evaluation works on
//! `f64` and never fails: out-of-domain inputs give `NaN` or infinities.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod ast;
mod bindings;
mod compile;
mod error;
mod expr;
pub mod functions;
mod lexer;
mod node;
pub mod path;
mod rewrite;
mod token;

pub use ast::Ast;
pub use bindings::Bindings;
pub use compile::Compiled;
pub use error::Error;
pub use expr::{eval, Expr};
pub use functions::{Function, FUNCTIONS};
pub use lexer::is_identifier;
pub use token::{Op, Variable};
