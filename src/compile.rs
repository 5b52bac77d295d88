use crate::ast::{self, Ast};
use crate::bindings::Bindings;
use crate::token::Op;
use std::sync::Arc;

/// A compiled expression: pure, reentrant, shareable across threads.
pub type Compiled = Arc<dyn Fn(&Bindings) -> f64 + Send + Sync>;

type Closure = Box<dyn Fn(&Bindings) -> f64 + Send + Sync>;

/// Translate `ast` into a tree of closures.
///
/// The only names the result can read are the fields of [`Bindings`], and the
/// only functions it can call are the ones already stored in the AST.
pub fn compile(ast: &Ast) -> Compiled {
    Arc::from(translate(ast))
}

fn translate(ast: &Ast) -> Closure {
    match *ast {
        Ast::Value(value) => Box::new(move |_| value),
        Ast::Variable(variable) => Box::new(move |bindings| bindings.get(variable)),
        Ast::Unary(op, ref operand) => {
            let operand = translate(operand);
            match op {
                Op::Minus => Box::new(move |bindings| -operand(bindings)),
                _ => operand,
            }
        }
        Ast::Binary(op, ref left, ref right) => {
            let lhs = translate(left);
            let rhs = translate(right);
            match op {
                Op::Plus => Box::new(move |bindings| lhs(bindings) + rhs(bindings)),
                Op::Minus => Box::new(move |bindings| lhs(bindings) - rhs(bindings)),
                Op::Mul => Box::new(move |bindings| lhs(bindings) * rhs(bindings)),
                Op::Div => Box::new(move |bindings| lhs(bindings) / rhs(bindings)),
                Op::Exp => Box::new(move |bindings| ast::binary(Op::Exp, lhs(bindings), rhs(bindings))),
            }
        }
        Ast::Call { func, ref arg, .. } => {
            let arg = translate(arg);
            Box::new(move |bindings| func(arg(bindings)))
        }
    }
}
