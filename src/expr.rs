use crate::ast::Ast;
use crate::bindings::Bindings;
use crate::compile::{self, Compiled};
use crate::lexer::Lexer;
use crate::node;
use crate::rewrite;
use crate::token::Variable;
use crate::Error;
use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};

/// Parse and evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if parsing succeeds, or `Err(cause)` with the
/// diagnostic otherwise. Evaluation itself never fails, but may produce `NaN`
/// or infinities.
///
/// # Example
///
/// ```
/// # use plotfn::{eval, Bindings};
///
/// assert_eq!(eval("45 - 2^3", &Bindings::default()), Ok(37.0));
/// assert_eq!(eval("3x", &Bindings::new(-5.0)), Ok(-15.0));
/// ```
pub fn eval(input: &str, bindings: &Bindings) -> Result<f64, Error> {
    Expr::parse(input).map(|expr| expr.eval(bindings))
}

/// A parsed and compiled expression of `x`.
///
/// Cloning is cheap, clones share the compiled function.
///
/// # Examples
/// ```
/// # use plotfn::{Bindings, Expr};
/// let expr = Expr::parse("2sin(x) + 1").unwrap();
/// assert_eq!(expr.call(0.0), 1.0);
///
/// let expr = Expr::parse("x^2").unwrap();
/// assert_eq!(expr.eval(&Bindings::new(3.0)), 9.0);
/// assert_eq!(expr.call(-4.0), 16.0);
/// ```
#[derive(Clone)]
pub struct Expr {
    source: String,
    ast: Ast,
    function: Compiled,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use plotfn::{Error, Expr};
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5(x - 1)").is_ok());
    /// // an invalid expression
    /// assert_eq!(
    ///     Expr::parse("3y").unwrap_err(),
    ///     Error::InvalidIdentifier("y".into())
    /// );
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let result = Self::build(expression);
        match result {
            Ok(ref expr) => debug!("compiled {:?} into {:?}", expression, expr.ast),
            Err(ref err) => debug!("rejected {:?}: {}", expression, err),
        }
        result
    }

    fn build(expression: &str) -> Result<Self, Error> {
        let tokens = Lexer::new(expression).parse()?;
        trace!("tokens: {:?}", tokens);

        let mut nodes = node::resolve_groups(tokens)?;
        rewrite::calls(&mut nodes)?;
        rewrite::powers(&mut nodes)?;
        trace!("tree: {:?}", nodes);

        let ast = Ast::from_nodes(&nodes)?.optimize();
        let function = compile::compile(&ast);
        Ok(Self {
            source: expression.to_owned(),
            ast,
            function,
        })
    }

    /// Evaluate the expression with the given `bindings`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plotfn::{Bindings, Expr};
    /// let expr = Expr::parse("pi * x").unwrap();
    /// assert_eq!(expr.eval(&Bindings::new(2.0).with_pi(3.0)), 6.0);
    /// ```
    pub fn eval(&self, bindings: &Bindings) -> f64 {
        (self.function)(bindings)
    }

    /// Evaluate at `x`, with the default values for `e` and `pi`.
    pub fn call(&self, x: f64) -> f64 {
        self.eval(&Bindings::new(x))
    }

    /// Reserved names the expression reads.
    ///
    /// # Examples
    /// ```
    /// # use plotfn::{Expr, Variable};
    /// # use std::collections::HashSet;
    /// let expr = Expr::parse("3 + 5 * 2").unwrap();
    /// assert_eq!(expr.variables(), HashSet::new());
    ///
    /// let expr = Expr::parse("e^x").unwrap();
    /// assert_eq!(expr.variables(), HashSet::from([Variable::E, Variable::X]));
    /// ```
    pub fn variables(&self) -> HashSet<Variable> {
        let mut variables = HashSet::new();
        Self::inner_variables(&self.ast, &mut variables);
        variables
    }

    /// The folded AST the function was compiled from
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// The text this expression was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    fn inner_variables(ast: &Ast, variables: &mut HashSet<Variable>) {
        match *ast {
            Ast::Variable(variable) => {
                variables.insert(variable);
            }
            Ast::Value(_) => {}
            Ast::Unary(_, ref operand) | Ast::Call { arg: ref operand, .. } => {
                Self::inner_variables(operand, variables);
            }
            Ast::Binary(_, ref left, ref right) => {
                Self::inner_variables(left, variables);
                Self::inner_variables(right, variables);
            }
        }
    }
}

impl Debug for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.debug_struct("Expr")
            .field("source", &self.source)
            .field("ast", &self.ast)
            .finish()
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.ast == other.ast
    }
}

#[cfg(test)]
mod tests {
    use super::{eval, Expr};
    use crate::bindings::Bindings;
    use crate::token::Variable;
    use crate::Error;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::f64::consts;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn parse() {
        init_logger();
        let valid_expressions = [
            "2*x",
            "(3 + -5)*45",
            "(3. + 5.0)*\t\n45",
            "sin(34.0) ^ sqrt(28.0)",
            "2(3)",
            "(x+1)^(x+2)",
            "SIN(x)COS(x)",
            "-x^2 + 3x - 1",
            "e^sin(x)",
            "1_5x",
            "acoth(pi)/Log(x)",
        ];
        for expr in &valid_expressions {
            assert!(Expr::parse(expr).is_ok(), "{}", expr);
        }
    }

    #[test_case("2*x", 3.0 => 6.0 ; "explicit multiplication")]
    #[test_case("x^2", 3.0 => 9.0 ; "square")]
    #[test_case("sin(0)", 1.0 => 0.0 ; "sine of zero")]
    #[test_case("2(3)", 0.0 => 6.0 ; "implicit multiplication before group")]
    #[test_case("4x", 2.5 => 10.0 ; "implicit multiplication before name")]
    #[test_case("(x+1)(x-1)", 3.0 => 8.0 ; "implicit multiplication between groups")]
    #[test_case("(2)x", 3.0 => 6.0 ; "implicit multiplication after group")]
    #[test_case("3 + 5 * 2", 0.0 => 13.0 ; "precedence")]
    #[test_case("10 / 5 / 2", 0.0 => 1.0 ; "division is left associative")]
    #[test_case("2 - -3", 0.0 => 5.0 ; "double minus")]
    #[test_case("-x", 4.0 => -4.0 ; "negation")]
    #[test_case("-x^2", 3.0 => -9.0 ; "negation applies after power")]
    #[test_case("sqrt(x)", 16.0 => 4.0 ; "square root")]
    #[test_case("abs(x)", -2.0 => 2.0 ; "absolute value")]
    #[test_case("FLOOR(x)", 2.7 => 2.0 ; "uppercase function")]
    #[test_case("sin(x)^2 + cos(x)^2", 0.0 => 1.0 ; "call binds before power")]
    #[test_case("2^(x+1)", 2.0 => 8.0 ; "grouped exponent")]
    #[test_case("2^abs(x)", -3.0 => 8.0 ; "call as exponent")]
    #[test_case("1_5x", 2.0 => 3.0 ; "underscore as decimal point")]
    #[test_case("e^(-x)", 0.0 => 1.0 ; "signed exponent in parentheses")]
    #[test_case("x^(-1)", 4.0 => 0.25 ; "negative power in parentheses")]
    #[test_case("1e5", 0.0 => 100_000.0 ; "exponent notation")]
    #[test_case("2.5e3x", 2.0 => 5000.0 ; "exponent notation before name")]
    #[test_case("4e-1x", 5.0 => 2.0 ; "negative exponent notation")]
    fn values(input: &str, x: f64) -> f64 {
        Expr::parse(input).unwrap().call(x)
    }

    #[test]
    fn chained_powers_evaluate_left_to_right() {
        // (2^3)^2, not 2^(3^2)
        assert_eq!(eval("2^3^2", &Bindings::default()), Ok(64.0));
        assert_eq!(eval("2^(3^2)", &Bindings::default()), Ok(512.0));
    }

    #[test]
    fn constants() {
        assert_eq!(eval("pi", &Bindings::default()), Ok(consts::PI));
        assert_eq!(eval("e", &Bindings::default()), Ok(consts::E));
        assert_eq!(eval("2e", &Bindings::default()), Ok(2.0 * consts::E));
        let bindings = Bindings::new(1.0).with_e(2.0).with_pi(3.0);
        assert_eq!(eval("e*pi + x", &bindings), Ok(7.0));
    }

    #[test_case("(2+3" => Error::UnmatchedLeftParen ; "unmatched left")]
    #[test_case("2+3)" => Error::UnmatchedRightParen ; "unmatched right")]
    #[test_case("foo(x)" => Error::InvalidIdentifier("foo".into()) ; "unknown function")]
    #[test_case("x^" => Error::MissingPowerOperand ; "missing exponent")]
    #[test_case("sin()" => Error::MissingFunctionArgument("sin".into()) ; "empty call")]
    #[test_case("" => Error::Syntax ; "empty input")]
    #[test_case("2*" => Error::Syntax ; "dangling operator")]
    #[test_case("x(2)" => Error::Syntax ; "variable is not callable")]
    #[test_case("y + foo" => Error::InvalidIdentifier("y".into()) ; "tokenizer fails first")]
    #[test_case("x_5" => Error::InvalidIdentifier("x.5".into()) ; "underscore inside a name")]
    #[test_case("(x^)" => Error::MissingPowerOperand ; "nested failure keeps its message")]
    #[test_case("((sin))" => Error::MissingFunctionArgument("sin".into()) ; "deep failure keeps its message")]
    #[test_case("e^-x" => Error::Syntax ; "signed exponent without parentheses")]
    #[test_case("1E5" => Error::InvalidIdentifier("E5".into()) ; "exponent marker is lowercase")]
    fn errors(input: &str) -> Error {
        Expr::parse(input).unwrap_err()
    }

    #[test]
    fn messages() {
        let message = |input: &str| Expr::parse(input).unwrap_err().to_string();
        assert_eq!(message("foo(x)"), "invalid variable or function: foo");
        assert_eq!(message("(2+3"), "unmatched left parenthesis (");
        assert_eq!(message("2+3)"), "unmatched right parenthesis )");
        assert_eq!(
            message("x^"),
            "^ requires two arguments, for example x^2 or (x+1)^(x+2)."
        );
        assert_eq!(message("Cos()"), "function Cos requires an argument.");
    }

    #[test]
    fn binary_functions_are_not_callable() {
        assert_eq!(Expr::parse("max(x)").unwrap_err(), Error::Syntax);
        assert_eq!(Expr::parse("MIN(2)").unwrap_err(), Error::Syntax);
        assert_eq!(
            Expr::parse("max()").unwrap_err(),
            Error::MissingFunctionArgument("max".into())
        );
    }

    #[test]
    fn e_after_a_number() {
        let e = consts::E;
        assert_eq!(eval("2e", &Bindings::default()), Ok(2.0 * e));
        assert_eq!(eval("2ex", &Bindings::new(3.0)), Ok(2.0 * e * 3.0));
        assert_eq!(eval("2e-x", &Bindings::new(1.0)), Ok(2.0 * e - 1.0));
        assert_eq!(eval("2e+1", &Bindings::default()), Ok(20.0));
    }

    #[test]
    fn long_sign_runs_evaluate() {
        let even = Expr::parse(&format!("{}x", "-".repeat(100_000))).unwrap();
        assert_eq!(even.call(2.0), 2.0);
        let odd = Expr::parse(&format!("{}x", "-".repeat(100_001))).unwrap();
        assert_eq!(odd.call(2.0), -2.0);
        assert_eq!(
            Expr::parse(&"-".repeat(100_000)).unwrap_err(),
            Error::Syntax
        );
    }

    #[test]
    fn domain_errors_are_not_clamped() {
        assert!(Expr::parse("sqrt(x)").unwrap().call(-1.0).is_nan());
        assert!(Expr::parse("asin(x)").unwrap().call(2.0).is_nan());
        assert_eq!(Expr::parse("1/x").unwrap().call(0.0), f64::INFINITY);
        assert_eq!(Expr::parse("ln(x)").unwrap().call(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn reparsing_is_independent() {
        let first = Expr::parse("x^3 - 2sin(x)").unwrap();
        let second = Expr::parse("x^3 - 2sin(x)").unwrap();
        assert_eq!(first, second);
        for &x in &[-2.0, 0.0, 0.5, 7.25] {
            assert_eq!(first.call(x).to_bits(), second.call(x).to_bits());
        }
    }

    #[test]
    fn constant_folding_keeps_results() {
        let folded = Expr::parse("sqrt(2)*x").unwrap();
        assert_eq!(folded.call(3.0), 2f64.sqrt() * 3.0);
        assert_eq!(folded.source(), "sqrt(2)*x");
    }

    #[test]
    fn variables() {
        let expr = Expr::parse("(x + pi)^2").unwrap();
        assert_eq!(expr.variables(), HashSet::from([Variable::X, Variable::Pi]));

        let expr = Expr::parse("x * ln(e + x)").unwrap();
        assert_eq!(expr.variables(), HashSet::from([Variable::X, Variable::E]));
    }

    proptest! {
        /// Any text either compiles or yields a diagnostic, without panicking
        #[test]
        fn parse_never_panics(s in ".*") {
            let _ = Expr::parse(&s);
        }

        #[test]
        fn parse_never_panics_on_expression_alphabet(s in "[0-9x()+*/^. _-]{0,24}|(sin|e|pi|max|[()x2^-]){0,12}") {
            if let Ok(expr) = Expr::parse(&s) {
                let _ = expr.call(1.5);
            }
        }

        #[test]
        fn parsing_is_deterministic(a in -100i32..100, b in 1i32..20, x in -50.0f64..50.0) {
            let input = format!("{}x^2 - x/{} + cos(x)", a, b);
            let first = Expr::parse(&input).unwrap();
            let second = Expr::parse(&input).unwrap();
            prop_assert_eq!(first.call(x).to_bits(), second.call(x).to_bits());
        }
    }
}
