use hashbrown::HashMap;
use std::fmt::{self, Debug, Formatter};

/// Numeric transform behind a table entry
#[derive(Clone, Copy)]
pub enum Arity {
    /// Takes one argument, callable from expressions
    Unary(fn(f64) -> f64),
    /// Takes two arguments, only reachable through [`Function::apply`]
    Binary(fn(f64, f64) -> f64),
}

/// One entry of the [`FUNCTIONS`](struct.FUNCTIONS.html) table
#[derive(Clone, Copy)]
pub struct Function {
    name: &'static str,
    arity: Arity,
}

impl Function {
    const fn unary(name: &'static str, func: fn(f64) -> f64) -> Self {
        Self {
            name,
            arity: Arity::Unary(func),
        }
    }

    const fn binary(name: &'static str, func: fn(f64, f64) -> f64) -> Self {
        Self {
            name,
            arity: Arity::Binary(func),
        }
    }

    /// Lowercase name of the function
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The function pointer behind the entry
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Number of arguments the function takes
    pub fn arg_count(&self) -> usize {
        match self.arity {
            Arity::Unary(_) => 1,
            Arity::Binary(..) => 2,
        }
    }

    /// Directly invoke the function with `args`.
    ///
    /// This is the only way to reach the two-argument entries, expressions
    /// can only ever supply a single argument.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plotfn::functions;
    /// let max = functions::lookup("max").unwrap();
    /// assert_eq!(max.apply(&[2.0, 5.0]), Some(5.0));
    /// assert_eq!(max.apply(&[2.0]), None);
    /// ```
    #[must_use]
    pub fn apply(&self, args: &[f64]) -> Option<f64> {
        match (self.arity, args) {
            (Arity::Unary(func), &[a]) => Some(func(a)),
            (Arity::Binary(func), &[a, b]) => Some(func(a, b)),
            _ => None,
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Debug for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "Function({}/{})", self.name, self.arg_count())
    }
}

fn sec(x: f64) -> f64 {
    1.0 / libm::cos(x)
}

fn csc(x: f64) -> f64 {
    1.0 / libm::sin(x)
}

fn cot(x: f64) -> f64 {
    1.0 / libm::tan(x)
}

fn asec(x: f64) -> f64 {
    libm::acos(1.0 / x)
}

fn acsc(x: f64) -> f64 {
    libm::asin(1.0 / x)
}

fn acot(x: f64) -> f64 {
    libm::atan(1.0 / x)
}

fn sech(x: f64) -> f64 {
    1.0 / libm::cosh(x)
}

fn csch(x: f64) -> f64 {
    1.0 / libm::sinh(x)
}

fn coth(x: f64) -> f64 {
    1.0 / libm::tanh(x)
}

fn asech(x: f64) -> f64 {
    libm::acosh(1.0 / x)
}

fn acsch(x: f64) -> f64 {
    libm::asinh(1.0 / x)
}

fn acoth(x: f64) -> f64 {
    libm::atanh(1.0 / x)
}

const TABLE: &[Function] = &[
    Function::unary("sin", libm::sin),
    Function::unary("cos", libm::cos),
    Function::unary("tan", libm::tan),
    Function::unary("asin", libm::asin),
    Function::unary("acos", libm::acos),
    Function::unary("atan", libm::atan),
    Function::unary("sec", sec),
    Function::unary("csc", csc),
    Function::unary("cot", cot),
    Function::unary("asec", asec),
    Function::unary("acsc", acsc),
    Function::unary("acot", acot),
    Function::unary("sinh", libm::sinh),
    Function::unary("cosh", libm::cosh),
    Function::unary("tanh", libm::tanh),
    Function::unary("sech", sech),
    Function::unary("csch", csch),
    Function::unary("coth", coth),
    Function::unary("asinh", libm::asinh),
    Function::unary("acosh", libm::acosh),
    Function::unary("atanh", libm::atanh),
    Function::unary("asech", asech),
    Function::unary("acsch", acsch),
    Function::unary("acoth", acoth),
    Function::unary("exp", libm::exp),
    Function::unary("ln", libm::log),
    Function::unary("log", libm::log10),
    Function::unary("sqrt", libm::sqrt),
    Function::unary("abs", libm::fabs),
    Function::unary("floor", libm::floor),
    Function::unary("ceil", libm::ceil),
    Function::binary("max", libm::fmax),
    Function::binary("min", libm::fmin),
];

lazy_static! {
    /// The fixed table of functions usable inside expressions, keyed by
    /// lowercase name. Built once, never mutated.
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::with_capacity(TABLE.len());
        for function in TABLE {
            map.insert(function.name, *function);
        }
        map
    };
}

/// Find the table entry for `name`, ignoring ASCII case.
///
/// ```
/// # use plotfn::functions;
/// assert_eq!(functions::lookup("SIN").map(|f| f.name()), Some("sin"));
/// assert!(functions::lookup("foo").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static Function> {
    FUNCTIONS.get(name.to_ascii_lowercase().as_str())
}
