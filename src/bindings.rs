use crate::token::Variable;
use std::f64::consts;

/// Values for the reserved names, supplied at each evaluation.
///
/// `e` and `pi` default to their mathematical values, but may be overridden.
///
/// ```
/// # use plotfn::Bindings;
/// let bindings = Bindings::new(2.0).with_pi(3.0);
/// assert_eq!(bindings.x, 2.0);
/// assert_eq!(bindings.pi, 3.0);
/// assert_eq!(bindings.e, std::f64::consts::E);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bindings {
    /// The free variable
    pub x: f64,
    /// Value read for `e`
    pub e: f64,
    /// Value read for `pi`
    pub pi: f64,
}

impl Bindings {
    /// Bind `x`, with the usual constants
    pub fn new(x: f64) -> Self {
        Self {
            x,
            e: consts::E,
            pi: consts::PI,
        }
    }

    /// Override the value of `e`
    #[must_use]
    pub fn with_e(mut self, e: f64) -> Self {
        self.e = e;
        self
    }

    /// Override the value of `pi`
    #[must_use]
    pub fn with_pi(mut self, pi: f64) -> Self {
        self.pi = pi;
        self
    }

    /// Current value of `variable`
    pub fn get(&self, variable: Variable) -> f64 {
        match variable {
            Variable::X => self.x,
            Variable::E => self.e,
            Variable::Pi => self.pi,
        }
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Bindings;
    use crate::token::Variable;
    use std::f64::consts;

    #[test]
    fn defaults() {
        let bindings = Bindings::default();
        assert_eq!(bindings.get(Variable::X), 0.0);
        assert_eq!(bindings.get(Variable::E), consts::E);
        assert_eq!(bindings.get(Variable::Pi), consts::PI);
    }

    #[test]
    fn overrides() {
        let bindings = Bindings::new(4.0).with_e(1.0).with_pi(2.0);
        assert_eq!(bindings.get(Variable::X), 4.0);
        assert_eq!(bindings.get(Variable::E), 1.0);
        assert_eq!(bindings.get(Variable::Pi), 2.0);
    }
}
