//! Linear/quadratic equation solving over `f64`.
//!
//! Zero tests on coefficients and on the discriminant are exact comparisons.
//! Values that are merely close to zero take the non-zero branch.

use serde::{Serialize, Serializer};
use tracing::debug;

/// Coefficients of `a*x^2 + b*x + c = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Classification of an equation together with its real roots.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    InfiniteSolutions,
    NoSolution,
    Linear {
        #[serde(serialize_with = "serialize_real")]
        x: f64,
    },
    TwoDistinctRoots {
        #[serde(serialize_with = "serialize_real")]
        x1: f64,
        #[serde(serialize_with = "serialize_real")]
        x2: f64,
    },
    RepeatedRoot {
        #[serde(serialize_with = "serialize_real")]
        x: f64,
    },
    ComplexNoRealSolution,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn solve(&self) -> Solution {
        solve(*self)
    }

    /// Value of `a*x^2 + b*x + c`.
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_polynomial(&[self.c, self.b, self.a], x)
    }

    /// Absolute value of the polynomial at `x`; zero for an exact root.
    pub fn residual(&self, x: f64) -> f64 {
        self.evaluate(x).abs()
    }
}

impl Solution {
    /// Real roots in the order they are reported.
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Solution::Linear { x } | Solution::RepeatedRoot { x } => vec![x],
            Solution::TwoDistinctRoots { x1, x2 } => vec![x1, x2],
            Solution::InfiniteSolutions
            | Solution::NoSolution
            | Solution::ComplexNoRealSolution => Vec::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Solution::InfiniteSolutions => "infinite_solutions",
            Solution::NoSolution => "no_solution",
            Solution::Linear { .. } => "linear",
            Solution::TwoDistinctRoots { .. } => "two_distinct_roots",
            Solution::RepeatedRoot { .. } => "repeated_root",
            Solution::ComplexNoRealSolution => "complex_no_real_solution",
        }
    }
}

/// Finite values stay numbers; `inf`, `-inf` and `NaN` become strings
/// spelled as `Display` prints them (JSON has no literal for them).
fn serialize_real<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

pub fn solve_linear(a: f64, b: f64) -> Result<f64, &'static str> {
    // Solves ax + b = 0
    if a == 0.0 {
        Err("No solution exists if 'a' is zero.")
    } else {
        Ok(-b / a)
    }
}

pub fn solve(coeffs: Coefficients) -> Solution {
    let Coefficients { a, b, c } = coeffs;

    if a == 0.0 {
        let solution = match solve_linear(b, c) {
            Ok(x) => Solution::Linear { x },
            Err(_) if c == 0.0 => Solution::InfiniteSolutions,
            Err(_) => Solution::NoSolution,
        };
        debug!(a, b, c, kind = solution.kind(), "degenerate (a == 0) equation");
        return solution;
    }

    let delta = discriminant(a, b, c);
    let solution = if delta > 0.0 {
        let root = delta.sqrt();
        Solution::TwoDistinctRoots {
            x1: (-b + root) / (2.0 * a),
            x2: (-b - root) / (2.0 * a),
        }
    } else if delta == 0.0 {
        Solution::RepeatedRoot { x: -b / (2.0 * a) }
    } else {
        Solution::ComplexNoRealSolution
    };
    debug!(a, b, c, delta, kind = solution.kind(), "quadratic equation");
    solution
}

pub fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
    // coefficients = [2, -4, 3] represents 2 - 4x + 3x^2
    coefficients
        .iter()
        .enumerate()
        .map(|(i, &coeff)| coeff * x.powi(i as i32))
        .sum()
}
