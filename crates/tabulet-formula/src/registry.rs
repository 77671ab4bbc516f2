//! Constant and function registries
//!
//! Both registries are values owned by the evaluator instance, so tests
//! (and embedding hosts) can construct isolated evaluators with
//! deterministic contents. Lookup is case-insensitive in both.

use std::collections::HashMap;

use crate::error::{EvalError, EvalResult};
use crate::token::is_identifier;

/// Unary function implementation signature
pub type UnaryFn = fn(f64) -> f64;

/// The fixed whitelist of built-in unary math functions
const BUILTINS: &[(&str, UnaryFn)] = &[
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sqrt", f64::sqrt),
    ("log", f64::ln),
    ("log10", f64::log10),
    ("exp", f64::exp),
    ("abs", f64::abs),
    ("floor", f64::floor),
    ("ceil", f64::ceil),
];

/// Registry of the built-in unary functions
pub struct FunctionRegistry {
    functions: HashMap<&'static str, UnaryFn>,
}

impl FunctionRegistry {
    /// Create a registry holding the 13 built-in functions
    pub fn new() -> Self {
        Self {
            functions: BUILTINS.iter().copied().collect(),
        }
    }

    /// Check whether a name (case-insensitive) is a known function
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a function by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<UnaryFn> {
        self.functions
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable mapping from case-insensitive name to numeric constant
pub struct ConstantRegistry {
    /// Keys are stored lowercased
    constants: HashMap<String, f64>,
}

impl ConstantRegistry {
    /// Create a registry pre-seeded with `pi` and `e`
    pub fn new() -> Self {
        let mut constants = HashMap::new();
        constants.insert("pi".to_string(), std::f64::consts::PI);
        constants.insert("e".to_string(), std::f64::consts::E);
        Self { constants }
    }

    /// Add or update a named constant.
    ///
    /// The name must match the identifier pattern
    /// `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn register(&mut self, name: &str, value: f64) -> EvalResult<()> {
        if !is_identifier(name) {
            return Err(EvalError::InvalidConstantName(name.to_string()));
        }
        self.constants.insert(name.to_ascii_lowercase(), value);
        Ok(())
    }

    /// Look up a constant by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<f64> {
        self.constants
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }
}

impl Default for ConstantRegistry {
    fn default() -> Self {
        Self::new()
    }
}
