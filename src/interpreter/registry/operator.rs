use std::{collections::HashMap, sync::Arc};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Priority of the additive built-ins, `+` and `-`.
pub const ADDITIVE_PRIORITY: i32 = 10;
/// Priority of the multiplicative built-ins, `*`, `/`, `%` and `^`.
pub const MULTIPLICATIVE_PRIORITY: i32 = 100;

/// The computation behind an operator symbol.
///
/// Failure is part of the signature: an operator that cannot combine its
/// operands returns an error instead of a number. Domain checks belong to the
/// operator, not to the evaluator, so custom operators must do their own.
///
/// Closures of type `Fn(f64, f64) -> EvalResult<f64>` implement this trait.
pub trait BinaryOperator: Send + Sync {
    /// Combines `left` and `right`.
    fn compute(&self, left: f64, right: f64) -> EvalResult<f64>;
}

impl<F> BinaryOperator for F where F: Fn(f64, f64) -> EvalResult<f64> + Send + Sync
{
    fn compute(&self, left: f64, right: f64) -> EvalResult<f64> {
        self(left, right)
    }
}

/// The built-in arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, failing on a zero divisor.
    Div,
    /// `%`, the floating-point remainder.
    Rem,
    /// `^`, exponentiation.
    Pow,
}

impl Arithmetic {
    /// Every built-in, in registration order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Rem, Self::Pow];

    /// The symbol the operator is registered under.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "^",
        }
    }

    /// The default priority; larger binds tighter.
    #[must_use]
    pub const fn priority(self) -> i32 {
        match self {
            Self::Add | Self::Sub => ADDITIVE_PRIORITY,
            Self::Mul | Self::Div | Self::Rem | Self::Pow => MULTIPLICATIVE_PRIORITY,
        }
    }
}

impl BinaryOperator for Arithmetic {
    /// # Example
    /// ```
    /// use calcite::{
    ///     error::RuntimeError,
    ///     interpreter::registry::operator::{Arithmetic, BinaryOperator},
    /// };
    ///
    /// assert_eq!(Arithmetic::Pow.compute(2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Arithmetic::Div.compute(1.0, 0.0), Err(RuntimeError::DivisionByZero));
    /// ```
    fn compute(&self, left: f64, right: f64) -> EvalResult<f64> {
        Ok(match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left / right
            },
            Self::Rem => left % right,
            Self::Pow => left.powf(right),
        })
    }
}

/// A registered operator: its priority and its computation.
#[derive(Clone)]
pub struct OperatorEntry {
    priority: i32,
    compute:  Arc<dyn BinaryOperator>,
}

impl OperatorEntry {
    /// Creates an entry from a priority and a computation.
    pub fn new(priority: i32, compute: impl BinaryOperator + 'static) -> Self {
        Self { priority,
               compute: Arc::new(compute) }
    }

    /// The priority; larger binds tighter.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Applies the operator to its operands.
    pub fn compute(&self, left: f64, right: f64) -> EvalResult<f64> {
        self.compute.compute(left, right)
    }
}

impl std::fmt::Debug for OperatorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorEntry")
         .field("priority", &self.priority)
         .finish_non_exhaustive()
    }
}

/// Mapping from operator symbol to [`OperatorEntry`].
///
/// Symbols may span several characters; the lexer picks the longest
/// registered symbol that matches at the scan position.
#[derive(Clone, Debug)]
pub struct OperatorRegistry {
    entries: HashMap<String, OperatorEntry>,
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for op in Arithmetic::ALL {
            registry.insert(op.symbol(), op.priority(), op);
        }
        registry
    }
}

impl OperatorRegistry {
    /// Creates a registry without any operators, not even the built-ins.
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Registers `symbol`, replacing any existing entry for it.
    ///
    /// An empty symbol could never be recognized and is ignored. So is a
    /// symbol starting with a parenthesis, which would take over grouping.
    ///
    /// # Returns
    /// `true` if the operator was registered.
    pub fn insert(&mut self,
                  symbol: &str,
                  priority: i32,
                  compute: impl BinaryOperator + 'static)
                  -> bool {
        if symbol.is_empty() {
            tracing::warn!("ignoring operator registration with an empty symbol");
            return false;
        }
        if symbol.starts_with(['(', ')']) {
            tracing::warn!(symbol, "ignoring operator registration starting with a parenthesis");
            return false;
        }
        let replaced = self.entries
                           .insert(symbol.to_string(), OperatorEntry::new(priority, compute))
                           .is_some();
        tracing::debug!(symbol, priority, replaced, "registered operator");
        true
    }

    /// Looks up the entry for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&OperatorEntry> {
        self.entries.get(symbol)
    }

    /// Returns `true` if `symbol` is registered.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Finds the longest registered symbol that `text` starts with.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::registry::operator::{Arithmetic, OperatorRegistry};
    ///
    /// let mut registry = OperatorRegistry::default();
    /// registry.insert("**", 200, Arithmetic::Pow);
    ///
    /// assert_eq!(registry.longest_match("** 2"), Some("**"));
    /// assert_eq!(registry.longest_match("* 2"), Some("*"));
    /// assert_eq!(registry.longest_match("2"), None);
    /// ```
    #[must_use]
    pub fn longest_match(&self, text: &str) -> Option<&str> {
        self.entries
            .keys()
            .filter(|symbol| text.starts_with(symbol.as_str()))
            .max_by_key(|symbol| symbol.len())
            .map(String::as_str)
    }

    /// Iterates over all registered symbols and their entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OperatorEntry)> {
        self.entries.iter().map(|(symbol, entry)| (symbol.as_str(), entry))
    }

    /// The number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no operators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
