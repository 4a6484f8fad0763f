use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{
    error::{ParseError, ParseResult},
    util::num::to_literal,
};

/// A source of variable values for `$name` substitution.
///
/// Implemented for maps keyed by strings and for lists of `(name, value)`
/// pairs. A map of `Option<f64>` treats `None` as unbound.
pub trait Variables {
    /// Returns the value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<f64>;
}

impl<K, S> Variables for HashMap<K, f64, S>
    where K: Borrow<str> + Hash + Eq,
          S: BuildHasher
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<K, S> Variables for HashMap<K, Option<f64>, S>
    where K: Borrow<str> + Hash + Eq,
          S: BuildHasher
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied().flatten()
    }
}

impl<K> Variables for BTreeMap<K, f64> where K: Borrow<str> + Ord
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<K> Variables for [(K, f64)] where K: AsRef<str>
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|&(_, value)| value)
    }
}

impl<K, const N: usize> Variables for [(K, f64); N] where K: AsRef<str>
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup(name)
    }
}

impl<K> Variables for Vec<(K, f64)> where K: AsRef<str>
{
    fn lookup(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup(name)
    }
}

/// Returns `true` for the characters allowed in a variable name.
#[must_use]
pub const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replaces every `$name` in `input` with the textual form of its value.
///
/// A name is one or more ASCII letters, digits or underscores. A `$` not
/// followed by a name is left in place, and there is no way to escape a
/// `$name`. Negative values are substituted in parentheses so they stay a
/// single operand.
///
/// # Errors
/// - `UndefinedVariable` if a referenced name has no value.
/// - `NonFiniteVariable` if a referenced value is `NaN` or infinite.
///
/// # Example
/// ```
/// use calcite::interpreter::variables::substitute;
///
/// let text = substitute("$width * $height", &[("width", 3.0), ("height", -2.5)]).unwrap();
/// assert_eq!(text, "3 * (-2.5)");
///
/// assert!(substitute("$depth", &[("width", 3.0)]).is_err());
/// ```
pub fn substitute<'s, V>(input: &'s str, variables: &V) -> ParseResult<Cow<'s, str>>
    where V: Variables + ?Sized
{
    if !input.contains('$') {
        return Ok(Cow::Borrowed(input));
    }

    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(dollar) = rest.find('$') {
        output.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());

        if len == 0 {
            output.push('$');
            rest = after;
            continue;
        }

        let name = &after[..len];
        let value =
            variables.lookup(name)
                     .ok_or_else(|| ParseError::UndefinedVariable { name: name.to_string() })?;
        if !value.is_finite() {
            return Err(ParseError::NonFiniteVariable { name: name.to_string() });
        }

        output.push_str(&to_literal(value));
        rest = &after[len..];
    }

    output.push_str(rest);
    Ok(Cow::Owned(output))
}
