use std::iter::Peekable;

use crate::interpreter::{calculator::Calculator, evaluator::core::EvalResult, token::Token};

impl Calculator {
    /// Folds operators and operands into `left` by precedence climbing.
    ///
    /// For each operator `op` with right operand `right`, if the operator
    /// after `right` has a higher priority than `op`, the rest of the
    /// sequence is reduced starting from `right` and combined with `left`
    /// last. Otherwise `left op right` is computed right away and becomes the
    /// new `left`, so operators of equal priority associate to the left
    /// (`2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`).
    ///
    /// A tighter binding takes in everything after it, lower priorities
    /// included: `2 - 3 * 4 + 5` is `2 - ((3 * 4) + 5)`.
    ///
    /// # Parameters
    /// - `tokens`: The rest of the sequence, consumed front to back.
    /// - `left`: The value accumulated so far.
    /// - `depth`: The nesting depth of the sequence.
    ///
    /// # Returns
    /// The folded value.
    pub(crate) fn climb<'t, I>(&self,
                               tokens: &mut Peekable<I>,
                               mut left: f64,
                               depth: usize)
                               -> EvalResult<f64>
        where I: Iterator<Item = &'t Token>
    {
        while let Some((symbol, entry)) = self.peek_operator(tokens)? {
            tokens.next();

            let right = self.operand(tokens, Some(symbol), depth)?;
            if let Some((_, next)) = self.peek_operator(tokens)?
               && next.priority() > entry.priority()
            {
                let rest = self.climb(tokens, right, depth)?;
                tracing::trace!(symbol, left, right = rest, "applying operator");
                return entry.compute(left, rest);
            }

            tracing::trace!(symbol, left, right, "applying operator");
            left = entry.compute(left, right)?;
        }

        Ok(left)
    }
}
