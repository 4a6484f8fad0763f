/// Scan position over one range of an expression.
///
/// A cursor covers the text between a start and an end offset of the
/// substituted expression. The top level covers the whole text; each group
/// gets its own cursor over the text between its parentheses. Offsets are
/// always relative to the whole expression, so errors point at the right
/// place however deep they occur.
///
/// Custom token parsers receive the cursor and move it past what they
/// consume.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    index: usize,
    end:   usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `input[start..end]` at group nesting `depth`.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::lexer::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("(12)", 1, 3, 1);
    /// assert_eq!(cursor.remaining(), "12");
    /// assert_eq!(cursor.bump(), Some('1'));
    /// assert_eq!(cursor.index(), 2);
    /// ```
    #[must_use]
    pub fn new(input: &'a str, start: usize, end: usize, depth: usize) -> Self {
        let mut end = end.min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }
        let mut index = start.min(end);
        while !input.is_char_boundary(index) {
            index += 1;
        }
        Self { input,
               index,
               end,
               depth }
    }

    /// The whole expression, including text outside this cursor's range.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// The current offset into [`Cursor::input`].
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The offset this cursor stops at.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The group nesting depth; `0` at the top level.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The unconsumed text of this cursor's range.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.index..self.end]
    }

    /// The character at the scan position, if any remains.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes and returns one character.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += ch.len_utf8();
        Some(ch)
    }

    /// Moves forward by `bytes`, stopping at the end of the range and never
    /// inside a multi-byte character.
    pub fn advance(&mut self, bytes: usize) {
        self.seek(self.index.saturating_add(bytes));
    }

    /// Consumes characters while `predicate` holds and returns them.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::lexer::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ff+1", 0, 4, 0);
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_hexdigit()), "ff");
    /// assert_eq!(cursor.peek(), Some('+'));
    /// ```
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let rest = self.remaining();
        let len = rest.find(|c: char| !predicate(c)).unwrap_or(rest.len());
        self.index += len;
        &rest[..len]
    }

    pub(crate) fn seek(&mut self, index: usize) {
        let mut index = index.clamp(self.index, self.end);
        while !self.input.is_char_boundary(index) {
            index += 1;
        }
        self.index = index;
    }
}
