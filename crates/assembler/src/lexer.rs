//! Tokenizer for Monty source lines.

/// The tokens of one instruction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tokens<'a> {
    /// The opcode word, exactly as written.
    pub opcode: &'a str,
    /// The first word after the opcode, if any. Further words are ignored.
    pub argument: Option<&'a str>,
}

/// Tokenize a single line of source text.
///
/// Returns `None` for blank lines and for lines whose first word starts
/// with `#`.
pub(crate) fn tokenize_line(line: &str) -> Option<Tokens<'_>> {
    let mut words = line.split_whitespace();
    let opcode = words.next()?;
    if opcode.starts_with('#') {
        return None;
    }

    Some(Tokens {
        opcode,
        argument: words.next(),
    })
}
