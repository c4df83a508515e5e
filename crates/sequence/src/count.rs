use tracing::debug;

use crate::DEFAULT_TERM_COUNT;

/// How many terms to print. Never negative: any requested count below one becomes zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermCount(usize);

impl TermCount {
    pub fn new(count: usize) -> Self {
        TermCount(count)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Clamp a signed request to a count, mapping zero and negatives to an empty sequence.
    pub fn from_signed(requested: i64) -> Self {
        TermCount(usize::try_from(requested).unwrap_or(0))
    }

    /// Parse a decimal count with an optional `+`/`-` sign.
    ///
    /// Anything that does not parse (stray whitespace, trailing garbage, out of `i64`
    /// range) is treated as zero rather than reported.
    pub fn parse_lenient(arg: &str) -> Self {
        match arg.parse::<i64>() {
            Ok(n) => Self::from_signed(n),
            Err(e) => {
                debug!("ignoring unparsable term count {:?}: {}", arg, e);
                TermCount(0)
            }
        }
    }

    /// Resolve the optional command-line argument, falling back to [`DEFAULT_TERM_COUNT`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(s) => Self::parse_lenient(s),
            None => TermCount(DEFAULT_TERM_COUNT),
        }
    }
}

impl Default for TermCount {
    fn default() -> Self {
        TermCount(DEFAULT_TERM_COUNT)
    }
}
