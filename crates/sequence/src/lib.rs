//! Fibonacci term generation and the single-line rendering printed by the `fibonacci` binary.

mod count;
mod errors;
mod render;
mod terms;

pub use count::TermCount;
pub use errors::SequenceError;
pub use render::{render_line, write_sequence};
pub use terms::{first_terms, FibonacciTerms};

/// Number of terms printed when no count is given on the command line.
pub const DEFAULT_TERM_COUNT: usize = 15;

/// Placed between consecutive terms on the output line.
pub const TERM_SEPARATOR: &str = ", ";
