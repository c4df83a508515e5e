use std::io::Write;

use tracing::debug;

use crate::{first_terms, SequenceError, TermCount, TERM_SEPARATOR};

/// Write the first `count` terms to `out` as one line: `1, 1, 2, 3` followed by `\n`.
///
/// Terms are streamed one at a time; wrap `out` in a `BufWriter` for unbuffered sinks.
/// A zero count still writes the newline.
pub fn write_sequence<W: Write>(out: &mut W, count: TermCount) -> Result<(), SequenceError> {
    debug!("writing {} terms", count.get());
    write_terms(out, count)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// The same line [`write_sequence`] emits, without the trailing newline.
pub fn render_line(count: TermCount) -> String {
    first_terms(count)
        .map(|term| term.to_string())
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
}

fn write_terms<W: Write>(out: &mut W, count: TermCount) -> Result<(), SequenceError> {
    for (i, term) in first_terms(count).enumerate() {
        if i > 0 {
            out.write_all(TERM_SEPARATOR.as_bytes())?;
        }
        write!(out, "{}", term)?;
    }
    Ok(())
}
