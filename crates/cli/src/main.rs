use std::{
    ffi::OsString,
    io::{self, BufWriter, Write},
};

use anyhow::anyhow;
use clap::Parser;
use fibonacci_sequence::{write_sequence, SequenceError, TermCount};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version)]
/// Print the first COUNT Fibonacci numbers on a single comma-separated line.
struct Opts {
    /// Number of terms to print (default 15). Values that are not integers print an empty line.
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    count: Option<OsString>,

    // only the first argument is read; the rest are accepted and dropped
    #[arg(value_name = "IGNORED", hide = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

impl Opts {
    /// Parse argv. A leading `--` is taken as the count itself rather than clap's
    /// end-of-options marker, so it prints an empty line like any other non-integer.
    fn from_args_os<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if let [_, first, rest @ ..] = args.as_slice() {
            if first == "--" {
                return Ok(Opts {
                    count: Some(first.clone()),
                    ignored: rest.to_vec(),
                });
            }
        }
        Opts::try_parse_from(args)
    }
}

fn run<W: Write>(opts: &Opts, out: &mut W) -> Result<(), SequenceError> {
    let count = match opts.count.as_deref() {
        None => TermCount::from_arg(None),
        Some(raw) => match raw.to_str() {
            Some(s) => TermCount::parse_lenient(s),
            None => {
                debug!("ignoring non-UTF-8 term count {:?}", raw);
                TermCount::new(0)
            }
        },
    };
    debug!("printing {} terms (arg: {:?})", count.get(), opts.count);
    if !opts.ignored.is_empty() {
        debug!("ignoring extra arguments: {:?}", opts.ignored);
    }
    write_sequence(out, count)
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let opts = Opts::from_args_os(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // output failures (e.g. a closed pipe) never change the exit status
    if let Err(e) = run(&opts, &mut out) {
        warn!("{}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;

    fn run_with(args: &[&str]) -> String {
        let opts = Opts::from_args_os(args).unwrap();
        let mut buf = Vec::new();
        run(&opts, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn no_args_prints_default_count() {
        assert_eq!(
            run_with(&["fibonacci"]),
            "1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610\n"
        );
    }

    #[test]
    fn count_arg_is_positional() {
        let opts = Opts::from_args_os(["fibonacci", "7"]).unwrap();
        assert_eq!(opts.count.as_deref(), Some(OsStr::new("7")));
        assert_eq!(run_with(&["fibonacci", "7"]), "1, 1, 2, 3, 5, 8, 13\n");
    }

    #[test]
    fn negative_count_is_accepted_and_prints_empty_line() {
        let opts = Opts::from_args_os(["fibonacci", "-5"]).unwrap();
        assert_eq!(opts.count.as_deref(), Some(OsStr::new("-5")));
        assert_eq!(run_with(&["fibonacci", "-5"]), "\n");
    }

    #[test]
    fn non_numeric_count_prints_empty_line() {
        assert_eq!(run_with(&["fibonacci", "ten"]), "\n");
    }

    #[test]
    fn extra_args_are_ignored() {
        let opts = Opts::from_args_os(["fibonacci", "3", "9", "x"]).unwrap();
        assert_eq!(opts.ignored, vec![OsString::from("9"), OsString::from("x")]);
        assert_eq!(run_with(&["fibonacci", "3", "9", "x"]), "1, 1, 2\n");
    }

    #[test]
    fn leading_double_dash_is_the_count() {
        let opts = Opts::from_args_os(["fibonacci", "--", "5"]).unwrap();
        assert_eq!(opts.count.as_deref(), Some(OsStr::new("--")));
        assert_eq!(opts.ignored, vec![OsString::from("5")]);
        assert_eq!(run_with(&["fibonacci", "--"]), "\n");
        assert_eq!(run_with(&["fibonacci", "--", "5"]), "\n");
    }

    #[test]
    fn trailing_double_dash_keeps_first_count() {
        assert_eq!(run_with(&["fibonacci", "3", "--"]), "1, 1, 2\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_count_prints_empty_line() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"\xff\xfe");
        let opts = Opts::from_args_os([OsStr::new("fibonacci"), raw, raw]).unwrap();
        assert_eq!(opts.count.as_deref(), Some(raw));
        let mut buf = Vec::new();
        run(&opts, &mut buf).unwrap();
        assert_eq!(buf, b"\n");
    }
}
