use std::{
    fmt::{Debug, Display, Write},
    str::FromStr,
};

use {
    anyhow::Context,
    lexopt::{Arg, Parser},
};

pub mod bench;
pub mod input;
pub mod output;

/// A group of related flags.
///
/// Each group gets a chance to claim every argument. A group that recognizes
/// an argument consumes it (and its value, if any) from the parser and
/// returns `true`.
pub trait Configurable: Debug {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool>;

    fn usage(&self) -> &[Usage];
}

/// What to do once all arguments have been parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    /// Carry on with the command.
    Continue,
    /// Help or version information was printed, so stop successfully.
    Exit,
}

/// Feed every argument to the given flag groups.
///
/// `-h` prints a short summary of every flag and `--help` prints the long
/// form, both substituted for `%options%` in the given usage text. `-v` and
/// `--version` print the version. In both cases, `Flow::Exit` is returned.
/// An argument that no group recognizes is an error.
pub fn configure(
    p: &mut Parser,
    usage: &str,
    targets: &mut [&mut dyn Configurable],
) -> anyhow::Result<Flow> {
    while let Some(arg) = p.next()? {
        match arg {
            Arg::Short('h') | Arg::Long("help") => {
                let mut usages: Vec<Usage> = targets
                    .iter()
                    .flat_map(|t| t.usage().iter().copied())
                    .collect();
                usages.sort_by_key(|u| u.sort_key());
                let options = if arg == Arg::Short('h') {
                    Usage::short(&usages)
                } else {
                    Usage::long(&usages)
                };
                println!("{}", usage.replace("%options%", &options).trim());
                return Ok(Flow::Exit);
            }
            Arg::Short('v') | Arg::Long("version") => {
                println!("regex-shootout {}", env!("CARGO_PKG_VERSION"));
                return Ok(Flow::Exit);
            }
            _ => {}
        }
        // The long flag name borrows from the parser, which the targets need
        // mutably, so give it a home of its own first.
        let long: Option<String> = match arg {
            Arg::Long(name) => Some(name.to_string()),
            _ => None,
        };
        let mut arg = match (long.as_deref(), arg) {
            (Some(name), _) => Arg::Long(name),
            (None, Arg::Short(c)) => Arg::Short(c),
            (None, Arg::Value(v)) => Arg::Value(v),
            (None, Arg::Long(_)) => unreachable!(),
        };
        let mut recognized = false;
        for t in targets.iter_mut() {
            if t.configure(p, &mut arg)? {
                recognized = true;
                break;
            }
        }
        if !recognized {
            return Err(arg.unexpected().into());
        }
    }
    Ok(Flow::Continue)
}

/// Parse the value of the current flag into `T`. Errors mention the flag.
pub fn parse<T>(p: &mut Parser, flag_name: &'static str) -> anyhow::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display + Debug + Send + Sync + 'static,
{
    let value = p.value().context(flag_name)?;
    let value = match value.into_string() {
        Ok(value) => value,
        Err(value) => {
            let err = lexopt::Error::NonUnicodeValue(value);
            return Err(anyhow::Error::from(err).context(flag_name));
        }
    };
    value.parse().map_err(|err| anyhow::Error::msg(err).context(flag_name))
}

/// The documentation of a single flag.
#[derive(Clone, Copy, Debug)]
pub struct Usage {
    /// How the flag is written, e.g., `-n, --repeat <count>`.
    pub format: &'static str,
    /// A one line description.
    pub short: &'static str,
    /// A longer description. Paragraphs are separated by blank lines and are
    /// re-wrapped when printed.
    pub long: &'static str,
}

impl Usage {
    pub const fn new(
        format: &'static str,
        short: &'static str,
        long: &'static str,
    ) -> Usage {
        Usage { format, short, long }
    }

    /// Flags are listed by their long name, ignoring any short alias.
    fn sort_key(&self) -> &'static str {
        match self.format.split_once(", ") {
            Some((_, long)) => long,
            None => self.format,
        }
    }

    /// Two aligned columns: the flag format and its short description.
    pub fn short(usages: &[Usage]) -> String {
        let width = usages.iter().map(|u| u.format.len()).max().unwrap_or(0);
        let mut out = String::new();
        for u in usages.iter() {
            // Writing to a String never fails.
            let _ = writeln!(out, "    {:width$}  {}", u.format, u.short);
        }
        out
    }

    /// Each flag format on its own line, followed by its long description
    /// wrapped and indented beneath it.
    pub fn long(usages: &[Usage]) -> String {
        let opts = textwrap::Options::new(79)
            .initial_indent("        ")
            .subsequent_indent("        ");
        let mut out = String::new();
        for (i, u) in usages.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "    {}", u.format);
            for (j, paragraph) in u.long.trim().split("\n\n").enumerate() {
                if j > 0 {
                    out.push('\n');
                }
                let paragraph = paragraph.replace('\n', " ");
                for line in textwrap::wrap(&paragraph, &opts) {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
        out
    }
}
