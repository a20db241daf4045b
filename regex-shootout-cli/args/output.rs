use std::{fs::File, io, path::PathBuf};

use {
    anyhow::Context,
    lexopt::{Arg, Parser},
};

use crate::args::{Configurable, Usage};

/// Where results go and how much is printed along the way.
#[derive(Debug, Default)]
pub struct Config {
    pub quiet: bool,
    pub no_table: bool,
    csv: Option<PathBuf>,
}

impl Config {
    pub fn table(&self) -> bool {
        !self.no_table
    }

    /// Run the given closure with a buffered writer to the CSV file named by
    /// `-o/--output`, if one was given. The file is created or truncated.
    pub fn with_csv(
        &self,
        f: impl FnOnce(io::BufWriter<File>) -> io::Result<()>,
    ) -> anyhow::Result<()> {
        let Some(ref path) = self.csv else { return Ok(()) };
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        f(io::BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote results to {}", path.display());
        Ok(())
    }
}

impl Configurable for Config {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('o') | Arg::Long("output") => {
                let path = p.value().context("-o/--output")?;
                self.csv = Some(PathBuf::from(path));
            }
            Arg::Short('q') | Arg::Long("quiet") => {
                self.quiet = true;
            }
            Arg::Long("no-table") => {
                self.no_table = true;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[
            Usage::new(
                "-o, --output <path>",
                "Write results as CSV to this file.",
                r#"
Writes the results to the given file as semicolon-delimited CSV. Every field
is terminated by a semicolon.

In per-pattern mode, there is one row per pattern with every engine's
preparation time, match time, match count and score. In combined mode, there
is a single row with every engine's preparation time, match time and match
count.
"#,
            ),
            Usage::new(
                "-q, --quiet",
                "Don't print a line per engine and pattern.",
                r#"
Suppresses the progress output printed while benchmarking, i.e., every
pattern and the result of every engine for it. The totals are still printed.
"#,
            ),
            Usage::new(
                "--no-table",
                "Omit the table describing the run.",
                r#"
Before benchmarking starts, a table describing the run (corpus size, number of
patterns, engines and so on) is printed. Passing this flag suppresses it.
"#,
            ),
            Usage::new(
                "-v, --version",
                "Print the version and exit.",
                "Prints the version of this tool and exits.",
            ),
        ];
        USAGES
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn csv_is_written_to_the_output_path() {
        let path = std::env::temp_dir().join(format!(
            "regex-shootout-cli-{}-out.csv",
            std::process::id(),
        ));
        let config = Config { csv: Some(path.clone()), ..Config::default() };
        config.with_csv(|mut wtr| writeln!(wtr, "id;regex;")).unwrap();
        assert_eq!("id;regex;\n", std::fs::read_to_string(&path).unwrap());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn no_output_path_writes_nothing() {
        let config = Config::default();
        let mut called = false;
        config
            .with_csv(|_| {
                called = true;
                Ok(())
            })
            .unwrap();
        assert!(!called);
    }
}
