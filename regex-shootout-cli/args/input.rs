use std::path::PathBuf;

use {
    anyhow::Context,
    lexopt::{Arg, Parser},
    regex_shootout::input,
};

use crate::args::{self, Configurable, Usage};

/// Where the corpus and the patterns come from, and how patterns are
/// interpreted.
#[derive(Debug)]
pub struct Config {
    corpus: Option<PathBuf>,
    patterns: Option<PathBuf>,
    fixed_strings: bool,
    max_patterns: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            corpus: None,
            patterns: None,
            fixed_strings: false,
            max_patterns: input::DEFAULT_MAX_PATTERNS,
        }
    }
}

impl Config {
    /// Read the corpus named by `-f/--file`.
    pub fn corpus(&self) -> anyhow::Result<Vec<u8>> {
        let Some(ref path) = self.corpus else {
            anyhow::bail!("a corpus is required via the -f/--file flag")
        };
        Ok(input::read_corpus(path)?)
    }

    /// Read the patterns named by `-i/--input`, escaping them when
    /// `-F/--fixed-strings` was given.
    ///
    /// Going over the `--max-patterns` limit only logs a warning.
    pub fn patterns(&self) -> anyhow::Result<Vec<String>> {
        let Some(ref path) = self.patterns else {
            anyhow::bail!("a pattern list is required via the -i/--input flag")
        };
        let mut pats = input::read_patterns(path)?;
        if self.fixed_strings {
            pats = pats.iter().map(|p| regex_syntax::escape(p)).collect();
        }
        input::exceeds_soft_limit(pats.len(), self.max_patterns);
        Ok(pats)
    }
}

impl Configurable for Config {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('f') | Arg::Long("file") => {
                let path = p.value().context("-f/--file")?;
                self.corpus = Some(PathBuf::from(path));
            }
            Arg::Short('i') | Arg::Long("input") => {
                let path = p.value().context("-i/--input")?;
                self.patterns = Some(PathBuf::from(path));
            }
            Arg::Short('F') | Arg::Long("fixed-strings") => {
                self.fixed_strings = true;
            }
            Arg::Long("max-patterns") => {
                self.max_patterns = args::parse(p, "--max-patterns")?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[
            Usage::new(
                "-f, --file <path>",
                "The corpus to search.",
                r#"
The file containing the corpus that every engine searches. It is read in full
before benchmarking starts, and every carriage return in it is replaced with a
line feed. An empty corpus is an error.
"#,
            ),
            Usage::new(
                "-i, --input <path>",
                "A file with one pattern per line.",
                r#"
The file containing the patterns to benchmark, one per line. Both line feeds
and carriage returns end a line. Empty lines are skipped, as are lines whose
first character is '#'. Patterns must be valid UTF-8.
"#,
            ),
            Usage::new(
                "-F, --fixed-strings",
                "Match every pattern literally.",
                r#"
When set, every pattern is escaped so that all of its characters are matched
literally.
"#,
            ),
            Usage::new(
                "--max-patterns <count>",
                "Warn above this many patterns (default: 1000).",
                r#"
A soft limit on the number of patterns. When the pattern list has more
patterns than this, a warning is logged, but every pattern is still
benchmarked.

The default is 1000.
"#,
            ),
        ];
        USAGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "regex-shootout-cli-{}-{}",
            std::process::id(),
            name,
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn fixed_strings_escape_every_pattern() {
        let path = pattern_file("fixed.txt", "a.b\n# skip\n(x)+\n");
        let config = Config {
            patterns: Some(path.clone()),
            fixed_strings: true,
            ..Config::default()
        };
        let got = config.patterns().unwrap();
        assert_eq!(vec![r"a\.b", r"\(x\)\+"], got);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn max_patterns_only_warns() {
        let path = pattern_file("many.txt", "a\nb\nc\n");
        let config = Config {
            patterns: Some(path.clone()),
            max_patterns: 1,
            ..Config::default()
        };
        assert_eq!(vec!["a", "b", "c"], config.patterns().unwrap());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_inputs() {
        let config = Config::default();
        assert!(config.corpus().is_err());
        assert!(config.patterns().is_err());
    }
}
