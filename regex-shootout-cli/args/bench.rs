use {
    lexopt::{Arg, Parser},
    regex_shootout::{runner, Registry},
};

use crate::args::{self, Configurable, Usage};

/// How patterns are handed to the engines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Every pattern is benchmarked on its own.
    #[default]
    Each,
    /// All patterns are compiled into one matcher.
    Combined,
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Mode> {
        Ok(match s {
            "0" | "each" => Mode::Each,
            "1" | "combined" => Mode::Combined,
            unk => anyhow::bail!("unrecognized mode '{}'", unk),
        })
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Mode::Each => write!(f, "each"),
            Mode::Combined => write!(f, "combined"),
        }
    }
}

/// What to benchmark and how.
#[derive(Debug)]
pub struct Config {
    pub repeat: u32,
    pub mode: Mode,
    pub list_engines: bool,
    engines: Vec<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            repeat: runner::DEFAULT_REPEAT,
            mode: Mode::default(),
            list_engines: false,
            engines: vec![],
        }
    }
}

impl Config {
    /// Returns the engines to benchmark, in the order they were given. When
    /// no `-e/--engine` flag was given, every available engine is returned.
    pub fn registry(&self) -> anyhow::Result<Registry> {
        let available = Registry::available();
        if self.engines.is_empty() {
            return Ok(available);
        }
        Ok(available.select(&self.engines)?)
    }

    /// Whether specific engines were asked for.
    pub fn explicit_engines(&self) -> bool {
        !self.engines.is_empty()
    }
}

impl Configurable for Config {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('n') | Arg::Long("repeat") => {
                let repeat: u32 = args::parse(p, "-n/--repeat")?;
                anyhow::ensure!(
                    repeat > 0,
                    "-n/--repeat must be at least 1",
                );
                self.repeat = repeat;
            }
            Arg::Short('m') | Arg::Long("mode") => {
                self.mode = args::parse(p, "-m/--mode")?;
            }
            Arg::Short('e') | Arg::Long("engine") => {
                let name: String = args::parse(p, "-e/--engine")?;
                self.engines.push(name);
            }
            Arg::Long("list-engines") => {
                self.list_engines = true;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[
            Usage::new(
                "-n, --repeat <count>",
                "Timed scans per pattern and engine (default: 5).",
                r#"
The number of times each engine scans the whole corpus for each pattern. Every
scan is timed, and the reported match time is the mean over all scans, along
with its standard deviation. Compilation happens once, before the first scan.

The default is 5. Zero is not allowed.
"#,
            ),
            Usage::new(
                "-m, --mode <mode>",
                "Benchmark patterns one at a time (0) or combined (1).",
                r#"
Selects how the patterns are benchmarked.

In mode '0' (or 'each'), which is the default, every pattern is benchmarked on
its own by every engine. The fastest engines for each pattern are awarded
points, and the totals are reported at the end.

In mode '1' (or 'combined'), all patterns are compiled together into a single
matcher, which then scans the corpus. Only engines that can match many
patterns at once take part. No points are awarded in this mode.
"#,
            ),
            Usage::new(
                "-e, --engine <name>",
                "Only benchmark this engine. May be repeated.",
                r#"
Restricts the benchmark to the named engine. This flag may be given multiple
times, and engines are reported in the order they were given. An unknown or
repeated engine name is an error.

By default, every engine available in this build is benchmarked. Use
--list-engines to see them.
"#,
            ),
            Usage::new(
                "--list-engines",
                "Print the available engines and exit.",
                r#"
Prints the name of every engine available in this build, one per line, and
exits. Engines marked with '*' can also match many patterns at once.
"#,
            ),
        ];
        USAGES
    }
}
