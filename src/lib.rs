/*!
A harness for benchmarking regex engines against each other.

This crate doesn't implement any regex engine. It runs many existing ones
(Rust's `regex`, `regex-lite` and `regex-automata`, plus optionally PCRE2,
Oniguruma, Hyperscan and `regress`) over the same corpus and pattern set, and
reports how they compare.

For every pattern, each engine compiles the pattern once and then scans the
whole corpus a fixed number of times. The compilation time is reported as
the engine's "pre-time", and the scans yield the mean and standard deviation
of the scan time, along with a match count. The fastest engines for each
pattern are then awarded rank points, and everything is summed up over the
whole pattern set.

# Example

```no_run
use regex_shootout::{input, report::Report, score, Registry, Runner};

# fn example() -> Result<(), Box<dyn std::error::Error>> {
let patterns = input::read_patterns("regexes.txt")?;
let corpus = input::read_corpus("corpus.txt")?;
let registry = Registry::available();
let mut runner = Runner::new(5);
let mut report = Report::new(registry.names());
for pattern in patterns.iter() {
    let mut row = runner.run_all(&registry, pattern, &corpus, |_, _| {})?;
    score::score(&mut row);
    report.add(pattern, row)?;
}
report.write_table(std::io::stdout())?;
# Ok(()) }
```

# Crate features

None of the following are enabled by default, since each one requires a C
library to be available at build time.

* **re-pcre2** - Adds the `pcre` and `pcre-jit` engines.
* **re-onig** - Adds the `onig` engine.
* **re-hyperscan** - Adds the `hscan` engine, which also supports matching
  all patterns at once.
* **re-regress** - Adds the `rust_regrs` engine.
*/

#![deny(missing_debug_implementations)]

pub use crate::{
    engine::{Engine, Registry, Scanner},
    error::{Error, ErrorKind},
    result::{EngineResult, ResultLine},
    runner::Runner,
    stats::Summary,
};

pub mod engine;
mod error;
pub mod input;
pub mod report;
mod result;
pub mod runner;
pub mod score;
mod stats;
