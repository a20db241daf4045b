/*!
Accumulation and rendering of benchmark results.

A [`Report`] collects one row of results per pattern, in the order the
patterns were benchmarked, while keeping running totals per engine. It can
print the totals as an aligned table and write every row as a
semicolon-delimited CSV file.

In combined mode, where all patterns are matched together, every engine
produces a single result. [`CombinedReport`] collects and renders those.
*/

use std::io::{self, Write};

use crate::{error::Error, result::EngineResult};

/// Per-engine sums over every pattern in a report.
///
/// The standard deviation is deliberately absent: it only makes sense for a
/// single pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    /// Sum of preparation times, in milliseconds.
    pub pre_time: f64,
    /// Sum of mean match times, in milliseconds.
    pub time: f64,
    /// Sum of match counts.
    pub matches: u64,
    /// Sum of rank points.
    pub score: u64,
}

impl Totals {
    fn add(&mut self, res: &EngineResult) {
        self.pre_time += res.pre_time;
        self.time += res.time;
        self.matches += res.matches;
        self.score += u64::from(res.score);
    }
}

/// The results of every engine for one pattern.
#[derive(Clone, Debug)]
pub struct PatternRow {
    /// The pattern, as benchmarked.
    pub pattern: String,
    /// One result per engine, in report order.
    pub results: Vec<EngineResult>,
}

/// Results for a whole pattern set, benchmarked one pattern at a time.
#[derive(Clone, Debug)]
pub struct Report {
    engines: Vec<String>,
    rows: Vec<PatternRow>,
    totals: Vec<Totals>,
}

impl Report {
    /// Create an empty report for the given engines. Every row added must
    /// have exactly one result per engine, in this order.
    pub fn new<I, S>(engines: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let engines: Vec<String> =
            engines.into_iter().map(Into::into).collect();
        let totals = vec![Totals::default(); engines.len()];
        Report { engines, rows: vec![], totals }
    }

    /// Add the (scored) results for the next pattern.
    ///
    /// # Errors
    ///
    /// This returns an `InvalidInput` error if the row doesn't have one
    /// result per engine.
    pub fn add(
        &mut self,
        pattern: &str,
        results: Vec<EngineResult>,
    ) -> Result<(), Error> {
        if results.len() != self.engines.len() {
            return Err(Error::invalid_input(format!(
                "expected {} engine results for pattern {:?}, but got {}",
                self.engines.len(),
                pattern,
                results.len(),
            )));
        }
        for (total, res) in self.totals.iter_mut().zip(results.iter()) {
            total.add(res);
        }
        self.rows.push(PatternRow { pattern: pattern.to_string(), results });
        Ok(())
    }

    /// The engine names, in column order.
    pub fn engines(&self) -> &[String] {
        &self.engines
    }

    /// All rows, in the order they were added.
    pub fn rows(&self) -> &[PatternRow] {
        &self.rows
    }

    /// The running totals, one per engine.
    pub fn totals(&self) -> &[Totals] {
        &self.totals
    }

    /// Print the per-engine totals as an aligned table.
    pub fn write_table<W: io::Write>(&self, wtr: W) -> io::Result<()> {
        let mut wtr = tabwriter::TabWriter::new(wtr)
            .alignment(tabwriter::Alignment::Right);
        writeln!(
            wtr,
            "engine\tpre time [ms]\tmatch time [ms]\tmatches\tscore\t",
        )?;
        for (name, total) in self.engines.iter().zip(self.totals.iter()) {
            writeln!(
                wtr,
                "{}\t{:.4}\t{:.1}\t{}\t{}\t",
                name, total.pre_time, total.time, total.matches, total.score,
            )?;
        }
        wtr.flush()
    }

    /// Write every row as semicolon-delimited CSV.
    ///
    /// The header names each engine's pre-time, match time, match count and
    /// score columns, in that order of groups. Every field, including the
    /// last, is terminated by a semicolon.
    pub fn write_csv<W: io::Write>(&self, mut wtr: W) -> io::Result<()> {
        write!(wtr, "id;regex;")?;
        for name in self.engines.iter() {
            write!(wtr, "{name} (pre) [ms];")?;
        }
        for name in self.engines.iter() {
            write!(wtr, "{name} (match) [ms];")?;
        }
        for name in self.engines.iter() {
            write!(wtr, "{name} [matches];")?;
        }
        for name in self.engines.iter() {
            write!(wtr, "{name} [sp];")?;
        }
        writeln!(wtr)?;

        for (i, row) in self.rows.iter().enumerate() {
            write!(wtr, "{};{};", i + 1, row.pattern)?;
            for res in row.results.iter() {
                write!(wtr, "{:7.4};", res.pre_time)?;
            }
            for res in row.results.iter() {
                write!(wtr, "{:7.1};", res.time)?;
            }
            for res in row.results.iter() {
                write!(wtr, "{};", res.matches)?;
            }
            for res in row.results.iter() {
                write!(wtr, "{};", res.score)?;
            }
            writeln!(wtr)?;
        }
        wtr.flush()
    }
}

/// The results of matching a whole pattern set at once, one per engine.
#[derive(Clone, Debug)]
pub struct CombinedReport {
    patterns: usize,
    engines: Vec<String>,
    results: Vec<EngineResult>,
}

impl CombinedReport {
    /// Create an empty report for a set of `patterns` patterns.
    pub fn new(patterns: usize) -> CombinedReport {
        CombinedReport { patterns, engines: vec![], results: vec![] }
    }

    /// Add the result of one engine.
    pub fn add(&mut self, engine: &str, result: EngineResult) {
        self.engines.push(engine.to_string());
        self.results.push(result);
    }

    /// The number of patterns that were combined.
    pub fn patterns(&self) -> usize {
        self.patterns
    }

    /// The engine names, in the order they were added.
    pub fn engines(&self) -> &[String] {
        &self.engines
    }

    /// One result per engine, matching [`CombinedReport::engines`].
    pub fn results(&self) -> &[EngineResult] {
        &self.results
    }

    /// Print one line per engine as an aligned table.
    pub fn write_table<W: io::Write>(&self, wtr: W) -> io::Result<()> {
        let mut wtr = tabwriter::TabWriter::new(wtr)
            .alignment(tabwriter::Alignment::Right);
        writeln!(wtr, "engine\tpre time [ms]\tmatch time [ms]\tmatches\t")?;
        for (name, res) in self.engines.iter().zip(self.results.iter()) {
            writeln!(
                wtr,
                "{}-multi\t{:.4}\t{:.1}\t{}\t",
                name, res.pre_time, res.time, res.matches,
            )?;
        }
        wtr.flush()
    }

    /// Write the results as a semicolon-delimited CSV with one data row.
    ///
    /// Engines are suffixed with `-multi` in the header. The `id` column
    /// holds the number of patterns, and since there is no single pattern to
    /// show, the `regex` column holds `(combined)`.
    pub fn write_csv<W: io::Write>(&self, mut wtr: W) -> io::Result<()> {
        write!(wtr, "id;regex;")?;
        for name in self.engines.iter() {
            write!(wtr, "{name}-multi (pre) [ms];")?;
        }
        for name in self.engines.iter() {
            write!(wtr, "{name}-multi (match) [ms];")?;
        }
        for name in self.engines.iter() {
            write!(wtr, "{name}-multi [matches];")?;
        }
        writeln!(wtr)?;

        write!(wtr, "{};(combined);", self.patterns)?;
        for res in self.results.iter() {
            write!(wtr, "{:7.4};", res.pre_time)?;
        }
        for res in self.results.iter() {
            write!(wtr, "{:7.1};", res.time)?;
        }
        for res in self.results.iter() {
            write!(wtr, "{};", res.matches)?;
        }
        writeln!(wtr)?;
        wtr.flush()
    }
}
