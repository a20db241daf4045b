use crate::stats::Summary;

/// The outcome of benchmarking one engine on one pattern.
///
/// Times are in milliseconds. An engine that failed to compile or scan is
/// recorded with every field zeroed, which is what `Default` gives you.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineResult {
    /// Rank points awarded by [`score`](crate::score::score). Zero until
    /// scored.
    pub score: u32,
    /// The time it took to compile the pattern.
    pub pre_time: f64,
    /// The mean time of one scan over the haystack.
    pub time: f64,
    /// The sample standard deviation of the scan times.
    pub time_sd: f64,
    /// The number of matches reported by the final scan.
    pub matches: u64,
}

impl EngineResult {
    /// Build an unscored result from timing statistics and a match count.
    pub fn new(summary: Summary, matches: u64) -> EngineResult {
        EngineResult {
            score: 0,
            pre_time: summary.pre_time,
            time: summary.mean,
            time_sd: summary.sd,
            matches,
        }
    }

    /// The result recorded for an engine that failed.
    pub fn failed() -> EngineResult {
        EngineResult::default()
    }

    /// The standard deviation as a percentage of the mean scan time.
    ///
    /// This is zero when the mean is zero.
    pub fn relative_sd(&self) -> f64 {
        if self.time == 0.0 {
            0.0
        } else {
            (self.time_sd / self.time) * 100.0
        }
    }

    /// Returns a value that displays this result on one line, prefixed with
    /// the given engine name.
    pub fn line<'a>(&'a self, engine: &'a str) -> ResultLine<'a> {
        ResultLine { engine, result: self }
    }
}

/// A one line rendering of a single engine's result.
///
/// For example:
///
/// ```text
/// [rust_regex] pre_time:  0.2130 ms, time:     1.5 ms (+/-  3.2 %), matches:      811
/// ```
#[derive(Debug)]
pub struct ResultLine<'a> {
    engine: &'a str,
    result: &'a EngineResult,
}

impl<'a> std::fmt::Display for ResultLine<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:>10}] pre_time: {:7.4} ms, time: {:7.1} ms (+/- {:4.1} %), \
             matches: {:8}",
            self.engine,
            self.result.pre_time,
            self.result.time,
            self.result.relative_sd(),
            self.result.matches,
        )
    }
}
