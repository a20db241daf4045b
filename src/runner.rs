/*!
Drives engines through repeated, timed scans of a haystack.

A [`Runner`] compiles a pattern once, timing the compilation as the
engine's "pre-time", and then scans the haystack a fixed number of times.
Each scan is one timing sample. The samples are summarized by
[`Summary::compute`](crate::stats::Summary::compute), and the match count of
the final scan is kept.

Everything is sequential: one engine is done with a pattern before the next
one starts, and nothing is ever timed concurrently.
*/

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::{
    engine::{Engine, Registry, Scanner},
    error::Error,
    result::EngineResult,
    stats::Summary,
};

/// The default number of timed scans per pattern and engine.
pub const DEFAULT_REPEAT: u32 = 5;

/// A source of elapsed times.
///
/// The runner measures everything through this trait, which makes it
/// possible to substitute a scripted clock in tests.
pub trait Stopwatch {
    /// Run the given closure and return its result along with how long it
    /// took.
    fn time<T>(&mut self, run: impl FnOnce() -> T) -> (T, Duration);
}

/// A stopwatch backed by the monotonic system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wall(());

impl Stopwatch for Wall {
    fn time<T>(&mut self, run: impl FnOnce() -> T) -> (T, Duration) {
        let start = Instant::now();
        let t = run();
        (t, start.elapsed())
    }
}

/// Benchmarks engines by repeatedly scanning a haystack.
#[derive(Clone, Debug)]
pub struct Runner<S = Wall> {
    repeat: u32,
    stopwatch: S,
}

impl Runner<Wall> {
    /// Create a runner that scans `repeat` times using the system clock.
    pub fn new(repeat: u32) -> Runner<Wall> {
        Runner::with_stopwatch(repeat, Wall::default())
    }
}

impl Default for Runner<Wall> {
    fn default() -> Runner<Wall> {
        Runner::new(DEFAULT_REPEAT)
    }
}

impl<S: Stopwatch> Runner<S> {
    /// Create a runner that measures time with the given stopwatch.
    pub fn with_stopwatch(repeat: u32, stopwatch: S) -> Runner<S> {
        Runner { repeat, stopwatch }
    }

    /// The number of timed scans performed per benchmark.
    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Benchmark a single pattern with a single engine.
    ///
    /// # Errors
    ///
    /// This returns an `InvalidInput` error when the repeat count is zero.
    /// A compile or scan failure is returned with the corresponding error
    /// kind. In every case, anything the engine allocated has been released
    /// by the time this returns.
    pub fn run(
        &mut self,
        engine: &dyn Engine,
        pattern: &str,
        haystack: &[u8],
    ) -> Result<EngineResult, Error> {
        self.check_repeat()?;
        debug!("{}: compiling {:?}", engine.name(), pattern);
        let (scanner, pre_time) =
            self.stopwatch.time(|| engine.compile(pattern));
        self.scan_repeatedly(engine.name(), scanner?, pre_time, haystack)
    }

    /// Benchmark all patterns compiled together into one matcher.
    ///
    /// # Errors
    ///
    /// In addition to the errors returned by [`Runner::run`], this returns an
    /// `InvalidInput` error when there are no patterns or when the engine
    /// does not support compiling many patterns at once.
    pub fn run_combined(
        &mut self,
        engine: &dyn Engine,
        patterns: &[&str],
        haystack: &[u8],
    ) -> Result<EngineResult, Error> {
        self.check_repeat()?;
        if patterns.is_empty() {
            return Err(Error::invalid_input("no patterns to combine"));
        }
        if !engine.supports_multi() {
            return Err(Error::invalid_input(format!(
                "{} cannot compile many patterns into one matcher",
                engine.name(),
            )));
        }
        debug!("{}: compiling {} patterns", engine.name(), patterns.len());
        let (scanner, pre_time) =
            self.stopwatch.time(|| engine.compile_many(patterns));
        self.scan_repeatedly(engine.name(), scanner?, pre_time, haystack)
    }

    /// Benchmark a single pattern with every engine in the registry.
    ///
    /// The returned row has one result per engine, in registry order. An
    /// engine that fails to compile or scan gets a zeroed result, so that one
    /// misbehaving engine doesn't stop the others from being measured. The
    /// `on_result` callback is invoked after each engine is done, with
    /// `None` for engines that failed.
    ///
    /// # Errors
    ///
    /// Only errors that aren't specific to an engine are returned, e.g., a
    /// repeat count of zero.
    pub fn run_all(
        &mut self,
        registry: &Registry,
        pattern: &str,
        haystack: &[u8],
        mut on_result: impl FnMut(&str, Option<&EngineResult>),
    ) -> Result<Vec<EngineResult>, Error> {
        self.check_repeat()?;
        let mut row = Vec::with_capacity(registry.len());
        for engine in registry.iter() {
            match self.run(engine, pattern, haystack) {
                Ok(res) => {
                    on_result(engine.name(), Some(&res));
                    row.push(res);
                }
                Err(err) if err.is_engine_failure() => {
                    warn!("{err} (pattern: {pattern:?})");
                    on_result(engine.name(), None);
                    row.push(EngineResult::failed());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(row)
    }

    fn check_repeat(&self) -> Result<(), Error> {
        if self.repeat == 0 {
            return Err(Error::invalid_input(
                "the repeat count must be at least 1",
            ));
        }
        Ok(())
    }

    /// Scans the haystack `repeat` times. The scanner is consumed and
    /// dropped before returning, whether scanning succeeded or not.
    fn scan_repeatedly(
        &mut self,
        name: &str,
        mut scanner: Box<dyn Scanner>,
        pre_time: Duration,
        haystack: &[u8],
    ) -> Result<EngineResult, Error> {
        let mut samples = Vec::with_capacity(self.repeat as usize);
        let mut matches = 0;
        for i in 0..self.repeat {
            let (found, elapsed) =
                self.stopwatch.time(|| scanner.count(haystack));
            matches = found?;
            samples.push(millis(elapsed));
            debug!("{name}: scan {i} found {matches} matches in {elapsed:?}");
        }
        let summary = Summary::compute(millis(pre_time), &samples)?;
        Ok(EngineResult::new(summary, matches))
    }
}

fn millis(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use super::*;
    use crate::error::ErrorKind;

    /// A stopwatch that reports a scripted sequence of elapsed times.
    #[derive(Debug)]
    struct Scripted(VecDeque<Duration>);

    impl Scripted {
        fn millis(times: &[u64]) -> Scripted {
            Scripted(times.iter().map(|&t| Duration::from_millis(t)).collect())
        }
    }

    impl Stopwatch for Scripted {
        fn time<T>(&mut self, run: impl FnOnce() -> T) -> (T, Duration) {
            (run(), self.0.pop_front().unwrap_or_default())
        }
    }

    /// An engine whose scanners report a scripted sequence of match counts
    /// and which records when its scanners are dropped.
    #[derive(Debug, Default)]
    struct Fake {
        counts: Vec<u64>,
        fail_compile: bool,
        fail_scan_at: Option<usize>,
        dropped: Rc<RefCell<usize>>,
    }

    struct FakeScanner {
        counts: VecDeque<u64>,
        fail_scan_at: Option<usize>,
        scans: usize,
        dropped: Rc<RefCell<usize>>,
    }

    impl Engine for Fake {
        fn name(&self) -> &str {
            "fake"
        }

        fn compile(&self, _: &str) -> Result<Box<dyn Scanner>, Error> {
            if self.fail_compile {
                return Err(Error::compile("fake", "nope"));
            }
            Ok(Box::new(FakeScanner {
                counts: self.counts.iter().copied().collect(),
                fail_scan_at: self.fail_scan_at,
                scans: 0,
                dropped: Rc::clone(&self.dropped),
            }))
        }

        fn supports_multi(&self) -> bool {
            true
        }

        fn compile_many(
            &self,
            patterns: &[&str],
        ) -> Result<Box<dyn Scanner>, Error> {
            self.compile(patterns[0])
        }
    }

    impl Scanner for FakeScanner {
        fn count(&mut self, _: &[u8]) -> Result<u64, Error> {
            if Some(self.scans) == self.fail_scan_at {
                return Err(Error::scan("fake", "boom"));
            }
            self.scans += 1;
            Ok(self.counts.pop_front().unwrap_or(0))
        }
    }

    impl Drop for FakeScanner {
        fn drop(&mut self) {
            *self.dropped.borrow_mut() += 1;
        }
    }

    #[test]
    fn steady_state() {
        let engine = Fake { counts: vec![2, 2, 2], ..Fake::default() };
        let mut runner =
            Runner::with_stopwatch(3, Scripted::millis(&[1, 5, 5, 5]));
        let res = runner.run(&engine, "a", b"aa").unwrap();
        assert_eq!(2, res.matches);
        assert_eq!(1.0, res.pre_time);
        assert_eq!(5.0, res.time);
        assert_eq!(0.0, res.time_sd);
        assert_eq!(0, res.score);
        assert_eq!(1, *engine.dropped.borrow());
    }

    #[test]
    fn last_scan_wins() {
        let engine = Fake { counts: vec![1, 2, 3], ..Fake::default() };
        let mut runner =
            Runner::with_stopwatch(3, Scripted::millis(&[0, 1, 2, 3]));
        let res = runner.run(&engine, "a", b"").unwrap();
        assert_eq!(3, res.matches);
        assert_eq!(2.0, res.time);
        assert_eq!(1.0, res.time_sd);
    }

    #[test]
    fn zero_repeat() {
        let engine = Fake::default();
        let mut runner = Runner::with_stopwatch(0, Scripted::millis(&[]));
        let err = runner.run(&engine, "a", b"").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
        // Nothing was compiled.
        assert_eq!(0, *engine.dropped.borrow());
    }

    #[test]
    fn compile_failure() {
        let engine = Fake { fail_compile: true, ..Fake::default() };
        let mut runner = Runner::new(2);
        let err = runner.run(&engine, "a", b"").unwrap_err();
        assert_eq!(ErrorKind::Compile, err.kind());
    }

    #[test]
    fn scan_failure_releases_scanner() {
        let engine = Fake {
            counts: vec![1, 1, 1],
            fail_scan_at: Some(1),
            ..Fake::default()
        };
        let mut runner = Runner::new(3);
        let err = runner.run(&engine, "a", b"").unwrap_err();
        assert_eq!(ErrorKind::Scan, err.kind());
        assert_eq!(1, *engine.dropped.borrow());
    }

    #[test]
    fn run_all_zero_fills_failures() {
        let mut registry = Registry::empty();
        registry.register(Fake { counts: vec![4, 4], ..Fake::default() });
        registry.register(Fake { fail_compile: true, ..Fake::default() });
        registry.register(Fake {
            counts: vec![9, 9],
            fail_scan_at: Some(0),
            ..Fake::default()
        });
        let mut runner =
            Runner::with_stopwatch(2, Scripted::millis(&[1, 3, 3, 0, 0]));
        let mut seen = vec![];
        let row = runner
            .run_all(&registry, "a", b"", |_, res| seen.push(res.is_some()))
            .unwrap();
        assert_eq!(vec![true, false, false], seen);
        assert_eq!(3, row.len());
        assert_eq!(4, row[0].matches);
        assert_eq!(3.0, row[0].time);
        assert_eq!(EngineResult::failed(), row[1]);
        assert_eq!(EngineResult::failed(), row[2]);
    }

    #[test]
    fn run_all_zero_repeat_is_fatal() {
        let mut registry = Registry::empty();
        registry.register(Fake::default());
        let mut runner = Runner::new(0);
        let err = runner.run_all(&registry, "a", b"", |_, _| {}).unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
    }

    #[test]
    fn combined() {
        let engine = Fake { counts: vec![5, 6], ..Fake::default() };
        let mut runner =
            Runner::with_stopwatch(2, Scripted::millis(&[2, 4, 6]));
        let res = runner.run_combined(&engine, &["a", "b"], b"").unwrap();
        assert_eq!(6, res.matches);
        assert_eq!(2.0, res.pre_time);
        assert_eq!(5.0, res.time);
    }

    #[test]
    fn combined_needs_patterns_and_support() {
        let mut runner = Runner::new(1);
        let err =
            runner.run_combined(&Fake::default(), &[], b"").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());

        let lite = crate::engine::RustLite::default();
        let err = runner.run_combined(&lite, &["a"], b"").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
    }

    #[test]
    fn wall_clock() {
        let engine = crate::engine::RustRegex::default();
        let mut runner = Runner::new(3);
        let res = runner.run(&engine, "a", b"banana").unwrap();
        assert_eq!(3, res.matches);
        assert!(res.time >= 0.0);
        assert!(res.pre_time >= 0.0);
    }
}
