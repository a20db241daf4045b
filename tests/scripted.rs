use std::{collections::VecDeque, time::Duration};

use regex_shootout::{
    report::Report, runner::Stopwatch, score, Engine, Error, Registry,
    Runner, Scanner,
};

/// A stopwatch that plays back a fixed list of elapsed times, in
/// milliseconds.
#[derive(Debug)]
struct Playback(VecDeque<u64>);

impl Stopwatch for Playback {
    fn time<T>(&mut self, run: impl FnOnce() -> T) -> (T, Duration) {
        let ms = self.0.pop_front().unwrap_or(0);
        (run(), Duration::from_millis(ms))
    }
}

/// An engine that always finds the same number of matches, unless it is
/// given the pattern `!`, which it refuses to compile.
#[derive(Debug)]
struct Constant {
    name: &'static str,
    matches: u64,
}

struct ConstantScanner(u64);

impl Engine for Constant {
    fn name(&self) -> &str {
        self.name
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        if pattern == "!" {
            return Err(Error::engine_compile(self.name, "bad pattern"));
        }
        Ok(Box::new(ConstantScanner(self.matches)))
    }
}

impl Scanner for ConstantScanner {
    fn count(&mut self, _: &[u8]) -> Result<u64, Error> {
        Ok(self.0)
    }
}

fn registry(names: &[&'static str]) -> Registry {
    let mut reg = Registry::empty();
    for &name in names {
        reg.register(Constant { name, matches: 7 });
    }
    reg
}

#[test]
fn six_engines_are_ranked() {
    let reg = registry(&["a", "b", "c", "d", "e", "f"]);
    // One compile and one scan per engine.
    let times = [1, 10, 1, 10, 1, 20, 1, 30, 1, 40, 1, 50];
    let mut runner =
        Runner::with_stopwatch(1, Playback(times.into_iter().collect()));
    let mut row = runner.run_all(&reg, "x", b"", |_, _| {}).unwrap();
    score::score(&mut row);
    let scores: Vec<u32> = row.iter().map(|r| r.score).collect();
    assert_eq!(vec![5, 5, 4, 3, 2, 1], scores);
    assert!(row.iter().all(|r| r.matches == 7 && r.pre_time == 1.0));
}

#[test]
fn totals_over_patterns() {
    let reg = registry(&["fast", "slow"]);
    // Two scans per engine, for two patterns.
    let times = [
        2, 10, 10, 3, 20, 20, // first pattern
        2, 20, 20, 3, 10, 10, // second pattern
    ];
    let mut runner =
        Runner::with_stopwatch(2, Playback(times.into_iter().collect()));
    let mut report = Report::new(reg.names());
    for pattern in ["p1", "p2"] {
        let mut row = runner.run_all(&reg, pattern, b"", |_, _| {}).unwrap();
        score::score(&mut row);
        report.add(pattern, row).unwrap();
    }
    let totals = report.totals();
    assert_eq!(4.0, totals[0].pre_time);
    assert_eq!(30.0, totals[0].time);
    assert_eq!(14, totals[0].matches);
    assert_eq!(9, totals[0].score);
    assert_eq!(6.0, totals[1].pre_time);
    assert_eq!(30.0, totals[1].time);
    assert_eq!(9, totals[1].score);
}

#[test]
fn failed_engine_is_zeroed_and_unscored() {
    let reg = registry(&["a", "b"]);
    let mut runner = Runner::with_stopwatch(
        1,
        Playback([0, 4, 0, 4].into_iter().collect()),
    );
    let mut failed = vec![];
    let mut row = runner
        .run_all(&reg, "!", b"", |name, res| {
            if res.is_none() {
                failed.push(name.to_string());
            }
        })
        .unwrap();
    score::score(&mut row);
    assert_eq!(vec!["a", "b"], failed);
    assert!(row.iter().all(|r| r.time == 0.0 && r.score == 0));
}
