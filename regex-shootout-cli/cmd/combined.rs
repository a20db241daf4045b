use regex_shootout::{report::CombinedReport, Engine, Registry, Runner};

use crate::args;

/// Picks the engines that take part in combined mode.
///
/// Engines that can't match many patterns at once are skipped, unless they
/// were asked for by name (`explicit`), in which case that's an error. It is
/// also an error if no engine is left.
pub fn engines(
    registry: &Registry,
    explicit: bool,
) -> anyhow::Result<Vec<&dyn Engine>> {
    let mut multi = vec![];
    for engine in registry.iter() {
        if engine.supports_multi() {
            multi.push(engine);
        } else if explicit {
            anyhow::bail!(
                "engine '{}' cannot match many patterns at once",
                engine.name(),
            );
        } else {
            log::debug!("skipping {} in combined mode", engine.name());
        }
    }
    anyhow::ensure!(
        !multi.is_empty(),
        "none of the engines can match many patterns at once",
    );
    Ok(multi)
}

/// Benchmark all patterns compiled into one matcher with each of the given
/// engines. Unlike the per-pattern mode, any engine failure ends the run.
pub fn run(
    bench: &args::bench::Config,
    output: &args::output::Config,
    engines: &[&dyn Engine],
    patterns: &[String],
    corpus: &[u8],
) -> anyhow::Result<()> {
    println!("\n[Match regex patterns all together]\n");
    let patterns: Vec<&str> = patterns.iter().map(|p| p.as_str()).collect();
    let mut runner = Runner::new(bench.repeat);
    let mut report = CombinedReport::new(patterns.len());
    for &engine in engines.iter() {
        let res = runner.run_combined(engine, &patterns, corpus)?;
        let name = format!("{}-multi", engine.name());
        if !output.quiet {
            println!("{}", res.line(&name));
        }
        report.add(engine.name(), res);
    }
    println!("-----------------\nTotal Results:");
    report.write_table(std::io::stdout())?;
    output.with_csv(|wtr| report.write_csv(wtr))?;
    Ok(())
}
