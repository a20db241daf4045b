use std::io::Write;

use regex_shootout::{report::Report, score, Registry, Runner};

use crate::args;

/// Benchmark every pattern on its own with every engine, then print the
/// totals and write the CSV, if asked for.
pub fn run(
    bench: &args::bench::Config,
    output: &args::output::Config,
    registry: &Registry,
    patterns: &[String],
    corpus: &[u8],
) -> anyhow::Result<()> {
    println!("\n[Match regex patterns one by one]\n");
    log::info!(
        "benchmarking {} patterns on {} bytes",
        patterns.len(),
        corpus.len(),
    );
    let mut runner = Runner::new(bench.repeat);
    let mut report = Report::new(registry.names());
    for pattern in patterns.iter() {
        if !output.quiet {
            println!("-----------------\nRegex: '{}'", pattern);
        }
        let mut row =
            runner.run_all(registry, pattern, corpus, |name, res| {
                if output.quiet {
                    return;
                }
                match res {
                    Some(res) => println!("{}", res.line(name)),
                    None => println!("[{:>10}] failed", name),
                }
            })?;
        score::score(&mut row);
        report.add(pattern, row)?;
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "-----------------\nTotal Results:")?;
    report.write_table(&mut stdout)?;
    output.with_csv(|wtr| report.write_csv(wtr))?;
    Ok(())
}
