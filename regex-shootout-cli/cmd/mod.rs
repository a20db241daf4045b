use regex_shootout::Registry;

use crate::{
    args::{self, bench::Mode, Flow},
    util,
};

mod combined;
mod each;

const USAGE: &'static str = "\
Benchmarks regex engines against each other.

Every engine searches the same corpus for the same patterns. Compilation is
timed once, and then the corpus is scanned a fixed number of times to get the
mean and standard deviation of the match time. In the default mode, the
fastest engines for each pattern are awarded points (5 for the fastest, then
4, 3, 2 and 1), and the totals are printed at the end.

Progress and engine failures are logged to stderr. Set RUST_LOG to one of
error, warn, info, debug or trace to see them.

USAGE:
    regex-shootout -f <corpus> -i <patterns> [-n <count>] [-m <mode>]

TIP:
    use -h for short docs and --help for long docs

OPTIONS:
%options%
";

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let mut input = args::input::Config::default();
    let mut bench = args::bench::Config::default();
    let mut output = args::output::Config::default();
    let flow = args::configure(
        p,
        USAGE,
        &mut [&mut input, &mut bench, &mut output],
    )?;
    if flow == Flow::Exit {
        return Ok(());
    }
    if bench.list_engines {
        list_engines(&Registry::available());
        return Ok(());
    }
    let registry = bench.registry()?;
    anyhow::ensure!(!registry.is_empty(), "no engines to benchmark");
    // Settle which engines take part before printing anything.
    let multi = match bench.mode {
        Mode::Each => vec![],
        Mode::Combined => {
            combined::engines(&registry, bench.explicit_engines())?
        }
    };

    let corpus = input.corpus()?;
    let patterns = input.patterns()?;
    if output.table() {
        let mut table = util::Table::empty();
        table.add("corpus bytes", corpus.len());
        table.add("patterns", patterns.len());
        table.add("repeat", bench.repeat);
        table.add("mode", bench.mode);
        let names: Vec<&str> = match bench.mode {
            Mode::Each => registry.names(),
            Mode::Combined => multi.iter().map(|e| e.name()).collect(),
        };
        table.add("engines", names.join(", "));
        table.print(std::io::stdout())?;
    }
    match bench.mode {
        Mode::Each => {
            each::run(&bench, &output, &registry, &patterns, &corpus)
        }
        Mode::Combined => {
            combined::run(&bench, &output, &multi, &patterns, &corpus)
        }
    }
}

fn list_engines(registry: &Registry) {
    for engine in registry.iter() {
        let multi = if engine.supports_multi() { "*" } else { "" };
        println!("{}{}", engine.name(), multi);
    }
}
