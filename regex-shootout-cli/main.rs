use std::io::Write;

mod args;
mod cmd;
mod logger;
mod util;

fn main() -> anyhow::Result<()> {
    logger::Logger::init_from_env()?;
    if let Err(err) = cmd::run(&mut lexopt::Parser::from_env()) {
        let mut stderr = std::io::stderr();
        if std::env::var("RUST_BACKTRACE").map_or(false, |v| v == "1") {
            writeln!(stderr, "{:?}", err)?;
        } else {
            writeln!(stderr, "{:#}", err)?;
        }
        std::process::exit(1);
    }
    Ok(())
}
