use std::io::{self, Write};

/// An aligned table of labeled values, used to describe a run before it
/// starts. Values are rendered with their `Display` impl.
#[derive(Debug)]
pub struct Table {
    pairs: Vec<(&'static str, String)>,
}

impl Table {
    pub fn empty() -> Table {
        Table { pairs: vec![] }
    }

    pub fn add<D: std::fmt::Display>(
        &mut self,
        label: &'static str,
        value: D,
    ) {
        self.pairs.push((label, value.to_string()));
    }

    pub fn print<W: io::Write>(&self, wtr: W) -> io::Result<()> {
        let mut wtr = tabwriter::TabWriter::new(wtr)
            .alignment(tabwriter::Alignment::Right);
        for (label, value) in self.pairs.iter() {
            writeln!(wtr, "{label}:\t{value}")?;
        }
        wtr.flush()
    }
}
