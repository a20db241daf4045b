use hyperscan::prelude::*;

use crate::{
    engine::{Engine, Scanner},
    error::Error,
};

/// Hyperscan in block mode.
///
/// Every pattern is compiled with `DOTALL`, `MULTILINE` and `SOM_LEFTMOST`.
/// Hyperscan reports every match it finds, including overlapping ones, and
/// that's what gets counted. Compiling also allocates the scratch space used
/// by scans.
#[derive(Debug, Default)]
pub struct Hyperscan(());

impl Hyperscan {
    fn flags() -> hyperscan::PatternFlags {
        hyperscan::PatternFlags::DOTALL
            | hyperscan::PatternFlags::MULTILINE
            | hyperscan::PatternFlags::SOM_LEFTMOST
    }

    fn scanner(&self, db: BlockDatabase) -> Result<Box<dyn Scanner>, Error> {
        let scratch = db.alloc_scratch().map_err(|err| {
            Error::compile(self.name(), format!("scratch space: {err}"))
        })?;
        Ok(Box::new(HyperscanScanner { db, scratch }))
    }
}

impl Engine for Hyperscan {
    fn name(&self) -> &str {
        "hscan"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        let pattern = Pattern::with_flags(pattern, Hyperscan::flags())
            .map_err(|err| Error::compile(self.name(), err))?;
        let db: BlockDatabase = pattern
            .build()
            .map_err(|err| Error::compile(self.name(), err))?;
        self.scanner(db)
    }

    fn supports_multi(&self) -> bool {
        true
    }

    fn compile_many(
        &self,
        patterns: &[&str],
    ) -> Result<Box<dyn Scanner>, Error> {
        let mut pats = Vec::with_capacity(patterns.len());
        for (id, &pat) in patterns.iter().enumerate() {
            let mut pat = Pattern::with_flags(pat, Hyperscan::flags())
                .map_err(|err| Error::compile(self.name(), err))?;
            pat.id = Some(id);
            pats.push(pat);
        }
        let db: BlockDatabase = pats
            .into_iter()
            .collect::<Patterns>()
            .build()
            .map_err(|err| Error::compile(self.name(), err))?;
        self.scanner(db)
    }
}

// Dropping this frees the scratch space and then the database.
struct HyperscanScanner {
    db: BlockDatabase,
    scratch: Scratch,
}

impl Scanner for HyperscanScanner {
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error> {
        let mut found = 0;
        self.db
            .scan(haystack, &self.scratch, |_, _, _, _| {
                found += 1;
                Matching::Continue
            })
            .map_err(|err| Error::scan("hscan", err))?;
        Ok(found)
    }
}
