use crate::{
    engine::{Engine, Scanner},
    error::Error,
};

/// Oniguruma, via the `onig` crate.
///
/// Oniguruma searches `&str`, so the haystack must be valid UTF-8. The
/// validity check happens on every scan and is included in the timings.
#[derive(Debug, Default)]
pub struct Oniguruma(());

impl Engine for Oniguruma {
    fn name(&self) -> &str {
        "onig"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        let re = onig::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(OnigScanner(re)))
    }
}

struct OnigScanner(onig::Regex);

impl Scanner for OnigScanner {
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error> {
        let haystack = std::str::from_utf8(haystack)
            .map_err(|err| Error::scan("onig", err))?;
        Ok(self.0.find_iter(haystack).count() as u64)
    }
}
