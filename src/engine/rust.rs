use crate::{
    engine::{Engine, Scanner},
    error::Error,
};

/// The `regex` crate, searching bytes via `regex::bytes::Regex`.
#[derive(Debug, Default)]
pub struct RustRegex(());

impl Engine for RustRegex {
    fn name(&self) -> &str {
        "rust_regex"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        let re = regex::bytes::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(RegexScanner(re)))
    }
}

#[derive(Debug)]
struct RegexScanner(regex::bytes::Regex);

impl Scanner for RegexScanner {
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error> {
        Ok(self.0.find_iter(haystack).count() as u64)
    }
}

/// The `regex-lite` crate.
///
/// Since regex-lite can only search `&str`, the haystack is checked for
/// UTF-8 validity on every scan, and that check is part of the measured time.
/// A haystack that isn't valid UTF-8 makes every scan fail.
#[derive(Debug, Default)]
pub struct RustLite(());

impl Engine for RustLite {
    fn name(&self) -> &str {
        "rust_lite"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        let re = regex_lite::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(LiteScanner(re)))
    }
}

#[derive(Debug)]
struct LiteScanner(regex_lite::Regex);

impl Scanner for LiteScanner {
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error> {
        let haystack = std::str::from_utf8(haystack)
            .map_err(|err| Error::scan("rust_lite", err))?;
        Ok(self.0.find_iter(haystack).count() as u64)
    }
}

/// The meta regex engine from `regex-automata`.
///
/// This is the only Rust engine here that compiles many patterns into one
/// matcher. In that mode, matches are still successive and non-overlapping
/// across all patterns, with leftmost-first semantics. So its counts are not
/// directly comparable with engines that report every match of every
/// pattern.
#[derive(Debug, Default)]
pub struct RustMeta(());

impl Engine for RustMeta {
    fn name(&self) -> &str {
        "rust_meta"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        let re = regex_automata::meta::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(MetaScanner(re)))
    }

    fn supports_multi(&self) -> bool {
        true
    }

    fn compile_many(
        &self,
        patterns: &[&str],
    ) -> Result<Box<dyn Scanner>, Error> {
        let re = regex_automata::meta::Regex::new_many(patterns)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(MetaScanner(re)))
    }
}

#[derive(Debug)]
struct MetaScanner(regex_automata::meta::Regex);

impl Scanner for MetaScanner {
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error> {
        Ok(self.0.find_iter(haystack).count() as u64)
    }
}
