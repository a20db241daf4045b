use pcre2::bytes::{Regex, RegexBuilder};

use crate::{
    engine::{Engine, Scanner},
    error::Error,
};

/// PCRE2, either with its interpreter or with its JIT.
///
/// Patterns are compiled without the UTF flag so that arbitrary haystacks
/// can be searched. This means character classes match bytes, not
/// codepoints.
#[derive(Debug)]
pub struct Pcre2 {
    name: &'static str,
    jit: bool,
}

impl Pcre2 {
    /// PCRE2's backtracking interpreter.
    pub fn interpreter() -> Pcre2 {
        Pcre2 { name: "pcre", jit: false }
    }

    /// PCRE2's JIT. Compiling fails if the JIT isn't available.
    pub fn jit() -> Pcre2 {
        Pcre2 { name: "pcre-jit", jit: true }
    }
}

impl Engine for Pcre2 {
    fn name(&self) -> &str {
        self.name
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        let re = RegexBuilder::new()
            .jit(self.jit)
            .build(pattern)
            .map_err(|err| Error::compile(self.name, err))?;
        Ok(Box::new(Pcre2Scanner { name: self.name, re }))
    }
}

#[derive(Debug)]
struct Pcre2Scanner {
    name: &'static str,
    re: Regex,
}

impl Scanner for Pcre2Scanner {
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error> {
        let mut found = 0;
        for result in self.re.find_iter(haystack) {
            result.map_err(|err| Error::scan(self.name, err))?;
            found += 1;
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_and_jit_agree() {
        let hay = b"Tom Sawyer met Huckleberry Finn by the river";
        for engine in [Pcre2::interpreter(), Pcre2::jit()] {
            let mut scanner = engine.compile(r"\b\w+er\b").unwrap();
            assert_eq!(2, scanner.count(hay).unwrap(), "{}", engine.name());
        }
    }
}
