use crate::{
    engine::{Engine, Scanner},
    error::Error,
};

/// The `regress` crate, a backtracking engine with ECMAScript syntax.
///
/// Like the other `&str` based engines, the haystack's UTF-8 check is part
/// of every scan.
#[derive(Debug, Default)]
pub struct Regress(());

impl Engine for Regress {
    fn name(&self) -> &str {
        "rust_regrs"
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error> {
        let re = regress::Regex::new(pattern)
            .map_err(|err| Error::compile(self.name(), err))?;
        Ok(Box::new(RegressScanner(re)))
    }
}

struct RegressScanner(regress::Regex);

impl Scanner for RegressScanner {
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error> {
        let haystack = std::str::from_utf8(haystack)
            .map_err(|err| Error::scan("rust_regrs", err))?;
        Ok(self.0.find_iter(haystack).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let mut scanner = Regress::default().compile("Tom|Finn").unwrap();
        assert_eq!(2, scanner.count(b"Tom and Finn").unwrap());
    }
}
