/*!
Uniform adapters over the regex engines being benchmarked.

Every engine is exposed through the [`Engine`] trait. Compiling one or more
patterns with an engine yields a [`Scanner`], which counts the matches in a
haystack. The harness never looks inside either one: compilation strategy,
scratch space and buffering are entirely the adapter's business.

Which engines exist in a build is decided by Cargo features. The
[`Registry`] collects whatever was compiled in at runtime, so the rest of the
harness works with a plain list of trait objects.
*/

use crate::error::Error;

mod rust;

#[cfg(feature = "re-hyperscan")]
mod hyperscan;
#[cfg(feature = "re-onig")]
mod onig;
#[cfg(feature = "re-pcre2")]
mod pcre2;
#[cfg(feature = "re-regress")]
mod regress;

pub use self::rust::{RustLite, RustMeta, RustRegex};

#[cfg(feature = "re-hyperscan")]
pub use self::hyperscan::Hyperscan;
#[cfg(feature = "re-onig")]
pub use self::onig::Oniguruma;
#[cfg(feature = "re-pcre2")]
pub use self::pcre2::Pcre2;
#[cfg(feature = "re-regress")]
pub use self::regress::Regress;

/// A regex engine that can be benchmarked.
pub trait Engine: std::fmt::Debug {
    /// A short name for this engine, used in progress output and reports.
    fn name(&self) -> &str;

    /// Compile a single pattern into something that can scan haystacks.
    ///
    /// Any resources the scanner needs (scratch space, match data and so on)
    /// should be allocated here, since the time this takes is reported as the
    /// engine's preparation time.
    fn compile(&self, pattern: &str) -> Result<Box<dyn Scanner>, Error>;

    /// Whether this engine can compile many patterns into one matcher.
    fn supports_multi(&self) -> bool {
        false
    }

    /// Compile all of the given patterns into one matcher.
    ///
    /// Engines that don't support this return an `InvalidInput` error.
    fn compile_many(
        &self,
        patterns: &[&str],
    ) -> Result<Box<dyn Scanner>, Error> {
        let _ = patterns;
        Err(Error::invalid_input(format!(
            "{} does not support matching many patterns at once",
            self.name(),
        )))
    }
}

/// A compiled matcher.
///
/// Scanners are dropped as soon as benchmarking a pattern is done, whether
/// it succeeded or not, so releasing engine resources belongs in `Drop`.
pub trait Scanner {
    /// Count all successive non-overlapping matches in the haystack.
    ///
    /// Engines that report every match end (like Hyperscan) count those
    /// instead. The count is local to this call.
    fn count(&mut self, haystack: &[u8]) -> Result<u64, Error>;
}

/// The set of engines taking part in a benchmark, in reporting order.
#[derive(Debug, Default)]
pub struct Registry {
    engines: Vec<Box<dyn Engine>>,
}

impl Registry {
    /// Create a registry without any engines.
    pub fn empty() -> Registry {
        Registry::default()
    }

    /// Create a registry with every engine compiled into this build.
    pub fn available() -> Registry {
        let mut reg = Registry::empty();
        #[cfg(feature = "re-pcre2")]
        {
            reg.register(Pcre2::interpreter());
            reg.register(Pcre2::jit());
        }
        #[cfg(feature = "re-onig")]
        reg.register(Oniguruma::default());
        #[cfg(feature = "re-hyperscan")]
        reg.register(Hyperscan::default());
        reg.register(RustRegex::default());
        reg.register(RustLite::default());
        reg.register(RustMeta::default());
        #[cfg(feature = "re-regress")]
        reg.register(Regress::default());
        reg
    }

    /// Add an engine to the end of this registry.
    pub fn register<E: Engine + 'static>(
        &mut self,
        engine: E,
    ) -> &mut Registry {
        self.engines.push(Box::new(engine));
        self
    }

    /// Keep only the engines with the given names, in the order given.
    ///
    /// An unknown or repeated name is an error.
    pub fn select<S: AsRef<str>>(
        mut self,
        names: &[S],
    ) -> Result<Registry, Error> {
        let available = self.names().join(", ");
        let mut selected = Registry::empty();
        for name in names.iter().map(|n| n.as_ref()) {
            let i = match self.engines.iter().position(|e| e.name() == name) {
                Some(i) => i,
                None if selected.get(name).is_some() => {
                    return Err(Error::invalid_input(format!(
                        "engine '{name}' was selected more than once",
                    )));
                }
                None => {
                    return Err(Error::invalid_input(format!(
                        "unknown engine '{name}' (available: {available})",
                    )));
                }
            };
            selected.engines.push(self.engines.remove(i));
        }
        Ok(selected)
    }

    /// Look up an engine by name.
    pub fn get(&self, name: &str) -> Option<&dyn Engine> {
        self.iter().find(|e| e.name() == name)
    }

    /// The names of all engines, in order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|e| e.name()).collect()
    }

    /// Iterate over the engines, in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Engine> + '_ {
        self.engines.iter().map(|e| &**e)
    }

    /// The number of engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether there are no engines at all.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
