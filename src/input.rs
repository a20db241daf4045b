/*!
Loading of pattern lists and corpora.

A pattern list has one pattern per line. Both `\n` and `\r` end a line, empty
lines are skipped and lines starting with `#` are comments. Patterns must be
valid UTF-8.

A corpus is read as raw bytes, with every `\r` replaced by `\n`.
*/

use std::path::Path;

use bstr::ByteSlice;

use crate::error::Error;

/// The number of patterns above which a warning is logged. This is only
/// advisory: larger pattern sets are benchmarked in full.
pub const DEFAULT_MAX_PATTERNS: usize = 1000;

/// Parse a pattern list.
///
/// # Errors
///
/// This returns an `InvalidInput` error that names the offending line when a
/// pattern is not valid UTF-8.
pub fn parse_patterns(contents: &[u8]) -> Result<Vec<String>, Error> {
    let mut patterns = vec![];
    let lines = contents.split(|&b| b == b'\n' || b == b'\r');
    for (i, line) in lines.enumerate() {
        if line.is_empty() || line[0] == b'#' {
            continue;
        }
        let pattern = line.to_str().map_err(|err| {
            Error::invalid_input(format!(
                "pattern on line {} is not valid UTF-8 ({}): {:?}",
                i + 1,
                err,
                line.as_bstr(),
            ))
        })?;
        patterns.push(pattern.to_string());
    }
    Ok(patterns)
}

/// Read and parse the pattern list at the given path.
///
/// # Errors
///
/// Besides the errors of [`parse_patterns`], this fails with an `Io` error if
/// the file can't be read and with an `InvalidInput` error if it contains no
/// patterns.
pub fn read_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let contents = std::fs::read(path).map_err(|err| Error::io(path, err))?;
    let patterns = parse_patterns(&contents)?;
    if patterns.is_empty() {
        return Err(Error::invalid_input(format!(
            "no patterns found in {}",
            path.display(),
        )));
    }
    log::debug!("read {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

/// Returns true and logs a warning when the number of patterns is above the
/// given soft limit.
pub fn exceeds_soft_limit(count: usize, limit: usize) -> bool {
    if count <= limit {
        return false;
    }
    log::warn!(
        "benchmarking {count} patterns, which is more than the soft limit \
         of {limit}",
    );
    true
}

/// Replace every carriage return in the given bytes with a line feed.
pub fn normalize_line_endings(bytes: &mut [u8]) {
    for b in bytes.iter_mut().filter(|b| **b == b'\r') {
        *b = b'\n';
    }
}

/// Read the corpus at the given path, normalizing line endings.
///
/// # Errors
///
/// This fails with an `Io` error if the file can't be read and with an
/// `InvalidInput` error if it is empty.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    let mut corpus =
        std::fs::read(path).map_err(|err| Error::io(path, err))?;
    if corpus.is_empty() {
        return Err(Error::invalid_input(format!(
            "corpus {} is empty",
            path.display(),
        )));
    }
    normalize_line_endings(&mut corpus);
    log::debug!("read {} corpus bytes from {}", corpus.len(), path.display());
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn comments_and_blank_lines() {
        let pats = parse_patterns(b"# names\nTwain\n\n(?i)Twain\n").unwrap();
        assert_eq!(vec!["Twain", "(?i)Twain"], pats);
    }

    #[test]
    fn carriage_returns_end_lines() {
        let pats = parse_patterns(b"a\r\nb\rc").unwrap();
        assert_eq!(vec!["a", "b", "c"], pats);
    }

    #[test]
    fn hash_only_at_start_is_comment() {
        let pats = parse_patterns(b" #not a comment\n#comment").unwrap();
        assert_eq!(vec![" #not a comment"], pats);
    }

    #[test]
    fn empty_list() {
        assert!(parse_patterns(b"").unwrap().is_empty());
        assert!(parse_patterns(b"\n\n# x\n").unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_names_line() {
        let err = parse_patterns(b"ok\n# c\na\xFFb\n").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
        assert!(err.to_string().contains("line 3"), "{}", err);
    }

    #[test]
    fn normalizes_carriage_returns() {
        let mut bytes = b"a\r\nb\rc".to_vec();
        normalize_line_endings(&mut bytes);
        assert_eq!(b"a\n\nb\nc", &bytes[..]);
    }

    #[test]
    fn soft_limit() {
        assert!(!exceeds_soft_limit(3, 3));
        assert!(exceeds_soft_limit(4, 3));
    }

    #[test]
    fn missing_files() {
        let path = "this/path/does/not/exist.txt";
        assert_eq!(ErrorKind::Io, read_patterns(path).unwrap_err().kind());
        assert_eq!(ErrorKind::Io, read_corpus(path).unwrap_err().kind());
    }
}
