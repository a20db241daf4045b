use crate::error::Error;

/// The statistics derived from the timing samples of one benchmark.
///
/// All values are in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// The one-time preparation cost, carried through unchanged.
    pub pre_time: f64,
    /// The arithmetic mean of the samples.
    pub mean: f64,
    /// The sample standard deviation, or `0` when there is only one sample.
    pub sd: f64,
}

impl Summary {
    /// Compute the mean and sample standard deviation of the given timing
    /// samples.
    ///
    /// The variance uses Bessel's correction, i.e., it divides by `n - 1`.
    ///
    /// # Errors
    ///
    /// This returns an error of kind `InvalidInput` when `samples` is empty.
    pub fn compute(pre_time: f64, samples: &[f64]) -> Result<Summary, Error> {
        let n = samples.len();
        if n == 0 {
            return Err(Error::invalid_input(
                "cannot summarize an empty set of timing samples",
            ));
        }
        if n == 1 {
            return Ok(Summary { pre_time, mean: samples[0], sd: 0.0 });
        }
        let mean = samples.iter().sum::<f64>() / (n as f64);
        let sdev: f64 = samples.iter().map(|&x| (x - mean) * (x - mean)).sum();
        let var = sdev / ((n - 1) as f64);
        Ok(Summary { pre_time, mean, sd: var.sqrt() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn single_sample() {
        let s = Summary::compute(0.25, &[7.5]).unwrap();
        assert_eq!(Summary { pre_time: 0.25, mean: 7.5, sd: 0.0 }, s);
    }

    #[test]
    fn identical_samples() {
        let s = Summary::compute(0.0, &[3.0, 3.0, 3.0]).unwrap();
        assert_eq!(3.0, s.mean);
        assert_eq!(0.0, s.sd);
    }

    #[test]
    fn sample_standard_deviation() {
        let s = Summary::compute(1.0, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(1.0, s.pre_time);
        assert_eq!(2.0, s.mean);
        assert_eq!(1.0, s.sd);
    }

    #[test]
    fn two_samples() {
        let s = Summary::compute(0.0, &[2.0, 4.0]).unwrap();
        assert_eq!(3.0, s.mean);
        assert!((s.sd - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty() {
        let err = Summary::compute(0.0, &[]).unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
    }
}
