use thiserror::Error;

#[derive(Error, Debug)]
pub enum PercentileSetError {
    #[error("no percentiles requested")]
    Empty,
    #[error("percentile must be in (0, 100], got {0}")]
    OutOfRange(f64),
}

/// The percentile targets a report should contain, in the order the caller
/// asked for them. Every target is validated into the interval (0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileSet {
    targets: Vec<f64>,
}

impl PercentileSet {
    pub fn new(targets: Vec<f64>) -> Result<Self, PercentileSetError> {
        if targets.is_empty() {
            return Err(PercentileSetError::Empty);
        }
        for target in &targets {
            if !(*target > 0.0 && *target <= 100.0) {
                return Err(PercentileSetError::OutOfRange(*target));
            }
        }
        Ok(Self { targets })
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_an_empty_set() {
        assert!(matches!(
            PercentileSet::new(vec![]),
            Err(PercentileSetError::Empty)
        ));
    }

    #[test]
    fn new_rejects_zero_and_values_above_100() {
        assert!(matches!(
            PercentileSet::new(vec![0.0]),
            Err(PercentileSetError::OutOfRange(_))
        ));
        assert!(matches!(
            PercentileSet::new(vec![50.0, 100.5]),
            Err(PercentileSetError::OutOfRange(_))
        ));
        assert!(matches!(
            PercentileSet::new(vec![f64::NAN]),
            Err(PercentileSetError::OutOfRange(_))
        ));
    }

    #[test]
    fn new_keeps_the_requested_order() {
        let set = PercentileSet::new(vec![95.0, 60.0, 85.0]).unwrap();
        assert_eq!(set.targets(), &[95.0, 60.0, 85.0]);
    }

    #[test]
    fn new_accepts_100() {
        let set = PercentileSet::new(vec![100.0]).unwrap();
        assert_eq!(set.targets(), &[100.0]);
    }
}
