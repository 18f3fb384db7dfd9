pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns `Err(ErrorKind::OutOfRange)` from the enclosing function when the
/// predicate does not hold.
///
/// The enclosing function must return `contig_common::Result<_>` (or a result
/// whose error type converts from `contig_common::Error`).
#[macro_export]
macro_rules! verify_range {
    ($expr:expr) => {{
        let result = $expr;
        $crate::result::verify_range(result)?;
    }};
}

#[inline]
pub fn verify_range(predicate: bool) -> Result<()> {
    if predicate { Ok(()) } else { out_of_range() }
}

#[cold]
pub fn out_of_range() -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_get(values: &[u32], index: usize) -> Result<u32> {
        crate::verify_range!(index < values.len());
        Ok(values[index])
    }

    #[test]
    fn test_verify_range_macro() {
        let values = [10, 20, 30];
        assert_eq!(checked_get(&values, 2).unwrap(), 30);
        assert!(checked_get(&values, 3).unwrap_err().is_out_of_range());
        assert!(checked_get(&[], 0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_verify_range_fn() {
        assert!(verify_range(true).is_ok());
        assert!(verify_range(false).unwrap_err().is_out_of_range());
    }
}
