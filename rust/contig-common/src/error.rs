use std::alloc::Layout;

use thiserror::Error;

/// Error returned by the recoverable (checked or fallible) operations of the
/// contig containers.
///
/// Constructing an `Error` never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    pub fn into_kind(self) -> ErrorKind {
        self.0
    }

    pub fn out_of_range() -> Error {
        Error(ErrorKind::OutOfRange)
    }

    pub fn capacity_overflow() -> Error {
        Error(ErrorKind::CapacityOverflow)
    }

    pub fn allocation_failed(layout: Layout) -> Error {
        Error(ErrorKind::AllocationFailed {
            size: layout.size(),
            align: layout.align(),
        })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.0, ErrorKind::OutOfRange)
    }

    /// Returns the layout that the allocator failed to satisfy, if this is an
    /// allocation failure.
    pub fn failed_layout(&self) -> Option<Layout> {
        match self.0 {
            ErrorKind::AllocationFailed { size, align } => {
                Layout::from_size_align(size, align).ok()
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An index or insertion position lies outside the valid range.
    #[error("index out of range")]
    OutOfRange,

    /// The requested number of elements does not fit into an allocation
    /// (total byte size exceeds `isize::MAX`).
    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("memory allocation of {size} bytes (align {align}) failed")]
    AllocationFailed { size: usize, align: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind)
    }
}

impl From<std::alloc::LayoutError> for Error {
    fn from(_: std::alloc::LayoutError) -> Self {
        Error::capacity_overflow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::out_of_range().to_string(), "index out of range");
        assert_eq!(Error::capacity_overflow().to_string(), "capacity overflow");
        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(
            Error::allocation_failed(layout).to_string(),
            "memory allocation of 32 bytes (align 8) failed"
        );
    }

    #[test]
    fn test_error_kind_accessors() {
        let e = Error::out_of_range();
        assert!(e.is_out_of_range());
        assert_eq!(e.kind(), &ErrorKind::OutOfRange);
        assert_eq!(e.into_kind(), ErrorKind::OutOfRange);
        assert!(!Error::capacity_overflow().is_out_of_range());
    }

    #[test]
    fn test_failed_layout() {
        let layout = Layout::array::<u32>(10).unwrap();
        let e = Error::allocation_failed(layout);
        assert_eq!(e.failed_layout(), Some(layout));
        assert_eq!(Error::out_of_range().failed_layout(), None);
    }

    #[test]
    fn test_from_layout_error() {
        let e: Error = Layout::array::<u64>(usize::MAX).unwrap_err().into();
        assert_eq!(e.kind(), &ErrorKind::CapacityOverflow);
    }
}
