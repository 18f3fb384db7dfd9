/// A request to pre-allocate storage for a number of elements without adding any.
///
/// Consumed by `SimpleVector::from(request)`, which yields an empty vector
/// whose capacity equals [`capacity`](ReserveRequest::capacity).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReserveRequest {
    requested_capacity: usize,
}

impl ReserveRequest {
    pub const fn new(capacity: usize) -> ReserveRequest {
        ReserveRequest {
            requested_capacity: capacity,
        }
    }

    /// The number of elements to pre-allocate.
    pub const fn capacity(&self) -> usize {
        self.requested_capacity
    }
}

/// Shorthand for [`ReserveRequest::new`].
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
