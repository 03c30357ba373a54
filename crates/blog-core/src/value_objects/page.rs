//! Offset pagination arithmetic
//!
//! Page numbers are 1-based. The same total order (`created_at DESC, id
//! DESC`) backs the id-filter query, the count query, and the hydration
//! query, so a `(limit, offset)` slice is well-defined for a fixed filter and
//! data snapshot.

use crate::error::DomainError;

/// A 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    /// Create a page request, rejecting non-positive page number or size
    pub fn new(number: i64, size: i64) -> Result<Self, DomainError> {
        if number < 1 {
            return Err(DomainError::BadRequest(format!(
                "Page number must be positive, got {number}."
            )));
        }
        if size < 1 {
            return Err(DomainError::BadRequest(format!(
                "Page size must be positive, got {size}."
            )));
        }
        Ok(Self { number, size })
    }

    /// Row offset of the first element of this page
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.size
    }
}

/// Derived pagination metadata for a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub has_prev: bool,
    pub has_next: bool,
    pub last_page: i64,
}

impl PageInfo {
    /// Compute page metadata from an unpaged match count.
    ///
    /// `last_page` is at least 1 even when zero results exist.
    pub fn compute(total: i64, request: &PageRequest) -> Self {
        let last_page = if total <= 0 {
            1
        } else {
            // Signed `div_ceil` is unstable (`int_roundings`); both operands
            // are positive here so this is an exact ceiling division.
            (total + request.size - 1) / request.size
        };

        Self {
            has_prev: request.number > 1,
            has_next: request.number < last_page,
            last_page,
        }
    }

    /// Check whether the requested page lies beyond the last page
    #[inline]
    pub fn is_out_of_range(&self, request: &PageRequest) -> bool {
        request.number > self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_non_positive() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(-3, 10).is_err());
        assert!(PageRequest::new(1, 10).is_ok());
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
        assert_eq!(PageRequest::new(2, 7).unwrap().offset(), 7);
    }

    #[test]
    fn test_last_page_is_ceiling() {
        let request = PageRequest::new(1, 10).unwrap();
        assert_eq!(PageInfo::compute(0, &request).last_page, 1);
        assert_eq!(PageInfo::compute(1, &request).last_page, 1);
        assert_eq!(PageInfo::compute(10, &request).last_page, 1);
        assert_eq!(PageInfo::compute(11, &request).last_page, 2);
        assert_eq!(PageInfo::compute(21, &request).last_page, 3);
    }

    #[test]
    fn test_prev_next_flags() {
        let first = PageRequest::new(1, 10).unwrap();
        let info = PageInfo::compute(25, &first);
        assert!(!info.has_prev);
        assert!(info.has_next);

        let middle = PageRequest::new(2, 10).unwrap();
        let info = PageInfo::compute(25, &middle);
        assert!(info.has_prev);
        assert!(info.has_next);

        let last = PageRequest::new(3, 10).unwrap();
        let info = PageInfo::compute(25, &last);
        assert!(info.has_prev);
        assert!(!info.has_next);
    }

    #[test]
    fn test_out_of_range() {
        let request = PageRequest::new(5, 10).unwrap();
        let info = PageInfo::compute(25, &request);
        assert!(info.is_out_of_range(&request));

        let request = PageRequest::new(1, 10).unwrap();
        let info = PageInfo::compute(0, &request);
        assert!(!info.is_out_of_range(&request));
    }
}
