//! Handles and handle allocation
//!
//! Handles are unique 64-bit identifiers for records in a document,
//! rendered as uppercase hexadecimal in the DXF stream. They only appear
//! in the output from R13 onward.

use std::fmt;

/// A unique identifier for one record in one document build.
///
/// Handle 0 is reserved and invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a handle from a raw u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// The uppercase-hex text written after codes 5/105/330/350.
    pub fn to_hex(&self) -> String {
        format!("{:X}", self.0)
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl fmt::UpperHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Issues monotonically increasing handles for one document build.
///
/// Each build owns its own allocator; sharing one allocator across
/// concurrent builds is the caller's responsibility to synchronize.
#[derive(Debug, Clone)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    /// Create an allocator whose first issued handle is `seed`.
    pub fn new(seed: u64) -> Self {
        HandleAllocator { next: seed }
    }

    /// Issue the next handle.
    pub fn next(&mut self) -> Handle {
        let handle = Handle::new(self.next);
        self.next += 1;
        handle
    }

    /// The handle the next call to [`next`](Self::next) will return,
    /// without issuing it. Written to `$HANDSEED`.
    pub fn peek(&self) -> Handle {
        Handle::new(self.next)
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        // AutoCAD reserves the low handle range for built-in tables.
        HandleAllocator::new(0x20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_hex_rendering() {
        assert_eq!(Handle::new(0xABCD).to_hex(), "ABCD");
        assert_eq!(Handle::new(255).to_hex(), "FF");
        assert_eq!(format!("{}", Handle::new(0x1F)), "1F");
    }

    #[test]
    fn test_null_handle() {
        assert!(Handle::NULL.is_null());
        assert!(!Handle::new(1).is_null());
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut alloc = HandleAllocator::new(0x40);
        let a = alloc.next();
        let b = alloc.next();
        let c = alloc.next();
        assert_eq!(a.value(), 0x40);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_allocator_peek_does_not_consume() {
        let mut alloc = HandleAllocator::new(5);
        assert_eq!(alloc.peek().value(), 5);
        assert_eq!(alloc.peek().value(), 5);
        assert_eq!(alloc.next().value(), 5);
        assert_eq!(alloc.peek().value(), 6);
    }

    #[test]
    fn test_allocator_never_repeats() {
        let mut alloc = HandleAllocator::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(alloc.next()));
        }
    }
}
