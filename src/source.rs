//! Sources of the 128-bit random value an identifier is cut from.

use uuid::Uuid;

/// Yields a fresh 128-bit value as its (most, least) significant 64-bit halves.
///
/// Implementations must draw independent entropy on every call. Any closure
/// `Fn() -> (u64, u64)` is a source, which keeps deterministic tests short.
pub trait RandomSource: Send + Sync {
    fn next_halves(&self) -> (u64, u64);
}

/// Random (version 4) UUIDs from the operating system's secure generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Source;

impl RandomSource for UuidV4Source {
    /// # Panics
    ///
    /// Panics if the OS random number generator is unavailable. A predictable
    /// identifier is never returned in its place.
    fn next_halves(&self) -> (u64, u64) {
        Uuid::new_v4().as_u64_pair()
    }
}

impl<F> RandomSource for F
where
    F: Fn() -> (u64, u64) + Send + Sync,
{
    fn next_halves(&self) -> (u64, u64) {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_source_sets_version_and_variant() {
        let (most, least) = UuidV4Source.next_halves();
        assert_eq!((most >> 12) & 0xF, 4);
        assert_eq!(least >> 62, 0b10);
    }

    #[test]
    fn test_uuid_source_draws_fresh_values() {
        let first = UuidV4Source.next_halves();
        let second = UuidV4Source.next_halves();
        assert_ne!(first, second);
    }

    #[test]
    fn test_closure_source() {
        let source = || (0x0102_0304_0506_0708, 0x1112_1314_1516_1718);
        assert_eq!(
            source.next_halves(),
            (0x0102_0304_0506_0708, 0x1112_1314_1516_1718)
        );
    }
}
