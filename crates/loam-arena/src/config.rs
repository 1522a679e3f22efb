//! Arena configuration parameters.

/// Configuration for an [`Arena`](crate::Arena).
///
/// All values are fixed at construction; an arena never grows its backing
/// allocation after the first use.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Total arena capacity in bytes.
    ///
    /// Default: 1 MiB. The backing allocation is deferred until the first
    /// `alloc`, so an unused arena costs nothing beyond the struct itself.
    pub capacity: usize,
}

impl ArenaConfig {
    /// Default arena capacity: 1 MiB.
    pub const DEFAULT_CAPACITY: usize = 1 << 20;

    /// Element capacity of the first allocation made by
    /// [`Arena::grow_array`](crate::Arena::grow_array) for an empty array.
    pub const DEFAULT_ARRAY_CAPACITY: usize = 8;

    /// Create a config with the given capacity in bytes.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
