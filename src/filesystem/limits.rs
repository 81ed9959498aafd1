/// Longest node name, in bytes. Matches the 64-byte name buffer of the
/// original tool minus its terminator.
pub const DEFAULT_NAME_LIMIT: usize = 63;

/// Longest path the resolver works on, in bytes.
pub const DEFAULT_PATH_LIMIT: usize = 511;

/// Byte bounds applied when splitting paths and naming nodes.
///
/// Inputs longer than a bound are cut silently, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub name: usize,
    pub path: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_LIMIT,
            path: DEFAULT_PATH_LIMIT,
        }
    }
}
