mod array;
mod generated;
mod host;
mod slice;

pub use array::ArrayReader;
pub use generated::{GeneratedReader, constant};
pub use host::{HostBuffer, HostBufferView};
pub use slice::{AsReader, SliceReader};

/// Slot for a flat index. Indices that do not fit `usize` map to a slot
/// past any real buffer so the backend's bounds check rejects them.
#[inline]
pub(crate) fn slot(idx: u64) -> usize {
    usize::try_from(idx).unwrap_or(usize::MAX)
}
