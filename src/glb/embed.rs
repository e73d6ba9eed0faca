/// Decides which buffer indices are backed by the container's binary chunk.
pub trait EmbedPolicy {
	/// Whether buffer `index` resolves to the binary chunk payload.
	fn is_embedded(&self, index: usize) -> bool;
}

/// Convention used by single-buffer producers: buffer 0 is the binary chunk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstBufferEmbedded;

impl EmbedPolicy for FirstBufferEmbedded {
	fn is_embedded(&self, index: usize) -> bool {
		index == 0
	}
}

/// A fixed, caller-chosen buffer index is the binary chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedIndex(pub usize);

impl EmbedPolicy for EmbeddedIndex {
	fn is_embedded(&self, index: usize) -> bool {
		index == self.0
	}
}
