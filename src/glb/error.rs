use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GlbError>;

/// Fatal errors that stop an audit run.
///
/// Declared-versus-actual mismatches are never errors; they are reported as
/// [`Finding`](crate::glb::Finding) values instead.
#[derive(Debug, Error)]
pub enum GlbError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Stream ended before a fixed-size or length-prefixed region was complete.
	#[error("unexpected eof reading {what} at offset {at}, need {need} bytes, got {got}")]
	UnexpectedEof {
		/// Region being read.
		what: &'static str,
		/// Stream offset where the read started.
		at: u64,
		/// Requested bytes.
		need: u64,
		/// Bytes actually available.
		got: u64,
	},
	/// Leading magic is not `glTF`.
	#[error("not a glb container (magic={magic:?})")]
	BadMagic {
		/// First four bytes of the stream.
		magic: [u8; 4],
	},
	/// Strict mode: chunk type tag does not match its position.
	#[error("chunk {index} has type 0x{got:08x}, expected 0x{expected:08x}")]
	UnexpectedChunkType {
		/// Chunk position (0 = JSON, 1 = BIN).
		index: usize,
		/// Required type tag.
		expected: u32,
		/// Type tag read from the stream.
		got: u32,
	},
	/// Strict mode: header length field disagrees with the stream length.
	#[error("declared total length {declared} does not match stream length {actual}")]
	TotalLengthMismatch {
		/// Header `length` field.
		declared: u32,
		/// Bytes in the whole stream, trailing chunks included.
		actual: u64,
	},
	/// JSON chunk is not a usable scene document.
	#[error("invalid scene document: {reason}")]
	InvalidDocument {
		/// Parser or shape diagnostic.
		reason: String,
	},
	/// Accessor uses a `componentType` outside the known table.
	#[error("unknown componentType code {code} on accessor {accessor}")]
	UnknownComponentType {
		/// Accessor index.
		accessor: usize,
		/// Offending value as written in the document.
		code: String,
	},
	/// Accessor uses a `type` tag outside the known table.
	#[error("unknown accessor type code {tag:?} on accessor {accessor}")]
	UnknownAccessorType {
		/// Accessor index.
		accessor: usize,
		/// Offending tag, or the JSON text of a non-string value.
		tag: String,
	},
}
