use std::fmt;

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
	/// Informational: a check passed or a record was skipped.
	Info,
	/// A declared size or range disagrees with the binary payload.
	Warning,
}

impl Severity {
	/// Uppercase label used in reports.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Info => "INFO",
			Self::Warning => "WARNING",
		}
	}
}

/// Record a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
	/// Index into `buffers`.
	Buffer(usize),
	/// Index into `bufferViews`.
	BufferView(usize),
	/// Index into `accessors`.
	Accessor(usize),
}

impl Subject {
	/// JSON collection name of the subject.
	pub fn collection(self) -> &'static str {
		match self {
			Self::Buffer(_) => "buffers",
			Self::BufferView(_) => "bufferViews",
			Self::Accessor(_) => "accessors",
		}
	}

	/// Index within the collection.
	pub fn index(self) -> usize {
		match self {
			Self::Buffer(index) | Self::BufferView(index) | Self::Accessor(index) => index,
		}
	}
}

impl fmt::Display for Subject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Buffer(index) => write!(f, "buffer {index}"),
			Self::BufferView(index) => write!(f, "bufferView {index}"),
			Self::Accessor(index) => write!(f, "accessor {index}"),
		}
	}
}

/// What was observed, with the numbers behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
	/// Entry could not be decoded.
	MalformedRecord {
		/// Decoder diagnostic.
		reason: String,
	},
	/// Embedded buffer length equals the binary chunk length.
	BufferLengthMatches {
		/// Declared `byteLength`.
		declared: u64,
	},
	/// Embedded buffer length differs from the binary chunk length.
	BufferLengthMismatch {
		/// Declared `byteLength`.
		declared: u64,
		/// Binary chunk payload length.
		actual: u64,
	},
	/// Buffer is not the embedded one.
	ExternalBufferSkipped {
		/// Declared `byteLength`.
		declared: u64,
		/// External location, if the buffer names one.
		uri: Option<String>,
	},
	/// Buffer view fits in the binary chunk.
	ViewWithinBounds {
		/// View `byteOffset`.
		byte_offset: u64,
		/// View `byteLength`.
		byte_length: u64,
		/// Binary chunk payload length.
		payload: u64,
	},
	/// Buffer view ends past the binary chunk.
	ViewOutOfBounds {
		/// View `byteOffset`.
		byte_offset: u64,
		/// View `byteLength`.
		byte_length: u64,
		/// Binary chunk payload length.
		payload: u64,
	},
	/// Buffer view targets a non-embedded buffer.
	ViewExternalSkipped {
		/// Referenced buffer index.
		buffer: usize,
	},
	/// Accessor has no `bufferView`.
	AccessorNoView,
	/// Accessor's `bufferView` index is out of range or malformed.
	AccessorDanglingView {
		/// Referenced buffer view index.
		view: usize,
	},
	/// Accessor's buffer view targets a non-embedded buffer.
	AccessorExternalSkipped {
		/// Referenced buffer view index.
		view: usize,
		/// Buffer index of that view.
		buffer: usize,
	},
	/// Accessor data fits in the binary chunk.
	AccessorWithinBounds {
		/// View offset plus accessor offset.
		start: u128,
		/// `count * componentSize * componentCount`.
		expected_length: u128,
		/// Binary chunk payload length.
		payload: u64,
	},
	/// Accessor data ends past the binary chunk.
	AccessorOutOfBounds {
		/// View offset plus accessor offset.
		start: u128,
		/// `count * componentSize * componentCount`.
		expected_length: u128,
		/// Binary chunk payload length.
		payload: u64,
	},
}

impl FindingKind {
	/// Severity implied by the observation.
	pub fn severity(&self) -> Severity {
		match self {
			Self::MalformedRecord { .. }
			| Self::BufferLengthMismatch { .. }
			| Self::ViewOutOfBounds { .. }
			| Self::AccessorDanglingView { .. }
			| Self::AccessorOutOfBounds { .. } => Severity::Warning,
			Self::BufferLengthMatches { .. }
			| Self::ExternalBufferSkipped { .. }
			| Self::ViewWithinBounds { .. }
			| Self::ViewExternalSkipped { .. }
			| Self::AccessorNoView
			| Self::AccessorExternalSkipped { .. }
			| Self::AccessorWithinBounds { .. } => Severity::Info,
		}
	}

	/// Stable snake_case identifier for machine-readable output.
	pub fn code(&self) -> &'static str {
		match self {
			Self::MalformedRecord { .. } => "malformed_record",
			Self::BufferLengthMatches { .. } => "buffer_length_matches",
			Self::BufferLengthMismatch { .. } => "buffer_length_mismatch",
			Self::ExternalBufferSkipped { .. } => "external_buffer_skipped",
			Self::ViewWithinBounds { .. } => "view_within_bounds",
			Self::ViewOutOfBounds { .. } => "view_out_of_bounds",
			Self::ViewExternalSkipped { .. } => "view_external_skipped",
			Self::AccessorNoView => "accessor_no_view",
			Self::AccessorDanglingView { .. } => "accessor_dangling_view",
			Self::AccessorExternalSkipped { .. } => "accessor_external_skipped",
			Self::AccessorWithinBounds { .. } => "accessor_within_bounds",
			Self::AccessorOutOfBounds { .. } => "accessor_out_of_bounds",
		}
	}
}

impl fmt::Display for FindingKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MalformedRecord { reason } => write!(f, "malformed record: {reason}"),
			Self::BufferLengthMatches { declared } => {
				write!(f, "declared length ({declared}) matches binary chunk length")
			}
			Self::BufferLengthMismatch { declared, actual } => write!(
				f,
				"declared length ({declared}) does not match actual binary chunk length ({actual})"
			),
			Self::ExternalBufferSkipped { declared, uri: Some(uri) } => {
				write!(f, "not the embedded buffer (declared length {declared}, uri {uri}), skipped")
			}
			Self::ExternalBufferSkipped { declared, uri: None } => {
				write!(f, "not the embedded buffer (declared length {declared}), skipped")
			}
			Self::ViewWithinBounds {
				byte_offset,
				byte_length,
				payload,
			} => write!(
				f,
				"within binary chunk bounds (offset {byte_offset}, length {byte_length}, chunk size {payload})"
			),
			Self::ViewOutOfBounds {
				byte_offset,
				byte_length,
				payload,
			} => write!(
				f,
				"extends beyond binary chunk (offset {byte_offset}, length {byte_length}, chunk size {payload})"
			),
			Self::ViewExternalSkipped { buffer } => {
				write!(f, "references non-embedded buffer {buffer}, skipped")
			}
			Self::AccessorNoView => write!(f, "no buffer view, skipped"),
			Self::AccessorDanglingView { view } => {
				write!(f, "references missing or malformed buffer view {view}")
			}
			Self::AccessorExternalSkipped { view, buffer } => write!(
				f,
				"buffer view {view} references non-embedded buffer {buffer}, skipped"
			),
			Self::AccessorWithinBounds {
				start,
				expected_length,
				payload,
			} => write!(
				f,
				"within binary chunk bounds (start {start}, expected length {expected_length}, chunk size {payload})"
			),
			Self::AccessorOutOfBounds {
				start,
				expected_length,
				payload,
			} => write!(
				f,
				"accessor data extends beyond binary chunk (start {start}, expected length {expected_length}, chunk size {payload})"
			),
		}
	}
}

/// One audit observation about a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
	/// Severity derived from `kind`.
	pub severity: Severity,
	/// Record the finding is about.
	pub subject: Subject,
	/// Structured observation.
	pub kind: FindingKind,
}

impl Finding {
	/// Build a finding, deriving severity from the kind.
	pub fn new(subject: Subject, kind: FindingKind) -> Self {
		Self {
			severity: kind.severity(),
			subject,
			kind,
		}
	}

	/// Whether this finding is a warning.
	pub fn is_warning(&self) -> bool {
		self.severity == Severity::Warning
	}

	/// Human-readable message.
	pub fn message(&self) -> String {
		self.kind.to_string()
	}
}

impl fmt::Display for Finding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}: {}", self.severity.as_str(), self.subject, self.kind)
	}
}
