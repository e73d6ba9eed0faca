mod bytes;
mod chunk;
mod component;
mod container;
mod document;
mod embed;
mod error;
mod finding;
mod header;
mod validate;

/// Chunk framing types.
pub use chunk::{Chunk, ChunkKind};
/// Closed accessor enumerations.
pub use component::{AccessorType, ComponentType};
/// Container reader and its options.
pub use container::{GlbContainer, ReadOptions};
/// Typed scene document records.
pub use document::{Accessor, Buffer, BufferView, Record, SceneDocument};
/// Embedded-buffer resolution policies.
pub use embed::{EmbedPolicy, EmbeddedIndex, FirstBufferEmbedded};
/// Error and result aliases.
pub use error::{GlbError, Result};
/// Audit findings.
pub use finding::{Finding, FindingKind, Severity, Subject};
/// Container header representation.
pub use header::GlbHeader;
/// Bounds validation entry points.
pub use validate::{Validator, expected_length, validate};
