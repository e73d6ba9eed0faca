//! Shared test helpers for building synthetic `.glb` containers.

use std::io::Write;

use serde_json::Value;
use tempfile::NamedTempFile;

/// Chunk type tag for the JSON chunk (`JSON` little-endian).
pub const JSON_CHUNK: u32 = 0x4E4F_534A;
/// Chunk type tag for the binary chunk (`BIN\0` little-endian).
pub const BIN_CHUNK: u32 = 0x004E_4942;

/// Assembles container bytes chunk by chunk.
///
/// The header `length` field is computed from the emitted bytes unless
/// overridden with [`GlbBuilder::total_length`].
#[derive(Debug, Clone)]
pub struct GlbBuilder {
	magic: [u8; 4],
	version: u32,
	total_length: Option<u32>,
	chunks: Vec<(u32, Vec<u8>)>,
}

impl Default for GlbBuilder {
	fn default() -> Self {
		Self {
			magic: *b"glTF",
			version: 2,
			total_length: None,
			chunks: Vec::new(),
		}
	}
}

impl GlbBuilder {
	/// Start an empty version-2 container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Override the 4-byte magic tag.
	pub fn magic(mut self, magic: [u8; 4]) -> Self {
		self.magic = magic;
		self
	}

	/// Override the container version.
	pub fn version(mut self, version: u32) -> Self {
		self.version = version;
		self
	}

	/// Force the declared total length instead of the computed one.
	pub fn total_length(mut self, total_length: u32) -> Self {
		self.total_length = Some(total_length);
		self
	}

	/// Append a JSON chunk serialized from `doc`.
	pub fn json(self, doc: &Value) -> Self {
		let bytes = serde_json::to_vec(doc).expect("test document serializes");
		self.chunk(JSON_CHUNK, bytes)
	}

	/// Append a binary chunk carrying `bytes`.
	pub fn bin(self, bytes: impl Into<Vec<u8>>) -> Self {
		self.chunk(BIN_CHUNK, bytes.into())
	}

	/// Append a chunk with an arbitrary type tag.
	pub fn chunk(mut self, kind: u32, bytes: Vec<u8>) -> Self {
		self.chunks.push((kind, bytes));
		self
	}

	/// Emit the container bytes.
	pub fn build(&self) -> Vec<u8> {
		let mut body = Vec::new();
		for (kind, bytes) in &self.chunks {
			body.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
			body.extend_from_slice(&kind.to_le_bytes());
			body.extend_from_slice(bytes);
		}

		let total = self.total_length.unwrap_or((12 + body.len()) as u32);
		let mut out = Vec::with_capacity(12 + body.len());
		out.extend_from_slice(&self.magic);
		out.extend_from_slice(&self.version.to_le_bytes());
		out.extend_from_slice(&total.to_le_bytes());
		out.extend_from_slice(&body);
		out
	}

	/// Emit the container into a temporary `.glb` file.
	pub fn write_temp(&self) -> NamedTempFile {
		write_temp_bytes(&self.build())
	}
}

/// Write raw bytes into a temporary `.glb` file that lives as long as the handle.
pub fn write_temp_bytes(bytes: &[u8]) -> NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".glb").tempfile().expect("temp file creates");
	file.write_all(bytes).expect("temp file writes");
	file.flush().expect("temp file flushes");
	file
}

/// Build a container with one JSON chunk and one binary chunk.
pub fn glb_bytes(doc: &Value, bin: impl Into<Vec<u8>>) -> Vec<u8> {
	GlbBuilder::new().json(doc).bin(bin).build()
}
