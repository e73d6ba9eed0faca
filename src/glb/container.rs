use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::glb::bytes::ByteReader;
use crate::glb::{Chunk, ChunkKind, GlbError, GlbHeader, Result, SceneDocument};

/// Behavior switches for container framing checks.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
	/// Reject chunk type tags out of position and a header length that
	/// disagrees with the framed size.
	pub strict: bool,
}

/// Decoded container: header plus the JSON and binary chunks.
#[derive(Debug, Clone)]
pub struct GlbContainer {
	/// Fixed 12-byte header.
	pub header: GlbHeader,
	/// First chunk, expected to carry the scene document.
	pub json: Chunk,
	/// Second chunk, expected to carry the embedded buffer.
	pub bin: Chunk,
	/// Bytes framed by the header and the first two chunks.
	pub consumed: u64,
	/// Bytes in the whole source, trailing chunks included.
	pub stream_length: u64,
}

impl GlbContainer {
	/// Read and decode the file at `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, &ReadOptions::default())
	}

	/// Read and decode the file at `path` with explicit options.
	pub fn open_with(path: impl AsRef<Path>, opt: &ReadOptions) -> Result<Self> {
		let file = File::open(path)?;
		Self::read_with(BufReader::new(file), opt)
	}

	/// Decode from an in-memory byte slice.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Self::read(bytes)
	}

	/// Decode from a forward-only byte source.
	pub fn read(source: impl Read) -> Result<Self> {
		Self::read_with(source, &ReadOptions::default())
	}

	/// Decode from a forward-only byte source with explicit options.
	///
	/// Only the header and the first two chunks are decoded. The rest of the
	/// source is skipped to measure the stream length.
	pub fn read_with(source: impl Read, opt: &ReadOptions) -> Result<Self> {
		let mut reader = ByteReader::new(source);
		let header = GlbHeader::read(&mut reader)?;
		log::debug!("header: version={} total_length={}", header.version, header.total_length);

		let json = Chunk::read(&mut reader, 0)?;
		let bin = Chunk::read(&mut reader, 1)?;
		let consumed = reader.pos();
		let trailing = reader.drain()?;
		if trailing > 0 {
			log::debug!("skipped {trailing} bytes after the bin chunk");
		}

		let container = Self {
			header,
			json,
			bin,
			consumed,
			stream_length: reader.pos(),
		};

		container.check_framing(opt)?;
		Ok(container)
	}

	fn check_framing(&self, opt: &ReadOptions) -> Result<()> {
		for (index, chunk, expected) in [(0, &self.json, ChunkKind::Json), (1, &self.bin, ChunkKind::Bin)] {
			if chunk.kind == expected {
				continue;
			}
			if opt.strict {
				return Err(GlbError::UnexpectedChunkType {
					index,
					expected: expected.tag(),
					got: chunk.kind.tag(),
				});
			}
			log::warn!("chunk {index} has type 0x{:08x}, expected {}", chunk.kind.tag(), expected.as_str());
		}

		if !self.total_length_matches() {
			if opt.strict {
				return Err(GlbError::TotalLengthMismatch {
					declared: self.header.total_length,
					actual: self.stream_length,
				});
			}
			log::warn!(
				"declared total length {} does not match stream length {}",
				self.header.total_length,
				self.stream_length
			);
		}

		Ok(())
	}

	/// Whether the header length field equals the stream length.
	pub fn total_length_matches(&self) -> bool {
		u64::from(self.header.total_length) == self.stream_length
	}

	/// Payload of the binary chunk.
	pub fn binary_payload(&self) -> &[u8] {
		&self.bin.payload
	}

	/// Parse the JSON chunk into a scene document.
	pub fn document(&self) -> Result<SceneDocument> {
		SceneDocument::from_json_bytes(&self.json.payload)
	}
}
