use std::io::Read;

use crate::glb::Result;
use crate::glb::bytes::{ByteReader, u32_le};

/// Chunk type decoded from the 4-byte tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
	/// `JSON` scene description chunk.
	Json,
	/// `BIN\0` binary payload chunk.
	Bin,
	/// Any other tag.
	Other(u32),
}

impl ChunkKind {
	/// Little-endian tag for `JSON`.
	pub const JSON_TAG: u32 = 0x4E4F_534A;
	/// Little-endian tag for `BIN\0`.
	pub const BIN_TAG: u32 = 0x004E_4942;

	/// Classify a raw chunk type tag.
	pub fn from_tag(tag: u32) -> Self {
		match tag {
			Self::JSON_TAG => Self::Json,
			Self::BIN_TAG => Self::Bin,
			other => Self::Other(other),
		}
	}

	/// Raw tag value.
	pub fn tag(self) -> u32 {
		match self {
			Self::Json => Self::JSON_TAG,
			Self::Bin => Self::BIN_TAG,
			Self::Other(tag) => tag,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Json => "json",
			Self::Bin => "bin",
			Self::Other(_) => "other",
		}
	}
}

/// One length-prefixed, type-tagged chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
	/// Declared payload length.
	pub length: u32,
	/// Decoded type tag.
	pub kind: ChunkKind,
	/// Payload bytes, exactly `length` long.
	pub payload: Vec<u8>,
}

impl Chunk {
	/// Size of the length + type prefix.
	pub const HEADER_SIZE: usize = 8;

	pub(crate) fn read<R: Read>(reader: &mut ByteReader<R>, index: usize) -> Result<Self> {
		let (header_what, payload_what) = match index {
			0 => ("json chunk header", "json chunk payload"),
			_ => ("bin chunk header", "bin chunk payload"),
		};

		let raw: [u8; Self::HEADER_SIZE] = reader.read_array(header_what)?;
		let length = u32_le(&raw[0..4]);
		let kind = ChunkKind::from_tag(u32_le(&raw[4..8]));
		let payload = reader.read_vec(u64::from(length), payload_what)?;

		log::debug!("chunk {index}: type=0x{:08x} length={length}", kind.tag());
		Ok(Self { length, kind, payload })
	}
}
