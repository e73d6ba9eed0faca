use std::io::Read;

use crate::glb::bytes::{ByteReader, u32_le};
use crate::glb::{GlbError, Result};

/// Parsed fixed-size container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
	/// Leading tag, always `glTF` once parsed.
	pub magic: [u8; 4],
	/// Container version (2 for current producers, not enforced).
	pub version: u32,
	/// Declared total file size in bytes.
	pub total_length: u32,
}

impl GlbHeader {
	/// Header size in bytes.
	pub const SIZE: usize = 12;
	/// Required leading tag.
	pub const MAGIC: [u8; 4] = *b"glTF";

	/// Parse a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(0..Self::SIZE).ok_or(GlbError::UnexpectedEof {
			what: "header",
			at: 0,
			need: Self::SIZE as u64,
			got: bytes.len() as u64,
		})?;

		let mut magic = [0_u8; 4];
		magic.copy_from_slice(&header[0..4]);
		if magic != Self::MAGIC {
			return Err(GlbError::BadMagic { magic });
		}

		Ok(Self {
			magic,
			version: u32_le(&header[4..8]),
			total_length: u32_le(&header[8..12]),
		})
	}

	pub(crate) fn read<R: Read>(reader: &mut ByteReader<R>) -> Result<Self> {
		let raw: [u8; Self::SIZE] = reader.read_array("header")?;
		Self::parse(&raw)
	}
}
