use std::io::{self, Read};

use crate::glb::{GlbError, Result};

/// Upper bound on the initial allocation for a length-prefixed read.
const MAX_PREALLOC: u64 = 64 * 1024;

/// Forward-only reader that tracks how many bytes it has consumed.
pub struct ByteReader<R> {
	inner: R,
	pos: u64,
}

impl<R: Read> ByteReader<R> {
	/// Wrap a byte source positioned at offset 0.
	pub fn new(inner: R) -> Self {
		Self { inner, pos: 0 }
	}

	/// Return the number of bytes consumed so far.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Read exactly `n` bytes, failing with `UnexpectedEof` on a short source.
	pub fn read_vec(&mut self, n: u64, what: &'static str) -> Result<Vec<u8>> {
		let at = self.pos;
		let mut buf = Vec::with_capacity(n.min(MAX_PREALLOC) as usize);
		let got = (&mut self.inner).take(n).read_to_end(&mut buf)? as u64;
		self.pos += got;

		if got < n {
			return Err(GlbError::UnexpectedEof { what, at, need: n, got });
		}
		Ok(buf)
	}

	/// Skip the rest of the source, returning how many bytes were skipped.
	pub fn drain(&mut self) -> Result<u64> {
		let skipped = io::copy(&mut self.inner, &mut io::sink())?;
		self.pos += skipped;
		Ok(skipped)
	}

	/// Read a fixed-size byte array.
	pub fn read_array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N]> {
		let raw = self.read_vec(N as u64, what)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(&raw);
		Ok(out)
	}
}

/// Decode a little-endian `u32` from the start of `bytes`.
pub fn u32_le(bytes: &[u8]) -> u32 {
	let mut buf = [0_u8; 4];
	buf.copy_from_slice(&bytes[..4]);
	u32::from_le_bytes(buf)
}
