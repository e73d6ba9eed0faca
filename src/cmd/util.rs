use serde::Serialize;

use glbaudit::glb::GlbContainer;

/// Pretty-print a value as JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

/// Render a chunk type tag as `0x`-prefixed hex.
pub(crate) fn tag_hex(tag: u32) -> String {
	format!("0x{tag:08x}")
}

#[derive(Serialize)]
pub(crate) struct ChunkJson {
	pub index: usize,
	pub kind: &'static str,
	pub tag: String,
	pub length: u32,
}

#[derive(Serialize)]
pub(crate) struct ContainerJson {
	pub magic: String,
	pub version: u32,
	pub total_length: u32,
	pub consumed: u64,
	pub stream_length: u64,
	pub total_length_matches: bool,
	pub chunks: Vec<ChunkJson>,
}

/// Summarize header and chunk framing for JSON output.
pub(crate) fn container_json(container: &GlbContainer) -> ContainerJson {
	ContainerJson {
		magic: String::from_utf8_lossy(&container.header.magic).into_owned(),
		version: container.header.version,
		total_length: container.header.total_length,
		consumed: container.consumed,
		stream_length: container.stream_length,
		total_length_matches: container.total_length_matches(),
		chunks: [&container.json, &container.bin]
			.into_iter()
			.enumerate()
			.map(|(index, chunk)| ChunkJson {
				index,
				kind: chunk.kind.as_str(),
				tag: tag_hex(chunk.kind.tag()),
				length: chunk.length,
			})
			.collect(),
	}
}
