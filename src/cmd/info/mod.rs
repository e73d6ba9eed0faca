use std::path::PathBuf;

use glbaudit::glb::{GlbContainer, ReadOptions, Result};

use crate::cmd::util::{ContainerJson, container_json, emit_json, tag_hex};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Reject out-of-place chunk tags and a wrong declared total length.
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print header and chunk framing without validating the scene document.
pub fn run(args: Args) -> Result<()> {
	let Args { path, strict, json } = args;

	let container = GlbContainer::open_with(&path, &ReadOptions { strict })?;

	if json {
		emit_json(&InfoJson {
			path: path.display().to_string(),
			container: container_json(&container),
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	print_container(&container);
	Ok(())
}

/// Print the `key: value` framing summary shared with `check`.
pub(crate) fn print_container(container: &GlbContainer) {
	println!("version: {}", container.header.version);
	println!("total_length: {}", container.header.total_length);
	println!("consumed: {}", container.consumed);
	println!("stream_length: {}", container.stream_length);
	println!("total_length_matches: {}", container.total_length_matches());
	for (index, chunk) in [&container.json, &container.bin].into_iter().enumerate() {
		println!(
			"chunk{index}: type={} ({}) length={}",
			tag_hex(chunk.kind.tag()),
			chunk.kind.as_str(),
			chunk.length
		);
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	#[serde(flatten)]
	container: ContainerJson,
}
