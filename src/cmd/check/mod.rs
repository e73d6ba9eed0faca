use std::path::PathBuf;

use glbaudit::glb::{EmbeddedIndex, Finding, GlbContainer, GlbError, ReadOptions, Result, Severity, Validator};

use crate::cmd::info::print_container;
use crate::cmd::util::{ContainerJson, container_json, emit_json};

/// Exit status when `--deny-warnings` is set and a warning was found.
pub(crate) const WARNINGS_EXIT_CODE: i32 = 3;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Reject out-of-place chunk tags and a wrong declared total length.
	#[arg(long)]
	pub strict: bool,
	/// Exit with status 3 when any warning is reported.
	#[arg(long = "deny-warnings")]
	pub deny_warnings: bool,
	/// Buffer index backed by the binary chunk.
	#[arg(long = "embedded-buffer", default_value_t = 0)]
	pub embedded_buffer: usize,
	#[arg(long)]
	pub json: bool,
}

/// Audit one container and report findings.
///
/// Findings collected before a fatal document error are printed before the
/// error is returned.
pub fn run(args: Args) -> Result<i32> {
	let Args {
		path,
		strict,
		deny_warnings,
		embedded_buffer,
		json,
	} = args;

	let container = GlbContainer::open_with(&path, &ReadOptions { strict })?;
	let doc = container.document()?;

	let mut findings = Vec::new();
	let outcome = Validator::new(&doc, container.binary_payload())
		.with_policy(EmbeddedIndex(embedded_buffer))
		.run(&mut findings);

	if json {
		emit_json(&CheckJson {
			path: path.display().to_string(),
			container: container_json(&container),
			summary: summarize(&findings),
			findings: findings.iter().map(finding_json).collect(),
			error: outcome.as_ref().err().map(GlbError::to_string),
		});
	} else {
		println!("path: {}", path.display());
		print_container(&container);
		println!("findings:");
		for finding in &findings {
			println!("  {finding}");
		}
		let summary = summarize(&findings);
		println!("warnings: {}", summary.warnings);
		println!("infos: {}", summary.infos);
	}

	outcome?;
	Ok(exit_code(&findings, deny_warnings))
}

/// Process exit status for a completed audit.
pub(crate) fn exit_code(findings: &[Finding], deny_warnings: bool) -> i32 {
	if deny_warnings && findings.iter().any(Finding::is_warning) {
		WARNINGS_EXIT_CODE
	} else {
		0
	}
}

fn summarize(findings: &[Finding]) -> SummaryJson {
	let warnings = findings.iter().filter(|item| item.severity == Severity::Warning).count();
	SummaryJson {
		warnings,
		infos: findings.len() - warnings,
	}
}

fn finding_json(finding: &Finding) -> FindingJson {
	FindingJson {
		severity: finding.severity.as_str(),
		subject: finding.subject.collection(),
		index: finding.subject.index(),
		code: finding.kind.code(),
		message: finding.message(),
	}
}

#[derive(serde::Serialize)]
struct SummaryJson {
	warnings: usize,
	infos: usize,
}

#[derive(serde::Serialize)]
struct FindingJson {
	severity: &'static str,
	subject: &'static str,
	index: usize,
	code: &'static str,
	message: String,
}

#[derive(serde::Serialize)]
struct CheckJson {
	path: String,
	container: ContainerJson,
	summary: SummaryJson,
	findings: Vec<FindingJson>,
	error: Option<String>,
}
