use serde_json::{Value, json};

use crate::glb::{
	AccessorType, ComponentType, EmbeddedIndex, Finding, FindingKind, GlbError, SceneDocument, Severity, Subject, Validator,
	expected_length, validate,
};

fn run(doc: Value, payload_len: usize) -> Vec<Finding> {
	let doc = SceneDocument::from_value(&doc).expect("document decodes");
	validate(&doc, &vec![0_u8; payload_len]).expect("validation runs")
}

fn warnings(findings: &[Finding]) -> Vec<&Finding> {
	findings.iter().filter(|item| item.is_warning()).collect()
}

#[test]
fn embedded_buffer_length_mismatch_warns_with_both_values() {
	let findings = run(json!({"buffers": [{"byteLength": 100}]}), 90);

	assert_eq!(findings.len(), 1);
	assert_eq!(findings[0].severity, Severity::Warning);
	assert_eq!(findings[0].subject, Subject::Buffer(0));
	assert_eq!(findings[0].kind, FindingKind::BufferLengthMismatch { declared: 100, actual: 90 });
	assert_eq!(findings[0].message(), "declared length (100) does not match actual binary chunk length (90)");
}

#[test]
fn embedded_buffer_exact_length_is_info() {
	let findings = run(json!({"buffers": [{"byteLength": 90}]}), 90);
	assert_eq!(findings[0].kind, FindingKind::BufferLengthMatches { declared: 90 });
	assert_eq!(findings[0].severity, Severity::Info);
}

#[test]
fn non_embedded_buffers_are_always_skipped() {
	let findings = run(
		json!({"buffers": [{"byteLength": 4}, {"byteLength": 4}, {"byteLength": 999999, "uri": "other.bin"}]}),
		4,
	);

	assert_eq!(findings.len(), 3);
	assert_eq!(findings[1].kind, FindingKind::ExternalBufferSkipped { declared: 4, uri: None });
	assert_eq!(
		findings[2].kind,
		FindingKind::ExternalBufferSkipped {
			declared: 999999,
			uri: Some("other.bin".to_owned()),
		}
	);
	assert_eq!(findings[2].message(), "not the embedded buffer (declared length 999999, uri other.bin), skipped");
	assert!(warnings(&findings).is_empty());
}

#[test]
fn buffer_view_exact_fit_is_valid() {
	let findings = run(json!({"bufferViews": [{"buffer": 0, "byteLength": 64}, {"buffer": 0, "byteOffset": 60, "byteLength": 4}]}), 64);

	assert_eq!(findings.len(), 2);
	assert!(findings.iter().all(|item| matches!(item.kind, FindingKind::ViewWithinBounds { .. })));
}

#[test]
fn buffer_view_one_past_end_warns() {
	let findings = run(json!({"bufferViews": [{"buffer": 0, "byteOffset": 1, "byteLength": 64}]}), 64);

	assert_eq!(
		findings[0].kind,
		FindingKind::ViewOutOfBounds {
			byte_offset: 1,
			byte_length: 64,
			payload: 64,
		}
	);
	assert_eq!(findings[0].severity, Severity::Warning);
}

#[test]
fn buffer_view_offsets_do_not_wrap() {
	let findings = run(json!({"bufferViews": [{"buffer": 0, "byteOffset": u64::MAX, "byteLength": 2}]}), 64);
	assert!(matches!(findings[0].kind, FindingKind::ViewOutOfBounds { .. }));
}

#[test]
fn buffer_view_on_external_buffer_is_skipped() {
	let findings = run(json!({"bufferViews": [{"buffer": 1, "byteLength": 1000}]}), 8);
	assert_eq!(findings[0].kind, FindingKind::ViewExternalSkipped { buffer: 1 });
}

#[test]
fn float_vec3_accessor_expects_120_bytes() {
	assert_eq!(expected_length(10, ComponentType::Float, AccessorType::Vec3), 120);

	let findings = run(
		json!({
			"bufferViews": [{"buffer": 0, "byteLength": 120}],
			"accessors": [{"bufferView": 0, "componentType": 5126, "type": "VEC3", "count": 10}]
		}),
		120,
	);

	assert_eq!(findings[1].subject, Subject::Accessor(0));
	assert_eq!(
		findings[1].kind,
		FindingKind::AccessorWithinBounds {
			start: 0,
			expected_length: 120,
			payload: 120,
		}
	);
}

#[test]
fn accessor_start_adds_view_and_accessor_offsets() {
	let findings = run(
		json!({
			"bufferViews": [{"buffer": 0, "byteOffset": 16, "byteLength": 48}],
			"accessors": [{"bufferView": 0, "byteOffset": 8, "componentType": 5123, "type": "SCALAR", "count": 21}]
		}),
		64,
	);

	assert_eq!(
		findings[1].kind,
		FindingKind::AccessorOutOfBounds {
			start: 24,
			expected_length: 42,
			payload: 64,
		}
	);
}

#[test]
fn accessor_skip_cases_are_info() {
	let findings = run(
		json!({
			"buffers": [{"byteLength": 8}, {"byteLength": 8, "uri": "x.bin"}],
			"bufferViews": [{"buffer": 1, "byteLength": 8}],
			"accessors": [
				{"componentType": 5126, "type": "SCALAR", "count": 2},
				{"bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": 2}
			]
		}),
		8,
	);

	assert_eq!(findings[3].kind, FindingKind::AccessorNoView);
	assert_eq!(findings[4].kind, FindingKind::AccessorExternalSkipped { view: 0, buffer: 1 });
	assert!(warnings(&findings).is_empty());
}

#[test]
fn external_accessor_skips_before_enum_decode() {
	let findings = run(
		json!({
			"bufferViews": [{"buffer": 2, "byteLength": 8}],
			"accessors": [{"bufferView": 0, "componentType": 1, "type": "BOGUS", "count": 2}]
		}),
		8,
	);
	assert_eq!(findings[1].kind, FindingKind::AccessorExternalSkipped { view: 0, buffer: 2 });
}

#[test]
fn dangling_buffer_view_reference_warns() {
	let findings = run(
		json!({
			"bufferViews": [{"buffer": 0}],
			"accessors": [
				{"bufferView": 7, "componentType": 5126, "type": "SCALAR", "count": 1},
				{"bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": 1}
			]
		}),
		8,
	);

	assert!(matches!(findings[0].kind, FindingKind::MalformedRecord { .. }));
	assert_eq!(findings[1].kind, FindingKind::AccessorDanglingView { view: 7 });
	assert_eq!(findings[2].kind, FindingKind::AccessorDanglingView { view: 0 });
	assert_eq!(warnings(&findings).len(), 3);
}

#[test]
fn missing_accessors_key_emits_nothing() {
	let findings = run(json!({"buffers": [{"byteLength": 0}], "bufferViews": []}), 0);
	assert_eq!(findings.len(), 1);
}

#[test]
fn unknown_component_type_is_fatal_and_keeps_earlier_findings() {
	let doc = SceneDocument::from_value(&json!({
		"buffers": [{"byteLength": 4}],
		"bufferViews": [{"buffer": 0, "byteLength": 4}],
		"accessors": [
			{"bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": 1},
			{"bufferView": 0, "componentType": 5124, "type": "SCALAR", "count": 1},
			{"bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": 1}
		]
	}))
	.expect("document decodes");
	let payload = [0_u8; 4];

	let mut findings = Vec::new();
	let err = Validator::new(&doc, &payload).run(&mut findings).expect_err("unknown code should abort");

	assert!(matches!(err, GlbError::UnknownComponentType { accessor: 1, code } if code == "5124"));
	assert_eq!(findings.len(), 3);
	assert_eq!(findings[2].subject, Subject::Accessor(0));
}

#[test]
fn unknown_accessor_type_is_fatal() {
	let doc = SceneDocument::from_value(&json!({
		"bufferViews": [{"buffer": 0, "byteLength": 4}],
		"accessors": [{"bufferView": 0, "componentType": 5126, "type": "VEC5", "count": 1}]
	}))
	.expect("document decodes");

	let err = validate(&doc, &[0_u8; 4]).expect_err("unknown tag should abort");
	assert!(matches!(err, GlbError::UnknownAccessorType { accessor: 0, tag } if tag == "VEC5"));
}

#[test]
fn passes_are_independent_of_buffer_mismatch() {
	let findings = run(
		json!({
			"buffers": [{"byteLength": 100}],
			"bufferViews": [{"buffer": 0, "byteLength": 90}, {"buffer": 0, "byteOffset": 40, "byteLength": 60}],
			"accessors": [{"bufferView": 0, "componentType": 5121, "type": "VEC2", "count": 45}]
		}),
		90,
	);

	let warned: Vec<_> = warnings(&findings).into_iter().map(|item| item.subject).collect();
	assert_eq!(warned, vec![Subject::Buffer(0), Subject::BufferView(1)]);
	assert!(matches!(findings[3].kind, FindingKind::AccessorWithinBounds { .. }));
}

#[test]
fn findings_are_ordered_and_repeatable() {
	let doc = SceneDocument::from_value(&json!({
		"accessors": [{"componentType": 5126, "type": "SCALAR", "count": 1}],
		"bufferViews": [{"buffer": 0, "byteLength": 1}],
		"buffers": [{"byteLength": 1}, {"byteLength": 2}]
	}))
	.expect("document decodes");
	let payload = [0_u8; 1];

	let first = validate(&doc, &payload).expect("first run");
	let second = validate(&doc, &payload).expect("second run");
	assert_eq!(first, second);

	let subjects: Vec<_> = first.iter().map(|item| item.subject).collect();
	assert_eq!(
		subjects,
		vec![Subject::Buffer(0), Subject::Buffer(1), Subject::BufferView(0), Subject::Accessor(0)]
	);
}

#[test]
fn policy_swap_moves_the_embedded_buffer() {
	let doc = SceneDocument::from_value(&json!({
		"buffers": [{"byteLength": 50, "uri": "a.bin"}, {"byteLength": 8}],
		"bufferViews": [{"buffer": 0, "byteLength": 50}, {"buffer": 1, "byteLength": 8}]
	}))
	.expect("document decodes");
	let payload = [0_u8; 8];

	let mut findings = Vec::new();
	Validator::new(&doc, &payload)
		.with_policy(EmbeddedIndex(1))
		.run(&mut findings)
		.expect("validation runs");

	assert_eq!(
		findings[0].kind,
		FindingKind::ExternalBufferSkipped {
			declared: 50,
			uri: Some("a.bin".to_owned()),
		}
	);
	assert_eq!(findings[1].kind, FindingKind::BufferLengthMatches { declared: 8 });
	assert_eq!(findings[2].kind, FindingKind::ViewExternalSkipped { buffer: 0 });
	assert!(matches!(findings[3].kind, FindingKind::ViewWithinBounds { .. }));
}

#[test]
fn skipped_accessors_ignore_missing_sizing_fields() {
	let findings = run(
		json!({
			"bufferViews": [{"buffer": 1, "byteLength": 8}],
			"accessors": [
				{"count": 3},
				{"bufferView": 0, "componentType": 5126, "type": "SCALAR"}
			]
		}),
		8,
	);

	assert_eq!(findings[1].kind, FindingKind::AccessorNoView);
	assert_eq!(findings[2].kind, FindingKind::AccessorExternalSkipped { view: 0, buffer: 1 });
	assert!(warnings(&findings).is_empty());
}

#[test]
fn checked_accessor_missing_sizing_field_is_malformed() {
	let findings = run(
		json!({
			"bufferViews": [{"buffer": 0, "byteLength": 8}],
			"accessors": [
				{"bufferView": 0, "componentType": 5126, "type": "SCALAR"},
				{"bufferView": 0, "type": "SCALAR", "count": 1},
				{"bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": "2"},
				{"bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": 2}
			]
		}),
		8,
	);

	assert!(matches!(&findings[1].kind, FindingKind::MalformedRecord { reason } if reason.contains("`count`")));
	assert!(matches!(&findings[2].kind, FindingKind::MalformedRecord { reason } if reason.contains("`componentType`")));
	assert!(matches!(&findings[3].kind, FindingKind::MalformedRecord { reason } if reason.contains("not an unsigned integer")));
	assert!(matches!(findings[4].kind, FindingKind::AccessorWithinBounds { .. }));
}

#[test]
fn non_u32_component_type_is_fatal() {
	for (raw, rendered) in [(json!(-1), "-1"), (json!(70000.5), "70000.5"), (json!(4294972422_u64), "4294972422")] {
		let doc = SceneDocument::from_value(&json!({
			"bufferViews": [{"buffer": 0, "byteLength": 4}],
			"accessors": [{"bufferView": 0, "componentType": raw, "type": "SCALAR", "count": 1}]
		}))
		.expect("document decodes");

		let err = validate(&doc, &[0_u8; 4]).expect_err("non-table componentType should abort");
		assert!(
			matches!(&err, GlbError::UnknownComponentType { accessor: 0, code } if code == rendered),
			"raw={rendered} err={err}"
		);
	}
}

#[test]
fn non_string_accessor_type_is_fatal() {
	let doc = SceneDocument::from_value(&json!({
		"bufferViews": [{"buffer": 0, "byteLength": 4}],
		"accessors": [{"bufferView": 0, "componentType": 5126, "type": 3, "count": 1}]
	}))
	.expect("document decodes");

	let err = validate(&doc, &[0_u8; 4]).expect_err("numeric type tag should abort");
	assert!(matches!(err, GlbError::UnknownAccessorType { accessor: 0, tag } if tag == "3"));
}
