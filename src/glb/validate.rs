use crate::glb::{
	Accessor, AccessorType, Buffer, BufferView, ComponentType, EmbedPolicy, Finding, FindingKind, FirstBufferEmbedded, GlbError, Record,
	Result, SceneDocument, Subject,
};

/// Run all bounds checks with the default embedding policy.
pub fn validate(doc: &SceneDocument, payload: &[u8]) -> Result<Vec<Finding>> {
	let mut findings = Vec::new();
	Validator::new(doc, payload).run(&mut findings)?;
	Ok(findings)
}

/// Cross-checks declared sizes in a scene document against the binary payload.
///
/// Findings are appended in discovery order: buffers, then buffer views, then
/// accessors, each by index. A fatal error leaves already appended findings in
/// the caller's vector.
pub struct Validator<'a, P = FirstBufferEmbedded> {
	doc: &'a SceneDocument,
	payload: &'a [u8],
	policy: P,
}

impl<'a> Validator<'a> {
	/// Validator treating buffer 0 as the binary chunk.
	pub fn new(doc: &'a SceneDocument, payload: &'a [u8]) -> Self {
		Self {
			doc,
			payload,
			policy: FirstBufferEmbedded,
		}
	}
}

impl<'a, P: EmbedPolicy> Validator<'a, P> {
	/// Replace the embedding policy.
	pub fn with_policy<Q: EmbedPolicy>(self, policy: Q) -> Validator<'a, Q> {
		Validator {
			doc: self.doc,
			payload: self.payload,
			policy,
		}
	}

	/// Run the buffer, buffer view, and accessor passes in order.
	pub fn run(&self, out: &mut Vec<Finding>) -> Result<()> {
		self.check_buffers(out);
		self.check_buffer_views(out);
		self.check_accessors(out)
	}

	fn payload_len(&self) -> u64 {
		self.payload.len() as u64
	}

	fn check_buffers(&self, out: &mut Vec<Finding>) {
		log::debug!("checking {} buffers", self.doc.buffers.len());
		for (index, record) in self.doc.buffers.iter().enumerate() {
			let kind = match record {
				Record::Valid(buffer) => self.check_buffer(index, buffer),
				Record::Malformed { reason } => FindingKind::MalformedRecord { reason: reason.clone() },
			};
			out.push(Finding::new(Subject::Buffer(index), kind));
		}
	}

	fn check_buffer(&self, index: usize, buffer: &Buffer) -> FindingKind {
		let declared = buffer.byte_length;
		if !self.policy.is_embedded(index) {
			return FindingKind::ExternalBufferSkipped {
				declared,
				uri: buffer.uri.clone(),
			};
		}

		let actual = self.payload_len();
		if declared == actual {
			FindingKind::BufferLengthMatches { declared }
		} else {
			FindingKind::BufferLengthMismatch { declared, actual }
		}
	}

	fn check_buffer_views(&self, out: &mut Vec<Finding>) {
		log::debug!("checking {} buffer views", self.doc.buffer_views.len());
		for (index, record) in self.doc.buffer_views.iter().enumerate() {
			let kind = match record {
				Record::Valid(view) => self.check_buffer_view(view),
				Record::Malformed { reason } => FindingKind::MalformedRecord { reason: reason.clone() },
			};
			out.push(Finding::new(Subject::BufferView(index), kind));
		}
	}

	fn check_buffer_view(&self, view: &BufferView) -> FindingKind {
		if !self.policy.is_embedded(view.buffer) {
			return FindingKind::ViewExternalSkipped { buffer: view.buffer };
		}

		let end = u128::from(view.byte_offset) + u128::from(view.byte_length);
		let payload = self.payload_len();
		if end <= u128::from(payload) {
			FindingKind::ViewWithinBounds {
				byte_offset: view.byte_offset,
				byte_length: view.byte_length,
				payload,
			}
		} else {
			FindingKind::ViewOutOfBounds {
				byte_offset: view.byte_offset,
				byte_length: view.byte_length,
				payload,
			}
		}
	}

	fn check_accessors(&self, out: &mut Vec<Finding>) -> Result<()> {
		let Some(accessors) = &self.doc.accessors else {
			return Ok(());
		};

		log::debug!("checking {} accessors", accessors.len());
		for (index, record) in accessors.iter().enumerate() {
			let kind = match record {
				Record::Valid(accessor) => self.check_accessor(index, accessor)?,
				Record::Malformed { reason } => FindingKind::MalformedRecord { reason: reason.clone() },
			};
			out.push(Finding::new(Subject::Accessor(index), kind));
		}
		Ok(())
	}

	fn check_accessor(&self, index: usize, accessor: &Accessor) -> Result<FindingKind> {
		let Some(view_index) = accessor.buffer_view else {
			return Ok(FindingKind::AccessorNoView);
		};
		let Some(view) = self.doc.buffer_views.get(view_index).and_then(Record::valid) else {
			return Ok(FindingKind::AccessorDanglingView { view: view_index });
		};
		if !self.policy.is_embedded(view.buffer) {
			return Ok(FindingKind::AccessorExternalSkipped {
				view: view_index,
				buffer: view.buffer,
			});
		}

		let (Some(code), Some(tag), Some(count)) = (&accessor.component_type, &accessor.kind, &accessor.count) else {
			return Ok(FindingKind::MalformedRecord {
				reason: missing_sizing_field(accessor).to_owned(),
			});
		};
		let Some(count) = count.as_u64() else {
			return Ok(FindingKind::MalformedRecord {
				reason: format!("count {count} is not an unsigned integer"),
			});
		};

		let component = code
			.as_u64()
			.and_then(|raw| u32::try_from(raw).ok())
			.and_then(ComponentType::from_code)
			.ok_or_else(|| GlbError::UnknownComponentType {
				accessor: index,
				code: code.to_string(),
			})?;
		let shape = tag.as_str().and_then(AccessorType::from_tag).ok_or_else(|| GlbError::UnknownAccessorType {
			accessor: index,
			tag: tag.as_str().map_or_else(|| tag.to_string(), str::to_owned),
		})?;

		let start = u128::from(view.byte_offset) + u128::from(accessor.byte_offset);
		let expected_length = expected_length(count, component, shape);
		let payload = self.payload_len();

		Ok(if start + expected_length <= u128::from(payload) {
			FindingKind::AccessorWithinBounds {
				start,
				expected_length,
				payload,
			}
		} else {
			FindingKind::AccessorOutOfBounds {
				start,
				expected_length,
				payload,
			}
		})
	}
}

fn missing_sizing_field(accessor: &Accessor) -> &'static str {
	if accessor.component_type.is_none() {
		"missing field `componentType`"
	} else if accessor.kind.is_none() {
		"missing field `type`"
	} else {
		"missing field `count`"
	}
}

/// Byte length of `count` elements of the given component type and shape.
pub fn expected_length(count: u64, component: ComponentType, shape: AccessorType) -> u128 {
	u128::from(count) * u128::from(component.size()) * u128::from(shape.component_count())
}

#[cfg(test)]
mod tests;
