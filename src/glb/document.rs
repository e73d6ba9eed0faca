use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::glb::{GlbError, Result};

/// Entry of the top-level `buffers` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
	/// Declared buffer size.
	pub byte_length: u64,
	/// External location, absent for the embedded buffer.
	#[serde(default)]
	pub uri: Option<String>,
}

/// Entry of the top-level `bufferViews` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
	/// Index into `buffers`.
	pub buffer: usize,
	/// Start of the view inside its buffer.
	#[serde(default)]
	pub byte_offset: u64,
	/// Length of the view.
	pub byte_length: u64,
}

/// Entry of the top-level `accessors` array.
///
/// Sizing fields keep their raw JSON values. They are only required, and
/// decoded into [`ComponentType`](crate::glb::ComponentType) and
/// [`AccessorType`](crate::glb::AccessorType), once an accessor reaches the
/// bounds check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
	/// Index into `bufferViews`; absent for zero-initialized accessors.
	#[serde(default)]
	pub buffer_view: Option<usize>,
	/// Start of the accessor inside its buffer view.
	#[serde(default)]
	pub byte_offset: u64,
	/// Raw `componentType` value.
	#[serde(default)]
	pub component_type: Option<Value>,
	/// Raw `type` value.
	#[serde(default, rename = "type")]
	pub kind: Option<Value>,
	/// Raw `count` value.
	#[serde(default)]
	pub count: Option<Value>,
}

/// One array entry, either decoded or kept as a per-index failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<T> {
	/// Entry decoded with all required fields.
	Valid(T),
	/// Entry missing a required field or carrying a wrong JSON type.
	Malformed {
		/// Decoder diagnostic.
		reason: String,
	},
}

impl<T: DeserializeOwned> Record<T> {
	fn decode(value: &Value) -> Self {
		match T::deserialize(value) {
			Ok(item) => Self::Valid(item),
			Err(err) => Self::Malformed { reason: err.to_string() },
		}
	}
}

impl<T> Record<T> {
	/// Decoded entry, if any.
	pub fn valid(&self) -> Option<&T> {
		match self {
			Self::Valid(item) => Some(item),
			Self::Malformed { .. } => None,
		}
	}
}

/// Typed view of the fields the validator inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneDocument {
	/// `buffers`, empty when the key is absent.
	pub buffers: Vec<Record<Buffer>>,
	/// `bufferViews`, empty when the key is absent.
	pub buffer_views: Vec<Record<BufferView>>,
	/// `accessors`, `None` when the key is absent.
	pub accessors: Option<Vec<Record<Accessor>>>,
}

impl SceneDocument {
	/// Parse JSON chunk bytes.
	pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
		let root: Value = serde_json::from_slice(bytes).map_err(|err| GlbError::InvalidDocument { reason: err.to_string() })?;
		Self::from_value(&root)
	}

	/// Decode from an already parsed JSON tree.
	pub fn from_value(root: &Value) -> Result<Self> {
		let object = root.as_object().ok_or_else(|| GlbError::InvalidDocument {
			reason: "root is not an object".to_owned(),
		})?;

		let doc = Self {
			buffers: records(object, "buffers")?.unwrap_or_default(),
			buffer_views: records(object, "bufferViews")?.unwrap_or_default(),
			accessors: records(object, "accessors")?,
		};
		log::debug!(
			"document: buffers={} bufferViews={} accessors={:?}",
			doc.buffers.len(),
			doc.buffer_views.len(),
			doc.accessors.as_ref().map(Vec::len)
		);
		Ok(doc)
	}
}

fn records<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Result<Option<Vec<Record<T>>>> {
	match object.get(key) {
		None => Ok(None),
		Some(Value::Array(items)) => Ok(Some(items.iter().map(Record::decode).collect())),
		Some(_) => Err(GlbError::InvalidDocument {
			reason: format!("{key} is not an array"),
		}),
	}
}
