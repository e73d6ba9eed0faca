/// Numeric component encoding of accessor elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
	/// `5120`, signed byte.
	Byte,
	/// `5121`, unsigned byte.
	UnsignedByte,
	/// `5122`, signed short.
	Short,
	/// `5123`, unsigned short.
	UnsignedShort,
	/// `5125`, unsigned int.
	UnsignedInt,
	/// `5126`, float.
	Float,
}

impl ComponentType {
	/// Decode a `componentType` code; `None` for codes outside the table.
	pub fn from_code(code: u32) -> Option<Self> {
		Some(match code {
			5120 => Self::Byte,
			5121 => Self::UnsignedByte,
			5122 => Self::Short,
			5123 => Self::UnsignedShort,
			5125 => Self::UnsignedInt,
			5126 => Self::Float,
			_ => return None,
		})
	}

	/// Size of one component in bytes.
	pub fn size(self) -> u64 {
		match self {
			Self::Byte | Self::UnsignedByte => 1,
			Self::Short | Self::UnsignedShort => 2,
			Self::UnsignedInt | Self::Float => 4,
		}
	}
}

/// Element shape of an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorType {
	/// One component.
	Scalar,
	/// Two components.
	Vec2,
	/// Three components.
	Vec3,
	/// Four components.
	Vec4,
	/// 2x2 matrix.
	Mat2,
	/// 3x3 matrix.
	Mat3,
	/// 4x4 matrix.
	Mat4,
}

impl AccessorType {
	/// Decode a `type` tag; `None` for tags outside the table.
	pub fn from_tag(tag: &str) -> Option<Self> {
		Some(match tag {
			"SCALAR" => Self::Scalar,
			"VEC2" => Self::Vec2,
			"VEC3" => Self::Vec3,
			"VEC4" => Self::Vec4,
			"MAT2" => Self::Mat2,
			"MAT3" => Self::Mat3,
			"MAT4" => Self::Mat4,
			_ => return None,
		})
	}

	/// Number of components per element.
	pub fn component_count(self) -> u64 {
		match self {
			Self::Scalar => 1,
			Self::Vec2 => 2,
			Self::Vec3 => 3,
			Self::Vec4 | Self::Mat2 => 4,
			Self::Mat3 => 9,
			Self::Mat4 => 16,
		}
	}
}
