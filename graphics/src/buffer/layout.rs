//! Vertex record layout description.
//!
//! A [`BufferLayout`] describes the memory shape of one vertex record: an
//! ordered list of typed elements. Element order is load-bearing, it is the
//! GPU attribute-binding order, so the layout never reorders or sorts what
//! it is given. Per-element byte offsets and the overall stride are derived
//! once, at construction, in a single forward pass.
//!
//! # Example
//!
//! ```
//! use kestrel_graphics::buffer::{BufferElement, BufferLayout, ShaderDataType};
//!
//! let layout = BufferLayout::new(vec![
//!     BufferElement::new(ShaderDataType::Float3, "a_position"),
//!     BufferElement::new(ShaderDataType::Float4, "a_color"),
//!     BufferElement::new(ShaderDataType::Float2, "a_texcoord"),
//! ]);
//!
//! assert_eq!(layout.stride(), 36);
//! let offsets: Vec<u32> = layout.iter().map(|e| e.offset).collect();
//! assert_eq!(offsets, [0, 12, 28]);
//! ```

/// Data type of a single shader attribute.
///
/// The set is closed; size and component tables are total over it, so an
/// unknown type is unrepresentable rather than a runtime assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderDataType {
    /// Single byte-sized boolean.
    Bool,
    /// Single 32-bit float.
    Float,
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
    /// Single 32-bit signed integer.
    Int,
    /// Two 32-bit signed integers.
    Int2,
    /// Three 32-bit signed integers.
    Int3,
    /// Four 32-bit signed integers.
    Int4,
    /// 3x3 matrix of 32-bit floats.
    Mat3,
    /// 4x4 matrix of 32-bit floats.
    Mat4,
}

impl ShaderDataType {
    /// Size in bytes of one value of this type.
    pub fn size(&self) -> u32 {
        match self {
            Self::Bool => 1,
            Self::Float => 4,
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
            Self::Int => 4,
            Self::Int2 => 8,
            Self::Int3 => 12,
            Self::Int4 => 16,
            Self::Mat3 => 36,
            Self::Mat4 => 64,
        }
    }

    /// Number of scalar components in one value of this type.
    pub fn component_count(&self) -> u32 {
        match self {
            Self::Bool => 1,
            Self::Float => 1,
            Self::Float2 => 2,
            Self::Float3 => 3,
            Self::Float4 => 4,
            Self::Int => 1,
            Self::Int2 => 2,
            Self::Int3 => 3,
            Self::Int4 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }
}

/// A single element of a vertex record.
///
/// Size and component count are derived from the type at construction;
/// the offset starts at zero and is filled in by the owning
/// [`BufferLayout`]. Callers never supply offsets by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferElement {
    /// Data type of this element.
    pub data_type: ShaderDataType,
    /// Shader-facing attribute name, diagnostic only.
    pub name: String,
    /// Size in bytes, derived from `data_type`.
    pub size: u32,
    /// Byte offset from the start of the record, computed by the layout.
    pub offset: u32,
    /// Number of scalar components, derived from `data_type`.
    pub components: u32,
    /// Whether integer data is normalized to the 0..1 / -1..1 range.
    pub normalized: bool,
}

impl BufferElement {
    /// Create an element of the given type and attribute name.
    pub fn new(data_type: ShaderDataType, name: impl Into<String>) -> Self {
        Self {
            data_type,
            name: name.into(),
            size: data_type.size(),
            offset: 0,
            components: data_type.component_count(),
            normalized: false,
        }
    }

    /// Mark integer data as normalized.
    pub fn with_normalized(mut self) -> Self {
        self.normalized = true;
        self
    }
}

/// Ordered description of one vertex record.
///
/// Holds elements in the exact order given at construction and the derived
/// stride. Elements are immutable afterwards; changing the record shape
/// means building a new layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BufferLayout {
    elements: Vec<BufferElement>,
    stride: u32,
}

impl BufferLayout {
    /// Build a layout from elements in attribute-binding order.
    ///
    /// Offsets and stride are computed here, exactly once: each element's
    /// offset is the sum of the sizes of all preceding elements, and the
    /// stride is the sum of all element sizes.
    pub fn new(elements: Vec<BufferElement>) -> Self {
        let mut layout = Self {
            elements,
            stride: 0,
        };
        layout.compute_offsets_and_stride();
        layout
    }

    /// Total byte size of one vertex record.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Elements in attribute-binding order.
    pub fn elements(&self) -> &[BufferElement] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the layout describes no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements in attribute-binding order.
    pub fn iter(&self) -> std::slice::Iter<'_, BufferElement> {
        self.elements.iter()
    }

    // Single forward pass in element order. Idempotent: re-running over an
    // unchanged sequence produces the same offsets and stride.
    fn compute_offsets_and_stride(&mut self) {
        let mut offset = 0;
        self.stride = 0;
        for element in &mut self.elements {
            element.offset = offset;
            offset += element.size;
            self.stride += element.size;
        }
    }
}

impl<'a> IntoIterator for &'a BufferLayout {
    type Item = &'a BufferElement;
    type IntoIter = std::slice::Iter<'a, BufferElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<BufferElement> for BufferLayout {
    fn from_iter<I: IntoIterator<Item = BufferElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
