//! Abstract shader contracts.
//!
//! A shader program is created by a backend from a vertex/fragment source
//! pair. Compilation, reflection, and the shading language itself are
//! backend concerns; this module only defines the handle contract.

/// Source pair a shader program is compiled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDescriptor {
    /// Diagnostic name, shows up in logs and backend errors.
    pub name: String,
    /// Vertex stage source.
    pub vertex_source: String,
    /// Fragment stage source.
    pub fragment_source: String,
}

impl ShaderDescriptor {
    /// Describe a shader program from its two stage sources.
    pub fn new(
        name: impl Into<String>,
        vertex_source: impl Into<String>,
        fragment_source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vertex_source: vertex_source.into(),
            fragment_source: fragment_source.into(),
        }
    }
}

/// Contract for a compiled shader program.
pub trait Shader {
    /// Make this program active for subsequent draws.
    fn bind(&self);

    /// Deactivate this program.
    fn unbind(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_construction() {
        let descriptor = ShaderDescriptor::new("flat_color", "void main() {}", "void main() {}");
        assert_eq!(descriptor.name, "flat_color");
        assert!(!descriptor.vertex_source.is_empty());
    }
}
