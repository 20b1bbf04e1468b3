use crate::loc;
use crate::types::TypeAnnotation;

/// A `[T]` (or `[T]!`) [`TypeAnnotation`].
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_ref: Box<TypeAnnotation>,
    pub(super) nullable: bool,
    pub(super) ref_location: loc::SourceLocation,
}
impl ListTypeAnnotation {
    /// The [`TypeAnnotation`] of each item in this list.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
