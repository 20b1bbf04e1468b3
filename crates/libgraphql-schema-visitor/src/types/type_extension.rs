use crate::DirectiveAnnotation;
use crate::loc;

/// A record of one `extend <kind> Name ...` declaration applied to a named
/// type.
///
/// Fields, values, members and interfaces contributed by an extension are
/// merged into the extended type itself. The directive annotations written on
/// the extension are kept here, in the order they were written, so they can be
/// distinguished from (and ordered after) those written on the primary
/// definition.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtension {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
}
impl TypeExtension {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }
}
