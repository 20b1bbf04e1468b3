use std::marker::PhantomData;

/// A reference to a `TResource` held in some `TSource` (usually the
/// [`Schema`](crate::Schema)), stored by name only. Resolve it with
/// [`NamedRef::deref()`].
///
/// An [`ObjectType`](crate::types::ObjectType) whose field returns another
/// object type only stores that type's name, so cycles in the type graph need
/// no self-references. Replacing or removing the referenced type can leave a
/// dangling name behind, never a dangling pointer, and
/// [`heal_schema()`](crate::heal_schema) redirects or drops those.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>, ref_location: TRefLocation) -> Self {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    /// Where the reference was written.
    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub(crate) fn retarget(&mut self, name: impl AsRef<str>) {
        self.name = name.as_ref().to_string();
    }
}

/// Lookup by name within a `Source`, for anything a [`NamedRef`] can point at.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("Nothing named `{0}` is defined")]
    DanglingReference(String),
}
