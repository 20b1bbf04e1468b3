use crate::DerefByName;
use crate::DerefByNameError;
use crate::NamedRef;
use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a
/// [directive declaration](https://spec.graphql.org/October2021/#sec-Type-System.Directives):
/// the formal parameters of a directive and the locations at which it may
/// be annotated.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) params: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    pub fn new(
        name: impl AsRef<str>,
        locations: impl IntoIterator<Item = DirectiveLocation>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Synthetic,
            description: None,
            locations: locations.into_iter().collect(),
            name: name.as_ref().to_string(),
            params: IndexMap::new(),
            repeatable: false,
        }
    }

    /// Add a formal parameter to this declaration.
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.insert(param.name.to_string(), param);
        self
    }

    pub fn with_repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    pub(crate) fn builtins() -> Vec<Directive> {
        let builtin = |directive: Directive| Directive {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            ..directive
        };

        vec![
            builtin(
                Directive::new("deprecated", [
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::InputFieldDefinition,
                    DirectiveLocation::EnumValue,
                ]).with_param(
                    Parameter::new("reason", TypeAnnotation::named("String", true))
                        .with_default_value(ast::Value::String(
                            DEFAULT_DEPRECATION_REASON.to_string(),
                        )),
                )
            ),
            builtin(
                Directive::new("include", [
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ]).with_param(
                    Parameter::new("if", TypeAnnotation::named("Boolean", false)),
                )
            ),
            builtin(
                Directive::new("skip", [
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ]).with_param(
                    Parameter::new("if", TypeAnnotation::named("Boolean", false)),
                )
            ),
            builtin(
                Directive::new("specifiedBy", [DirectiveLocation::Scalar])
                    .with_param(
                        Parameter::new("url", TypeAnnotation::named("String", false)),
                    )
            ),
        ]
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SourceLocation::GraphQLBuiltIn)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// The [`DirectiveLocation`]s this directive may be annotated at.
    pub fn locations(&self) -> &Vec<DirectiveLocation> {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The formal parameters of this directive, in declaration order.
    pub fn params(&self) -> &IndexMap<String, Parameter> {
        &self.params
    }
}
impl DerefByName for Directive {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Directive, DerefByNameError> {
        schema.directive_defs.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}

pub(crate) const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub type NamedDirectiveRef = NamedRef<Schema, loc::SourceLocation, Directive>;
