use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: impl AsRef<Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }

    pub fn into_schema_source_location(self) -> SourceLocation {
        SourceLocation::Schema(self)
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where some part of a [`Schema`](crate::Schema) came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceLocation {
    /// Implicitly defined by every GraphQL schema (e.g. `String` or
    /// `@deprecated`).
    GraphQLBuiltIn,

    /// Defined in a schema document loaded by
    /// [`SchemaBuilder`](crate::schema::SchemaBuilder).
    Schema(FilePosition),

    /// Created programmatically, usually by a visitor callback that returned a
    /// replacement node.
    Synthetic,
}
impl SourceLocation {
    pub(crate) fn from_pos(
        file: impl AsRef<Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file, pos))
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        if let Self::Schema(file_pos) = self {
            Some(file_pos)
        } else {
            None
        }
    }

    /// Produce a [`SourceLocation`] in the same file as `self` but at the
    /// position of a nested AST node.
    pub(crate) fn with_ast_position(&self, pos: &graphql_parser::Pos) -> Self {
        match self {
            Self::Schema(file_pos) =>
                Self::from_pos(file_pos.file.as_path(), *pos),
            Self::GraphQLBuiltIn | Self::Synthetic =>
                self.clone(),
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Schema(file_pos) => write!(f, "{file_pos}"),
            Self::Synthetic => write!(f, "<synthetic>"),
        }
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
