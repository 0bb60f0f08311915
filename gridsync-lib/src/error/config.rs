//! Schema configuration error types

/// Errors raised while validating a column schema at load time.
///
/// These are fatal configuration errors: a grid must refuse to come up with
/// a malformed schema rather than render incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Two columns declare the same key.
    #[error("duplicate column key `{0}` in schema")]
    DuplicateColumn(String),

    /// A column's facet set contains the same value twice.
    #[error("duplicate facet value `{value}` for column `{column}`")]
    DuplicateFacetValue {
        /// The column declaring the facet set.
        column: String,
        /// Rendered form of the duplicated value.
        value: String,
    },

    /// Facet values declared on a column that is not filterable.
    #[error("facet values declared on non-filterable column `{0}`")]
    FacetOnUnfilterable(String),
}
