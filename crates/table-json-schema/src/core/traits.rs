//! Core traits at the seam between the converter and metadata sources.

use crate::error::Result;

use super::schema::Column;

/// Supplies column metadata for a named source (usually a table).
///
/// Implementations may read from a live catalog, a configuration file or
/// an in-memory fixture. The converter only ever calls [`columns_for`] and
/// propagates its errors unchanged.
///
/// [`columns_for`]: ColumnMetadataProvider::columns_for
pub trait ColumnMetadataProvider: Send + Sync {
    /// Return the columns of `source` in declaration order.
    fn columns_for(&self, source: &str) -> Result<Vec<Column>>;
}

impl<P: ColumnMetadataProvider + ?Sized> ColumnMetadataProvider for std::sync::Arc<P> {
    fn columns_for(&self, source: &str) -> Result<Vec<Column>> {
        (**self).columns_for(source)
    }
}
