use std::fmt;

/// Identifies a data row. Selection state refers to rows by this id.
///
/// By default a row is identified by its index in the data slice,
/// see [`crate::DataGrid::row_id`] to key rows by their content instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<usize> for RowId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

impl From<&str> for RowId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for RowId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the current page, as handed out by [`crate::DataTable::page_rows`].
#[derive(Debug)]
pub struct RowRef<'a, R> {
    /// Index into the full data slice.
    pub index: usize,
    pub id: RowId,
    pub data: &'a R,
}

impl<R> Clone for RowRef<'_, R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            id: self.id.clone(),
            data: self.data,
        }
    }
}
