//! Query-parameter DTOs for the proxy API
//!
//! Defines the structures extracted from inbound query strings, including
//! the offset/count slice request applied to paginated results.

use serde::Deserialize;

/// Offset/count window applied to a cached or freshly fetched list.
///
/// `count = 0` means "everything from `offset` to the end", not "zero
/// elements". Both default to 0 when absent from the query string.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    /// Index of the first element to return
    #[serde(default)]
    pub offset: usize,
    /// Maximum number of elements to return (0 = unbounded)
    #[serde(default)]
    pub count: usize,
}

impl PageQuery {
    /// Applies the window to `items` as a pure view; the underlying sequence
    /// is never touched.
    pub fn slice<'a>(&self, items: &'a [String]) -> &'a [String] {
        let start = self.offset.min(items.len());
        let end = if self.count == 0 {
            items.len()
        } else {
            self.offset.saturating_add(self.count).min(items.len())
        };
        &items[start..end]
    }
}

/// Query for the method-by-name lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodLookupQuery {
    /// Fully qualified class name
    pub class_name: String,
    /// Method name within the class
    pub method_name: String,
}

/// Query for single-class resources (source, smali).
#[derive(Debug, Clone, Deserialize)]
pub struct ClassQuery {
    /// Fully qualified class name
    pub class_name: String,
}

/// Query for paginated per-class listings (methods, fields).
#[derive(Debug, Clone, Deserialize)]
pub struct ClassPageQuery {
    /// Fully qualified class name
    pub class_name: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub count: usize,
}

impl ClassPageQuery {
    /// The slice window carried by this query.
    pub fn page(&self) -> PageQuery {
        PageQuery {
            offset: self.offset,
            count: self.count,
        }
    }
}

/// Query for the paginated method-name search.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodSearchQuery {
    /// Method name to search for
    pub method_name: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub count: usize,
}

impl MethodSearchQuery {
    /// The slice window carried by this query.
    pub fn page(&self) -> PageQuery {
        PageQuery {
            offset: self.offset,
            count: self.count,
        }
    }
}

/// Query for fetching a named resource file.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceQuery {
    /// Resource file name as listed by the plugin
    pub resource_name: String,
}
