//! Tab-separated rendering contract for report rows.

/// A row type that can be printed as a tab-separated table.
///
/// Reports print one header line of column names followed by one line
/// per row, in result-set order.
pub trait Tabular {
    /// Column names, printed once as the header line.
    fn columns() -> &'static [&'static str];

    /// Cell values for this row, one per column.
    fn cells(&self) -> Vec<String>;
}
