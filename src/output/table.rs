/// Rows handed to the output renderers
///
/// The first row is the header; every mode produces its results in this
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Body rows, header excluded
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Header followed by the body rows
    pub fn all_rows(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }

    /// Widest cell per column, header included
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in self.all_rows() {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows_starts_with_header() {
        let mut table = Table::new(["Status", "Amount"]);
        table.push_row(["Final", "3"]);

        let rows: Vec<&[String]> = table.all_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["Status", "Amount"]);
        assert_eq!(rows[1], ["Final", "3"]);
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_column_widths_count_characters() {
        let mut table = Table::new(["a", "bb"]);
        table.push_row(["ééé", "c"]);

        assert_eq!(table.column_widths(), vec![3, 2]);
    }
}
