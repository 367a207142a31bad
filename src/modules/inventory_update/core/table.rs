/// One spreadsheet cell, as read from or written to a workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric coercion: numbers as-is, numeric text parsed, anything else `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Textual rendering used for codes. Whole numbers drop their fraction.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
        }
    }
}

/// A sheet with a header row. Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from a raw grid whose first row is the header. Blank header
    /// cells become `Unnamed: <index>`, repeated names get a `.<n>` suffix and
    /// fully empty rows are skipped. `None` for a grid without a header row.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Option<Self> {
        let mut grid = grid.into_iter();
        let header = grid.next()?;

        let mut columns: Vec<String> = Vec::with_capacity(header.len());
        for (index, cell) in header.iter().enumerate() {
            let base = match cell.display().trim() {
                "" => format!("Unnamed: {index}"),
                _ => cell.display(),
            };
            let mut name = base.clone();
            let mut suffix = 1;
            while columns.contains(&name) {
                name = format!("{base}.{suffix}");
                suffix += 1;
            }
            columns.push(name);
        }

        let mut table = Table::new(columns);
        for row in grid {
            if row.iter().all(Cell::is_empty) {
                continue;
            }
            table.push_row(row);
        }
        Some(table)
    }

    /// Stacks tables on top of each other. Columns are the union in order of
    /// first appearance; cells a table does not have are left empty.
    pub fn concat(tables: Vec<Table>) -> Table {
        let mut columns: Vec<String> = Vec::new();
        for table in &tables {
            for column in &table.columns {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }

        let mut merged = Table::new(columns);
        for table in tables {
            let positions: Vec<usize> = table
                .columns
                .iter()
                .map(|c| merged.column_index(c).unwrap_or_default())
                .collect();
            for row in table.rows {
                let mut cells = vec![Cell::Empty; merged.columns.len()];
                for (cell, position) in row.into_iter().zip(&positions) {
                    cells[*position] = cell;
                }
                merged.rows.push(cells);
            }
        }
        merged
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Pads or truncates to the column count.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn rename_columns(&mut self, rename: impl Fn(&str) -> String) {
        for column in &mut self.columns {
            *column = rename(column);
        }
    }

    /// Returns the index of `name`, appending an empty column if it is new.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(Cell::Empty);
        }
        self.columns.len() - 1
    }
}
