//! Benchmark result rows

/// One row exactly as read from the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResultRow {
    /// 1-based line number in the input file (header is line 1)
    pub line: u64,
    pub algorithm: String,
    pub stabilization_time: String,
    pub total_time: String,
}

/// One benchmark observation after numeric coercion
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub line: u64,
    /// Algorithm label, shared by many rows
    pub algorithm: String,
    /// Original stabilization cell, kept for traceability
    pub stabilization_time: String,
    /// Coerced stabilization time in seconds; `None` for timeouts and malformed cells
    pub stabilization_time_numeric: Option<f64>,
    /// Coerced total time in seconds; `None` if the cell was malformed
    pub total_time: Option<f64>,
}

/// Coerced results, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose stabilization time is missing
    pub fn stabilization_missing(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.stabilization_time_numeric.is_none())
            .count()
    }

    /// Rows whose total time is missing
    pub fn total_missing(&self) -> usize {
        self.rows.iter().filter(|r| r.total_time.is_none()).count()
    }
}
