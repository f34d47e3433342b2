//! Header detection.
//!
//! Guesses whether the first row of a table is a header by comparing it with
//! the rows after it. Each column whose data cells agree on a kind casts a
//! vote: a header cell that does not fit that kind votes "header", one that
//! fits votes "data". Columns with disagreeing data cells abstain.

/// Data rows inspected after the first row.
pub const SNIFF_ROWS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellKind {
    Integer,
    Float,
    Length(usize),
}

impl CellKind {
    fn of(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.parse::<i64>().is_ok() {
            Self::Integer
        } else if trimmed.parse::<f64>().is_ok() {
            Self::Float
        } else {
            Self::Length(cell.chars().count())
        }
    }

    fn accepts(self, cell: &str) -> bool {
        match self {
            Self::Integer => cell.trim().parse::<i64>().is_ok(),
            Self::Float => cell.trim().parse::<f64>().is_ok(),
            Self::Length(len) => cell.chars().count() == len,
        }
    }
}

/// Whether `rows[0]` looks like a header.
///
/// Fewer than two rows never count as having a header.
pub fn sniff_header<S: AsRef<str>>(rows: &[Vec<S>]) -> bool {
    let Some((header, data)) = rows.split_first() else {
        return false;
    };
    let width = header.len();

    // None = not seen yet, Some(None) = inconsistent, Some(Some(kind)) = agreed.
    let mut kinds: Vec<Option<Option<CellKind>>> = vec![None; width];
    for row in data.iter().take(SNIFF_ROWS).filter(|row| row.len() == width) {
        for (slot, cell) in kinds.iter_mut().zip(row) {
            let kind = CellKind::of(cell.as_ref());
            *slot = match *slot {
                None => Some(Some(kind)),
                Some(Some(seen)) if seen == kind => Some(Some(seen)),
                _ => Some(None),
            };
        }
    }

    let votes: i64 = kinds
        .iter()
        .zip(header)
        .filter_map(|(slot, cell)| match slot {
            Some(Some(kind)) => Some(if kind.accepts(cell.as_ref()) { -1 } else { 1 }),
            _ => None,
        })
        .sum();

    votes > 0
}
