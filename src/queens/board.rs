//! Text rendering of a queen arrangement.

use std::fmt;

/// Borrowed view of an arrangement, rendered one row per line with `Q`
/// for a queen and `.` for an empty square.
///
/// ```
/// use u_swarm::queens::Board;
///
/// let board = Board::new(&[1, 3, 0, 2]);
/// assert_eq!(board.to_string(), ".Q..\n...Q\nQ...\n..Q.\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    columns: &'a [usize],
}

impl<'a> Board<'a> {
    /// Wraps `columns`, where `columns[row]` is the queen's column.
    pub fn new(columns: &'a [usize]) -> Self {
        Self { columns }
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.columns.len()
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.columns.len();
        for &queen in self.columns {
            for col in 0..n {
                f.write_str(if col == queen { "Q" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
