//! Plain-text outline of the view model.

use cutover_core::{ViewRow, format_date};

use std::fmt;

const INDENT: &str = "  ";
const COLLAPSED: char = '▸';
const EXPANDED: char = '▾';

/// Outline of view rows, one line per row:
///
/// ```text
/// ▾ #1 Prep [prep] todo 2024-01-01..2024-01-05 (alice)
///     #2 Backups [prep] done 2024-01-02..2024-01-03
/// ```
///
/// Rows with visible children get a `▸`/`▾` marker; leaves are padded so
/// names line up with their siblings.
pub struct TreeView<'r, 'a>(pub &'r [ViewRow<'a>]);

impl fmt::Display for TreeView<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0 {
            let task = row.task;
            let marker = match (row.has_children, task.is_expanded) {
                (false, _) => ' ',
                (true, true) => EXPANDED,
                (true, false) => COLLAPSED,
            };

            write!(
                f,
                "{}{} #{} {} [{}] {} {}..{}",
                INDENT.repeat(row.depth),
                marker,
                task.id,
                task.name,
                task.task_type.as_str(),
                task.status.as_str(),
                format_date(task.start),
                format_date(task.end),
            )?;
            if !task.owner.is_empty() {
                write!(f, " ({})", task.owner)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub fn render_tree(rows: &[ViewRow<'_>]) -> String {
    TreeView(rows).to_string()
}
