use cutover_core::{DateRange, DependencyIssue, TimelineBar, ViewRow};

use serde::Serialize;

/// List rows and timeline bars; `bars[i]` sits on the row of `rows[i]`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse<'a> {
    pub rows: Vec<ViewRow<'a>>,
    pub range: DateRange,
    pub day_count: i64,
    pub day_width_px: u32,
    pub bars: Vec<TimelineBar>,
    pub dependency_issues: Vec<DependencyIssue>,
}
