//! Date axis and bar geometry for the timeline panel.

use crate::{Task, TaskId, ViewRow};

use chrono::{Days, NaiveDate};
use serde::Serialize;

pub const DEFAULT_PADDING_DAYS: u32 = 3;
pub const DEFAULT_DAY_WIDTH_PX: u32 = 40;

/// Contiguous, inclusive range of days shown on the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Earliest start to latest end over ALL tasks (filters deliberately
    /// ignored so the axis does not jump), padded on both sides.
    /// An empty collection yields `today` padded.
    pub fn spanning(tasks: &[Task], padding_days: u32, today: NaiveDate) -> Self {
        let dates = tasks.iter().flat_map(|t| [t.start, t.end]);
        let (earliest, latest) = dates.fold((None, None), |(lo, hi), d| {
            (
                Some(lo.map_or(d, |lo: NaiveDate| lo.min(d))),
                Some(hi.map_or(d, |hi: NaiveDate| hi.max(d))),
            )
        });

        let earliest = earliest.unwrap_or(today);
        let latest = latest.unwrap_or(today);
        let padding = Days::new(u64::from(padding_days));

        Self {
            start: earliest.checked_sub_days(padding).unwrap_or(earliest),
            end: latest.checked_add_days(padding).unwrap_or(latest),
        }
    }

    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Axis labels, one per day column
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Column index of `date` (negative when before the range)
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }
}

/// Horizontal placement of one task bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    pub offset_days: i64,
    pub duration_days: i64,
    pub left_px: i64,
    pub width_px: i64,
}

impl BarGeometry {
    pub fn for_task(task: &Task, range: &DateRange, day_width_px: u32) -> Self {
        let offset_days = range.offset_of(task.start);
        let duration_days = task.duration_days();
        let day_width = i64::from(day_width_px);

        Self {
            offset_days,
            duration_days,
            left_px: offset_days * day_width,
            width_px: duration_days * day_width,
        }
    }
}

/// A bar placed on the row of its list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBar {
    pub task_id: TaskId,
    pub row: usize,
    #[serde(flatten)]
    pub geometry: BarGeometry,
}

pub fn layout_bars(
    rows: &[ViewRow<'_>],
    range: &DateRange,
    day_width_px: u32,
) -> Vec<TimelineBar> {
    rows.iter()
        .enumerate()
        .map(|(row, entry)| TimelineBar {
            task_id: entry.task.id,
            row,
            geometry: BarGeometry::for_task(entry.task, range, day_width_px),
        })
        .collect()
}
