//! Plain-text schedule grid.
//!
//! Lays a [`Schedule`] out as a fixed-width table: one block per store,
//! one or more rows per shift period, one column per day.
//!
//! ```text
//! Store            AM            MON           TUE           ...
//!                  PM
//! ---------------------------------------------------------------
//! Downtown
//!                  AM:           Alice         Bob
//!                                Carol
//!                  PM:                         Alice
//! ```

use crate::models::{Schedule, day_code};

/// Width of the store name column.
pub const STORE_COLUMN_WIDTH: usize = 15;

/// Width of each day column (and of the shift label column).
pub const DAY_COLUMN_WIDTH: usize = 12;

const PADDING: &str = "  ";

/// Renders the schedule as a text grid.
///
/// Row `k` of a shift block holds the `k`-th employee of every day, so a
/// day with three employees spans three rows. Trailing spaces are trimmed.
pub fn render_grid(schedule: &Schedule) -> String {
    let mut lines: Vec<String> = Vec::new();
    let indent = " ".repeat(STORE_COLUMN_WIDTH + PADDING.len());

    let mut header = cell("Store", STORE_COLUMN_WIDTH);
    header.push_str(&cell("AM", DAY_COLUMN_WIDTH));
    for &day in schedule.days() {
        header.push_str(&cell(day_code(day), DAY_COLUMN_WIDTH));
    }
    lines.push(header);
    lines.push(format!("{}{}", indent, cell("PM", DAY_COLUMN_WIDTH)));

    let table_width =
        STORE_COLUMN_WIDTH + (DAY_COLUMN_WIDTH + PADDING.len()) * (schedule.days().len() + 1);
    lines.push("-".repeat(table_width));

    for store in schedule.stores() {
        lines.push(store.clone());

        for &shift in schedule.shifts() {
            let cells: Vec<&[String]> = schedule
                .days()
                .iter()
                .map(|&day| schedule.get(day, shift, store))
                .collect();
            let depth = cells.iter().map(|c| c.len()).max().unwrap_or(0).max(1);

            for row in 0..depth {
                let mut line = indent.clone();
                let label = if row == 0 {
                    format!("{}:", shift.label())
                } else {
                    String::new()
                };
                line.push_str(&cell(&label, DAY_COLUMN_WIDTH));
                for employees in &cells {
                    let name = employees.get(row).map(String::as_str).unwrap_or("");
                    line.push_str(&cell(name, DAY_COLUMN_WIDTH));
                }
                lines.push(line);
            }
        }
        lines.push(String::new());
    }

    let mut out = String::new();
    for line in &lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn cell(text: &str, width: usize) -> String {
    format!("{:<width$}{}", text, PADDING, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::models::{Employee, ShiftPeriod};
    use crate::scheduling::{InOrderSampler, ScheduleEngine};
    use chrono::Weekday;

    fn schedule() -> Schedule {
        let config = SchedulerConfig::new(["Downtown", "Airport"])
            .with_days(vec![Weekday::Mon, Weekday::Tue]);
        let roster = vec![
            Employee::new("Alice")
                .with_store("Downtown")
                .with_availability(Weekday::Mon, ShiftPeriod::Am)
                .with_availability(Weekday::Tue, ShiftPeriod::Pm),
            Employee::new("Bob")
                .with_store("Downtown")
                .with_availability(Weekday::Mon, ShiftPeriod::Am),
        ];
        ScheduleEngine::new(config)
            .generate_all(&roster, &mut InOrderSampler)
            .unwrap()
    }

    #[test]
    fn test_header_lists_days() {
        let grid = render_grid(&schedule());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines[0], format!("{:<17}{:<14}{:<14}TUE", "Store", "AM", "MON"));
        assert_eq!(lines[1], format!("{:<17}PM", ""));
        assert_eq!(lines[2], "-".repeat(15 + 14 * 3));
    }

    #[test]
    fn test_stacks_multiple_employees_in_a_day_column() {
        let grid = render_grid(&schedule());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines[3], "Downtown");
        assert_eq!(lines[4], format!("{:<17}{:<14}Alice", "", "AM:"));
        assert_eq!(lines[5], format!("{:<31}Bob", ""));
        assert_eq!(lines[6], format!("{:<17}{:<14}{:<14}Alice", "", "PM:", ""));
        assert_eq!(lines[7], "");
    }

    #[test]
    fn test_empty_store_still_gets_shift_rows() {
        let grid = render_grid(&schedule());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines[8], "Airport");
        assert_eq!(lines[9], format!("{:<17}AM:", ""));
        assert_eq!(lines[10], format!("{:<17}PM:", ""));
        assert_eq!(lines.len(), 12);
    }
}
