use super::formatter::format_short_date;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the task listing table, one row per task in the given order.
    pub fn tasks_table<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "STATUS", "TITLE", "DUE", "PRIORITY"]);
        for task in tasks {
            let mark = if task.completed { "[✓]" } else { "[ ]" };
            table.add_row(row![task.id, mark, task.title, format_short_date(&task.due_date), task.priority]);
        }

        table
    }

    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
        Self::tasks_table(tasks).printstd();
    }

    /// Two-column detail table for a single task.
    pub fn task_table(task: &Task) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Due Date", format_short_date(&task.due_date)]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Status", task.status()]);
        table.add_row(row!["Created", format_short_date(&task.created_date)]);

        table
    }

    pub fn task(task: &Task) {
        Self::task_table(task).printstd();
    }
}
