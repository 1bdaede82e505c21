use crate::core::actions::Report;
use crate::domain::model::Record;
use colored::Colorize;
use serde_json::Value;

pub fn banner(title: &str) -> String {
    let width = title.chars().count() + 8;
    let border = "─".repeat(width);
    let padded = format!("    {}    ", title);

    format!(
        "{}\n{}{}{}\n{}",
        format!("┌{}┐", border).blue(),
        "│".blue(),
        padded.green().bold(),
        "│".blue(),
        format!("└{}┘", border).blue(),
    )
}

pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Left-aligned text table with a header rule. Empty input gives an empty
/// string; callers report "no rows" instead.
pub fn render_table(rows: &[Record]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let columns = &first.columns;

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.values.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |values: &[String]| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(columns.as_slice()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        lines.push(format_line(row.as_slice()));
    }
    lines.join("\n")
}

pub fn render_report(report: &Report) -> String {
    match report {
        Report::Confirmation(message) => message.green().to_string(),
        Report::Table(rows) => render_table(rows),
        Report::NoRows(message) => message.yellow().to_string(),
        Report::Notice(message) => message.yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Record> {
        vec![
            Record::new(
                vec!["id".into(), "name".into()],
                vec![json!(1), json!("Engineering")],
            ),
            Record::new(
                vec!["id".into(), "name".into()],
                vec![json!(12), json!("HR")],
            ),
        ]
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(&rows());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id  name");
        assert_eq!(lines[1], "--  -----------");
        assert_eq!(lines[2], "1   Engineering");
        assert_eq!(lines[3], "12  HR");
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_null_cells_are_visible() {
        let row = Record::new(vec!["manager_id".into()], vec![Value::Null]);
        assert!(render_table(&[row]).contains("null"));
    }

    #[test]
    fn test_render_report_no_rows_is_not_a_table() {
        colored::control::set_override(false);
        let text = render_report(&Report::NoRows("No rows: the department has no employees.".into()));
        assert_eq!(text, "No rows: the department has no employees.");
    }

    #[test]
    fn test_banner_contains_title() {
        colored::control::set_override(false);
        let text = banner("Employee Manager");
        assert!(text.contains("Employee Manager"));
        assert_eq!(text.lines().count(), 3);
    }
}
