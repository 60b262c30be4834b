use super::write_atomic;
use crate::error::OutputError;
use crate::parser::PlanRecord;
use std::path::Path;

/// A column of the plan table. Header names are kept in French.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Title,
    Summary,
    Status,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "id_plan",
            Column::Title => "titre",
            Column::Summary => "résumé",
            Column::Status => "statut_migration",
        }
    }

    fn value<'a>(&self, record: &'a PlanRecord) -> &'a str {
        match self {
            Column::Id => &record.id,
            Column::Title => &record.title,
            Column::Summary => &record.summary,
            Column::Status => &record.status,
        }
    }

    /// `id | title | [summary |] status`
    pub fn layout(include_summary: bool) -> Vec<Column> {
        if include_summary {
            vec![Column::Id, Column::Title, Column::Summary, Column::Status]
        } else {
            vec![Column::Id, Column::Title, Column::Status]
        }
    }
}

/// Render records as a Markdown pipe-table, rows in the given order
pub fn render_table(records: &[PlanRecord], columns: &[Column]) -> String {
    let mut content = String::new();

    let header: Vec<&str> = columns.iter().map(|c| c.header()).collect();
    content.push_str(&format!("| {} |\n", header.join(" | ")));

    let separator: Vec<String> = columns
        .iter()
        .map(|c| "-".repeat(c.header().chars().count() + 2))
        .collect();
    content.push_str(&format!("|{}|\n", separator.join("|")));

    for record in records {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape_cell(c.value(record)))
            .collect();
        content.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    content
}

/// Render and write the table, replacing any previous file
pub fn write_table(
    path: &Path,
    records: &[PlanRecord],
    columns: &[Column],
) -> Result<(), OutputError> {
    let content = render_table(records, columns);
    write_atomic(path, content.as_bytes())
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
