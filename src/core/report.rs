use crate::domain::model::PairResult;
use crate::utils::error::{PairError, Result};

pub const HEADERS: [&str; 4] = ["Employee ID #1", "Employee ID #2", "Project ID", "Days worked"];

fn row(result: &PairResult) -> [String; 4] {
    [
        result.employee_id_1.clone(),
        result.employee_id_2.clone(),
        result.project_id.clone(),
        result.days_overlap.to_string(),
    ]
}

/// 對齊欄寬的純文字表格
pub fn render_table(results: &[PairResult]) -> String {
    if results.is_empty() {
        return "No employee pairs worked together on the same project.".to_string();
    }

    let rows: Vec<[String; 4]> = results.iter().map(row).collect();
    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(HEADERS)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for cells in &rows {
        lines.push(format_line([
            cells[0].as_str(),
            cells[1].as_str(),
            cells[2].as_str(),
            cells[3].as_str(),
        ]));
    }

    lines.join("\n")
}

pub fn to_csv(results: &[PairResult]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for result in results {
        writer.write_record(row(result))?;
    }

    writer.into_inner().map_err(|e| PairError::IoError(e.into_error()))
}

pub fn to_json(results: &[PairResult]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(results)?)
}
