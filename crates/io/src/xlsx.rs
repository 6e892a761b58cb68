//! Excel workbook import via calamine. Cells are rendered to the same
//! string forms the text strategies produce, so the extractor sees one row
//! shape regardless of container.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

pub(crate) fn import(path: &Path) -> Result<Vec<Vec<String>>, String> {
    let mut workbook = open_workbook_auto(path).map_err(|e| format!("cannot open workbook: {e}"))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .cloned()
        .ok_or_else(|| "workbook has no sheets".to_string())?;

    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| format!("cannot read sheet '{first}': {e}"))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        let fields: Vec<String> = row.iter().map(render_cell).collect();
        if fields.iter().any(|f| !f.is_empty()) {
            rows.push(fields);
        }
    }

    if rows.is_empty() {
        return Err("workbook has no data".to_string());
    }
    Ok(rows)
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            // Integers without decimals
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => match dt.as_datetime() {
            // Date cells come out in the display form the extractor expects
            Some(t) => t.format("%Y/%m/%d").to_string(),
            None => format!("{}", dt.as_f64()),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
