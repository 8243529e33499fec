//! Cell-level access to the estimate workbook.
//!
//! These functions are blocking; callers on the async runtime run them via
//! `tokio::task::spawn_blocking`. They only ever open the scratch copy, never
//! the template itself.

use std::path::Path;

use umya_spreadsheet::Spreadsheet;

use crate::domain::estimate::{EstimateError, EstimateRequest, EstimateTotals, WorkbookLayout};

/// Writes the request fields into the configured input cells and saves the file in place.
///
/// Project and address are stored as text, square footage as a number.
///
/// # Errors
///
/// - [`EstimateError::Workbook`] if the file cannot be parsed or saved
/// - [`EstimateError::SheetNotFound`] if the configured sheet is missing
pub fn write_inputs(
    path: &Path,
    layout: &WorkbookLayout,
    request: &EstimateRequest,
) -> Result<(), EstimateError> {
    let mut book = open(path)?;
    let found = sheet_names(&book);

    let sheet = book
        .get_sheet_by_name_mut(&layout.sheet_name)
        .ok_or_else(|| EstimateError::SheetNotFound {
            sheet: layout.sheet_name.clone(),
            found,
        })?;

    sheet
        .get_cell_mut(layout.inputs.project.as_str())
        .set_value_string(request.project.clone());
    sheet
        .get_cell_mut(layout.inputs.address.as_str())
        .set_value_string(request.address.clone());
    sheet
        .get_cell_mut(layout.inputs.sqft.as_str())
        .set_value_number(request.sqft);

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| EstimateError::Workbook(format!("failed to save {}: {e}", path.display())))
}

/// Reads the three package totals from the configured output cells.
///
/// # Errors
///
/// - [`EstimateError::Workbook`] if the file cannot be parsed
/// - [`EstimateError::SheetNotFound`] if the configured sheet is missing
/// - [`EstimateError::InvalidOutput`] if a total is blank or not numeric
pub fn read_totals(path: &Path, layout: &WorkbookLayout) -> Result<EstimateTotals, EstimateError> {
    let book = open(path)?;

    let sheet = book
        .get_sheet_by_name(&layout.sheet_name)
        .ok_or_else(|| EstimateError::SheetNotFound {
            sheet: layout.sheet_name.clone(),
            found: sheet_names(&book),
        })?;

    let number_at = |cell: &str| -> Result<f64, EstimateError> {
        let raw = sheet.get_value(cell);
        raw.trim()
            .parse::<f64>()
            .map_err(|_| EstimateError::InvalidOutput {
                cell: cell.to_string(),
                value: raw.clone(),
            })
    };

    Ok(EstimateTotals {
        basic_total: number_at(&layout.outputs.basic)?,
        gold_total: number_at(&layout.outputs.gold)?,
        platinum_total: number_at(&layout.outputs.platinum)?,
    })
}

/// Names of all worksheets, in workbook order.
pub fn sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect()
}

fn open(path: &Path) -> Result<Spreadsheet, EstimateError> {
    umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|e| EstimateError::Workbook(format!("failed to open {}: {e}", path.display())))
}


#[cfg(test)]
mod tests {
    use super::fixtures::{write_formula_template, write_template};
    use super::*;
    use tempfile::TempDir;

    fn layout_in(dir: &TempDir) -> WorkbookLayout {
        WorkbookLayout {
            template_path: dir.path().join("estimate_model.xlsx"),
            ..WorkbookLayout::default()
        }
    }

    fn request() -> EstimateRequest {
        EstimateRequest {
            project: "Oak Terrace HOA".to_string(),
            address: "12 Elm St".to_string(),
            sqft: 19_000.0,
        }
    }

    #[test]
    fn test_write_inputs_then_read_back() {
        let dir = TempDir::new().unwrap();
        let layout = layout_in(&dir);
        write_template(&layout.template_path, &layout, [1200.0, 1800.5, 2400.25]);

        write_inputs(&layout.template_path, &layout, &request()).unwrap();

        let book = umya_spreadsheet::reader::xlsx::read(&layout.template_path).unwrap();
        let sheet = book.get_sheet_by_name(&layout.sheet_name).unwrap();
        assert_eq!(sheet.get_value("C2"), "Oak Terrace HOA");
        assert_eq!(sheet.get_value("C3"), "12 Elm St");
        assert_eq!(sheet.get_value("C6").parse::<f64>().unwrap(), 19_000.0);
    }

    #[test]
    fn test_write_inputs_keeps_formulas() {
        let dir = TempDir::new().unwrap();
        let layout = layout_in(&dir);
        write_formula_template(&layout.template_path, &layout);

        let request = EstimateRequest {
            sqft: 50_000.0,
            ..request()
        };
        write_inputs(&layout.template_path, &layout, &request).unwrap();

        let book = umya_spreadsheet::reader::xlsx::read(&layout.template_path).unwrap();
        let sheet = book.get_sheet_by_name(&layout.sheet_name).unwrap();
        assert_eq!(sheet.get_value("C6").parse::<f64>().unwrap(), 50_000.0);

        for (cell, formula) in [("J22", "C6*0.1"), ("J23", "C6*0.15"), ("J24", "C6*0.2")] {
            let cell = sheet.get_cell(cell).unwrap();
            assert_eq!(cell.get_formula(), formula);
        }
    }

    #[test]
    fn test_read_totals() {
        let dir = TempDir::new().unwrap();
        let layout = layout_in(&dir);
        write_template(&layout.template_path, &layout, [1200.0, 1800.5, 2400.25]);

        let totals = read_totals(&layout.template_path, &layout).unwrap();
        assert_eq!(totals.basic_total, 1200.0);
        assert_eq!(totals.gold_total, 1800.5);
        assert_eq!(totals.platinum_total, 2400.25);
    }

    #[test]
    fn test_missing_sheet_lists_found_names() {
        let dir = TempDir::new().unwrap();
        let layout = layout_in(&dir);
        write_template(&layout.template_path, &layout, [1.0, 2.0, 3.0]);

        let other = WorkbookLayout {
            sheet_name: "Pricing".to_string(),
            ..layout.clone()
        };

        match write_inputs(&layout.template_path, &other, &request()) {
            Err(EstimateError::SheetNotFound { sheet, found }) => {
                assert_eq!(sheet, "Pricing");
                assert!(found.contains(&"Maintenance Estimate".to_string()));
            }
            other => panic!("expected SheetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_total_is_rejected() {
        let dir = TempDir::new().unwrap();
        let layout = layout_in(&dir);
        write_template(&layout.template_path, &layout, [1.0, 2.0, 3.0]);

        let shifted = WorkbookLayout {
            outputs: crate::domain::estimate::OutputCells {
                basic: "Z99".to_string(),
                ..layout.outputs.clone()
            },
            ..layout.clone()
        };

        assert!(matches!(
            read_totals(&layout.template_path, &shifted),
            Err(EstimateError::InvalidOutput { ref cell, .. }) if cell == "Z99"
        ));
    }

    #[test]
    fn test_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-a-workbook.xlsx");
        std::fs::write(&path, b"plain text").unwrap();

        assert!(matches!(
            read_totals(&path, &WorkbookLayout::default()),
            Err(EstimateError::Workbook(_))
        ));
    }
}
