#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use prorator::application::services::EstimateService;
use prorator::domain::WorkbookLayout;
use prorator::infrastructure::recalc::NoopRecalculator;
use prorator::state::AppState;
use tempfile::TempDir;

pub const TOTALS: [f64; 3] = [3100.0, 4650.5, 12_400.0];

/// Default layout pointed at `estimate_model.xlsx` inside `dir`.
pub fn layout_in(dir: &Path) -> WorkbookLayout {
    WorkbookLayout {
        template_path: dir.join("estimate_model.xlsx"),
        ..WorkbookLayout::default()
    }
}

/// Writes a workbook whose output cells already hold `totals`.
pub fn write_template(layout: &WorkbookLayout, totals: [f64; 3]) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.new_sheet(&layout.sheet_name).unwrap();

    sheet.get_cell_mut("B2").set_value_string("Client / Project");
    sheet.get_cell_mut("B3").set_value_string("Property Address");
    sheet.get_cell_mut("B6").set_value_string("Square Footage");
    sheet
        .get_cell_mut(layout.outputs.basic.as_str())
        .set_value_number(totals[0]);
    sheet
        .get_cell_mut(layout.outputs.gold.as_str())
        .set_value_number(totals[1]);
    sheet
        .get_cell_mut(layout.outputs.platinum.as_str())
        .set_value_number(totals[2]);

    umya_spreadsheet::writer::xlsx::write(&book, &layout.template_path).unwrap();
}

/// State backed by a fixture workbook and the no-op engine.
///
/// The returned `TempDir` must outlive the state.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let layout = layout_in(dir.path());
    write_template(&layout, TOTALS);

    (state_for(layout), dir)
}

/// State whose template path does not exist.
pub fn create_missing_template_state() -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let layout = layout_in(dir.path());

    (state_for(layout), dir)
}

fn state_for(layout: WorkbookLayout) -> AppState {
    let service = EstimateService::new(layout, Arc::new(NoopRecalculator::new()));
    AppState::new(Arc::new(service))
}
