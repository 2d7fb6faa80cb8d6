use std::path::PathBuf;

use axum_test::TestServer;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use crate::{
    adapters::{routes::build_router, state::AppState},
    domain::config::server::ServerConfig,
};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// BIFF8 workbook, one sheet of 4 rows x 3 columns of numbers.
pub const SAMPLE_XLS: &[u8] = include_bytes!("../services/fixtures/four_by_three.xls");

/// Server backed by a fresh temporary upload directory. Keep the returned
/// `TempDir` alive for the duration of the test.
pub fn test_server<F>(configure: F) -> (TestServer, PathBuf, TempDir)
where
    F: FnOnce(&mut ServerConfig),
{
    let temp_dir = TempDir::new().unwrap();
    let upload_dir = temp_dir.path().join("uploaded_files");

    let mut config = ServerConfig {
        upload_dir: upload_dir.clone(),
        ..ServerConfig::default()
    };
    configure(&mut config);

    let router = build_router(AppState::from_config(config)).unwrap();
    (TestServer::new(router).unwrap(), upload_dir, temp_dir)
}

/// A workbook with one sheet of `rows` x `cols` numbers, header row included.
pub fn sample_workbook(rows: u32, cols: u16) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for col in 0..cols {
        sheet.write_string(0, col, &format!("col_{}", col)).unwrap();
    }
    for row in 1..rows {
        for col in 0..cols {
            sheet.write_number(row, col, f64::from(row) * f64::from(col)).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}
