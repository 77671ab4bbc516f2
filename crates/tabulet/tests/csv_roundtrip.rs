//! End-to-end test for CSV export/import roundtrip

use tabulet::prelude::*;

/// Test that a table survives a write-to-disk/read-back cycle
#[test]
fn test_roundtrip_through_file() {
    let mut sheet = Spreadsheet::new();
    sheet.create_table("inventory").unwrap();

    let table = sheet.active_table_mut().unwrap();
    table.add_column("Qty");
    table.add_column("Price");
    table.add_row("bolts");
    table.add_row("nuts");
    table.set_cell("bolts", "Qty", "40").unwrap();
    table.set_cell("bolts", "Price", "0.10").unwrap();
    table.set_cell("nuts", "Qty", "15").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.csv");
    CsvWriter::write_file(table, &path, &CsvWriteOptions::default()).unwrap();

    let back = CsvReader::read_file(&path, "inventory", &CsvReadOptions::default()).unwrap();
    assert_eq!(back.columns(), sheet.active_table().unwrap().columns());
    assert_eq!(back.cell("bolts", "Qty").unwrap(), "40");
    assert_eq!(back.cell("bolts", "Price").unwrap(), "0.10");
    assert_eq!(back.cell("nuts", "Qty").unwrap(), "15");
    // the missing cell comes back as empty text, same as in memory
    assert_eq!(back.cell("nuts", "Price").unwrap(), "");

    // reimporting replaces the live table and keeps row order
    sheet.insert_table(back);
    let rows: Vec<&str> = sheet
        .active_table()
        .unwrap()
        .rows()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(rows, vec!["bolts", "nuts"]);
}
