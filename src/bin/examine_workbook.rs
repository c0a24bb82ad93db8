use egrid_ingest::config::Config;
use egrid_ingest::loader::WorkbookLoader;
use egrid_ingest::normalize::clean_names;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_env();
    let file_path = args.get(1).cloned().unwrap_or(config.workbook_path);
    let sheet_name = args.get(2).cloned().unwrap_or(config.sheet_name);

    println!("Opening workbook: {file_path}");
    let loader = WorkbookLoader::new(file_path.as_str());

    println!("\nSheet names:");
    for (i, name) in loader.sheet_names()?.iter().enumerate() {
        println!("  {i}: {name}");
    }

    println!("\n\nExamining sheet: {sheet_name}");
    println!("{}", "=".repeat(100));

    let table = loader.load_sheet(&sheet_name)?;
    println!(
        "Dimensions: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );

    println!("\nHeader (original -> cleaned):");
    let cleaned = clean_names(table.columns());
    for (original, clean) in table.columns().iter().zip(&cleaned) {
        println!("  {original:?} -> {clean}");
    }

    println!("\nFirst 10 data rows (showing first 8 columns):");
    println!("{}", "=".repeat(100));
    for (row_idx, row) in table.rows().enumerate().take(10) {
        // Only print rows with data
        let has_data = row.iter().any(|cell| !cell.is_empty());
        if has_data {
            print!("Row {:3}: ", row_idx + 1);
            for cell in row.iter().take(8) {
                if cell.is_empty() {
                    print!("[empty] ");
                } else {
                    print!("[{cell}] ");
                }
            }
            println!();
        }
    }

    Ok(())
}
