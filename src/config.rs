use std::env;

/// Workbook path used by the original analysis notebooks.
pub const DEFAULT_WORKBOOK_PATH: &str = "../data/eGRID2021_data.xlsx";

/// Default worksheet: 2021 state resource-level emission rates.
pub const DEFAULT_SHEET_NAME: &str = "SRL21";

#[derive(Debug, Clone)]
pub struct Config {
    pub workbook_path: String,
    pub sheet_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            workbook_path: env::var("EGRID_WORKBOOK_PATH")
                .unwrap_or_else(|_| DEFAULT_WORKBOOK_PATH.to_string()),
            sheet_name: env::var("EGRID_SHEET_NAME")
                .unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workbook_path: DEFAULT_WORKBOOK_PATH.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}
