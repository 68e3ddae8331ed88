mod loader;
mod parser;

pub use loader::{BankDocument, ROUND3_TEXT, load_bank_from_path};
pub use parser::{ParsedBank, parse_bank};
