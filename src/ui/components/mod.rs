pub mod header;
pub mod results_table;
pub mod search_form;
pub mod search_page;

pub use header::Header;
pub use results_table::ResultsTable;
pub use search_form::SearchForm;
pub use search_page::SearchPage;
