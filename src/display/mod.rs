pub mod progress;
pub mod table;

pub use progress::ProgressSpinner;
pub use table::TableDisplay;
