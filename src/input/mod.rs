pub mod history;
mod reader;

pub use history::History;
pub use reader::LineReader;
