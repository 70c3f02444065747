mod readers;
mod scores;
mod util;

pub use readers::open_text_reader;
pub use scores::{read_matrix, read_scores};
pub use util::{handle_error_and_exit, Result};
