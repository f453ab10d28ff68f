mod parser;
mod path;

pub use parser::parse_filepath_with_position;
pub use path::{absolutize, normalize};
