mod input;
mod output;

pub use input::read_input;
pub use output::write_line;
