mod active_file;
mod notification;
mod outcome;
mod position;

pub use active_file::ActiveFile;
pub use notification::Notification;
pub use outcome::{EnvironmentReport, Execution, Outcome};
pub use position::Position;
