mod error;
mod opt;
mod path_read;
mod process;

pub use error::Error;
pub use opt::Opt;
pub use path_read::PathRead;
pub use process::{Report, Session};
