mod commands;
mod session;

pub use commands::{Command, Response, Status};
pub use session::Session;
