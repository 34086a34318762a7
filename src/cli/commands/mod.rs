//! Command implementations

mod assign;
mod context;
mod init;
mod task;

pub use assign::assign;
pub use init::init;
pub use task::task;
