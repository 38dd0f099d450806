//! HTTP Handlers

mod articles;
mod comments;
mod fallback;
mod topics;
mod users;

pub use articles::*;
pub use comments::*;
pub use fallback::*;
pub use topics::*;
pub use users::*;
