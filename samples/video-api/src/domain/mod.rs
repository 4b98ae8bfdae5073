//! Domain layer for the video API.
//!
//! - [`Video`]: a titled link stored in a session's list
//! - [`SessionId`]: the key a list is stored under

mod session;
mod video;

pub use session::SessionId;
pub use video::Video;
