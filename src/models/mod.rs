pub mod session;
pub mod target;
pub mod view;

pub use session::{Session, SessionId, SessionState};
pub use target::TargetSignature;
pub use view::{format_elapsed, View};
