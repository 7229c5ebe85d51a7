pub mod init;
pub mod render;
pub mod session;
pub mod shell;

pub use init::{init, InitArgs};
pub use render::{render_file, RenderArgs};
pub use session::{session, SessionArgs};
