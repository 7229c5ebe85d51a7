pub mod error;
pub mod labels;
pub mod locale;
pub mod result;
pub mod stage;

pub use error::*;
pub use labels::*;
pub use locale::*;
pub use result::*;
pub use stage::*;
