mod pretty_reporter;
pub use self::pretty_reporter::*;

mod summary;
pub use self::summary::*;
