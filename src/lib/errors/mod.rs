mod reification_error;
pub use self::reification_error::*;

mod declaration_error;
pub use self::declaration_error::*;
