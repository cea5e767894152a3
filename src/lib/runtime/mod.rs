mod value;
pub use self::value::*;

mod object;
pub use self::object::*;

mod gate;
pub use self::gate::*;
