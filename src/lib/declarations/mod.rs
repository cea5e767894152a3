//! Declaration files: classes and type variables written down in YAML, a small
//! language for type expressions over them, and checks to run.

mod lexer;
pub use self::lexer::*;

mod parser;
pub use self::parser::*;

mod scope;
pub use self::scope::*;

mod check;
pub use self::check::*;
