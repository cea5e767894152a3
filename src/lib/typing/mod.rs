mod symbol;
pub use self::symbol::*;

mod type_parameter;
pub use self::type_parameter::*;

mod class;
pub use self::class::*;

mod type_form;
pub use self::type_form::*;

mod template;
pub use self::template::*;

mod reified_type;
pub use self::reified_type::*;

mod assignability;
pub use self::assignability::*;

mod subform;
pub use self::subform::*;

mod subtype;
pub use self::subtype::*;

#[cfg(test)]
pub mod test_utils;
