//! Runtime-reified generics.
//!
//! A generic class declared here keeps its type arguments at runtime: parameterizing a
//! [`typing::GenericTemplate`] yields a [`typing::ReifiedType`], objects built through it
//! carry that descriptor, and the engine in [`typing`] answers variance-aware subtype and
//! instance questions about them.

pub use std::collections::HashMap;
pub use std::collections::HashSet;
pub use std::error::Error;
pub use std::fmt;
pub use std::sync::{Arc, Mutex, Weak};

#[macro_use]
extern crate log;

#[macro_use]
extern crate strum_macros;

mod id;
pub use self::id::*;

mod cache;
pub use self::cache::*;

mod errors;
pub use self::errors::*;

pub mod typing;
pub use self::typing::{
    explain_subform, explain_subtype, is_instance, is_instance_of, is_subform, is_subtype,
    parameterize,
};

pub mod runtime;
pub use self::runtime::Instantiate;

pub mod declarations;
