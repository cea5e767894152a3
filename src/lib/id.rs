use crate::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide identity of a class or type parameter.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Debug)]
pub struct Id(usize);

static ID_GEN: AtomicUsize = AtomicUsize::new(1);

impl Id {
    pub fn new() -> Id {
        Id(ID_GEN.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Id(value) = self;
        write!(f, "#{:X}", value)
    }
}

#[test]
fn ids_are_unique() {
    let a = Id::new();
    let b = Id::new();

    assert_ne!(a, b);
    assert!(a < b);
}
