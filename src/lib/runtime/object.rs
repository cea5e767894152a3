use crate::runtime::*;
use crate::typing::*;
use crate::*;

pub struct Object {
    class: Arc<Class>,
    orig_class: Option<Arc<ReifiedType>>,
    arguments: Vec<Value>,
}

impl Object {
    /// The normal constructor path. Reification, if any, is decided by the caller.
    pub(crate) fn new(
        class: &Arc<Class>,
        orig_class: Option<Arc<ReifiedType>>,
        arguments: Vec<Value>,
    ) -> Arc<Object> {
        Arc::new(Object {
            class: class.clone(),
            orig_class,
            arguments,
        })
    }

    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    /// The parameterization this object was constructed through.
    pub fn orig_class(&self) -> Option<&Arc<ReifiedType>> {
        self.orig_class.as_ref()
    }

    /// The reified type arguments, if the object was built through a parameterization.
    pub fn type_arguments(&self) -> Option<&[TypeForm]> {
        self.orig_class.as_ref().map(|reified| reified.arguments())
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.orig_class {
            Some(reified) => write!(f, "a {}", reified)?,
            None => write!(f, "a {}", self.class)?,
        }
        if !self.arguments.is_empty() {
            write!(f, "(")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", argument)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
