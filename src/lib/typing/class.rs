use crate::typing::*;
use crate::*;

/// A runtime class: a named node in the inheritance graph.
///
/// A class with declared type parameters is a generic origin. It can only be
/// instantiated through a parameterization of its [`GenericTemplate`].
pub struct Class {
    pub id: Id,
    pub name: Symbol,
    pub super_classes: Vec<Arc<Class>>,
    pub type_parameters: Vec<Arc<TypeParameter>>,
}

impl Class {
    pub fn new(name: &str, super_classes: Vec<Arc<Class>>) -> Arc<Class> {
        Self::generic(name, super_classes, vec![])
    }

    pub fn generic(
        name: &str,
        super_classes: Vec<Arc<Class>>,
        type_parameters: Vec<Arc<TypeParameter>>,
    ) -> Arc<Class> {
        Arc::new(Class {
            id: Id::new(),
            name: Symbol(name.into()),
            super_classes,
            type_parameters,
        })
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// Ordinary, reflexive subclass check through the base classes.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        if self.id == other.id {
            return true;
        }
        self.super_classes
            .iter()
            .any(|super_class| super_class.is_subclass_of(other))
    }

    /// Every class this one inherits from, nearest first, each listed once.
    pub fn ancestors(&self) -> Vec<Arc<Class>> {
        let mut seen = HashSet::new();
        let mut ancestors = vec![];
        let mut queue: Vec<Arc<Class>> = self.super_classes.iter().rev().cloned().collect();

        while let Some(class) = queue.pop() {
            if !seen.insert(class.id) {
                continue;
            }
            queue.extend(class.super_classes.iter().rev().cloned());
            ancestors.push(class);
        }

        ancestors
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "class {}{}", self.name, self.id)
    }
}

/// The classes every scope starts out with.
#[derive(Clone)]
pub struct Builtins {
    pub object: Arc<Class>,
    pub int: Arc<Class>,
    pub bool: Arc<Class>,
    pub float: Arc<Class>,
    pub str: Arc<Class>,
    pub bytes: Arc<Class>,
    pub list: Arc<Class>,
    pub dict: Arc<Class>,
}

impl Builtins {
    pub fn new() -> Builtins {
        let object = Class::new("object", vec![]);
        let int = Class::new("int", vec![object.clone()]);

        Builtins {
            bool: Class::new("bool", vec![int.clone()]),
            float: Class::new("float", vec![object.clone()]),
            str: Class::new("str", vec![object.clone()]),
            bytes: Class::new("bytes", vec![object.clone()]),
            list: Class::new("list", vec![object.clone()]),
            dict: Class::new("dict", vec![object.clone()]),
            int,
            object,
        }
    }

    pub fn classes(&self) -> Vec<&Arc<Class>> {
        vec![
            &self.object,
            &self.int,
            &self.bool,
            &self.float,
            &self.str,
            &self.bytes,
            &self.list,
            &self.dict,
        ]
    }
}
