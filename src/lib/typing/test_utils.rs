use crate::typing::*;
use crate::*;

pub fn class<F: FnOnce(&mut Class)>(name: &str, f: F) -> Arc<Class> {
    let mut class = Class {
        id: Id::new(),
        name: Symbol(name.into()),
        super_classes: vec![],
        type_parameters: vec![],
    };
    f(&mut class);
    Arc::new(class)
}

pub fn generic_class(
    name: &str,
    builtins: &Builtins,
    type_parameters: Vec<Arc<TypeParameter>>,
) -> Arc<Class> {
    class(name, |c| {
        c.super_classes.push(builtins.object.clone());
        c.type_parameters = type_parameters;
    })
}

pub fn template(origin: Arc<Class>) -> Arc<GenericTemplate> {
    GenericTemplate::new(origin).unwrap()
}

pub fn invariant(name: &str) -> Arc<TypeParameter> {
    TypeParameter::invariant(name)
}

pub fn covariant(name: &str) -> Arc<TypeParameter> {
    TypeParameter::covariant(name)
}

pub fn contravariant(name: &str) -> Arc<TypeParameter> {
    TypeParameter::contravariant(name)
}

pub fn concrete(class: &Arc<Class>) -> TypeForm {
    TypeForm::Concrete(class.clone())
}

pub fn union(members: Vec<TypeForm>) -> TypeForm {
    TypeForm::union(members).unwrap()
}
