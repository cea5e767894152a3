use crate::runtime::*;
use crate::typing::*;
use crate::*;

/// Construction of objects from something that names a type.
pub trait Instantiate {
    fn instantiate(&self, arguments: Vec<Value>) -> Result<Arc<Object>, ReificationError>;
}

/// Only a fully reified parameterization builds an object, which then carries it.
impl Instantiate for Arc<ReifiedType> {
    fn instantiate(&self, arguments: Vec<Value>) -> Result<Arc<Object>, ReificationError> {
        self.check_reified()?;
        let object = Object::new(self.origin(), Some(self.clone()), arguments);
        debug!("Instantiated {}.", object);
        Ok(object)
    }
}

impl Instantiate for Arc<GenericTemplate> {
    fn instantiate(&self, _arguments: Vec<Value>) -> Result<Arc<Object>, ReificationError> {
        Err(ReificationError::NoParameters(self.name().to_string()))
    }
}

impl Instantiate for Arc<Class> {
    fn instantiate(&self, arguments: Vec<Value>) -> Result<Arc<Object>, ReificationError> {
        if self.is_generic() {
            return Err(ReificationError::NoParameters(self.name.to_string()));
        }
        Ok(Object::new(self, None, arguments))
    }
}

impl Instantiate for TypeForm {
    fn instantiate(&self, arguments: Vec<Value>) -> Result<Arc<Object>, ReificationError> {
        match self {
            TypeForm::Concrete(class) => class.instantiate(arguments),
            TypeForm::Generic(reified) => reified.instantiate(arguments),
            TypeForm::Parameter(param) => Err(ReificationError::UnboundTypeVariable {
                type_name: param.to_string(),
                parameters: vec![param.to_string()],
            }),
            TypeForm::Union(_) => Err(ReificationError::TypeForm(format!(
                "`{}` is a union and cannot be instantiated.",
                self
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::test_utils::*;
    use matches::assert_matches;

    #[test]
    fn reified_list() {
        let b = Builtins::new();
        let reified_list = template(class("ReifiedList", |c| {
            c.super_classes.push(b.list.clone());
            c.type_parameters.push(invariant("T"));
        }));
        let list_of_int = parameterize(&reified_list, vec![concrete(&b.int)]).unwrap();

        let object = list_of_int
            .instantiate(vec![Value::from(vec![1i64, 2, 3])])
            .unwrap();

        let orig_class = object.orig_class().unwrap();
        assert!(Arc::ptr_eq(orig_class.origin(), reified_list.origin()));
        assert_eq!(orig_class.arguments(), &[concrete(&b.int)][..]);
        assert!(orig_class.parameters().is_empty());
        assert!(object.class().is_subclass_of(&b.list));
        assert_eq!(object.to_string(), "a ReifiedList[int]([1, 2, 3])");
    }

    #[test]
    fn instances_share_the_descriptor() {
        let b = Builtins::new();
        let reified = template(generic_class("Reified", &b, vec![invariant("T"), invariant("T2")]));
        let int_str = parameterize(&reified, vec![concrete(&b.int), concrete(&b.str)]).unwrap();

        let first = int_str.instantiate(vec![]).unwrap();
        let second = int_str.instantiate(vec![]).unwrap();

        assert!(Arc::ptr_eq(first.orig_class().unwrap(), second.orig_class().unwrap()));
        assert_eq!(
            first.type_arguments().unwrap(),
            &[concrete(&b.int), concrete(&b.str)][..]
        );
    }

    #[test]
    fn without_parameters() {
        let b = Builtins::new();
        let reified = template(generic_class("Reified", &b, vec![invariant("T"), invariant("T2")]));

        assert_matches!(
            reified.instantiate(vec![]),
            Err(ReificationError::NoParameters(ref name)) if name == "Reified"
        );
        assert_matches!(
            reified.origin().instantiate(vec![]),
            Err(ReificationError::NoParameters(_))
        );
    }

    #[test]
    fn with_unbound_parameter() {
        let b = Builtins::new();
        let t = invariant("T");
        let reified = template(generic_class("Reified", &b, vec![invariant("T1"), invariant("T2")]));
        let partial = parameterize(&reified, vec![concrete(&b.int), TypeForm::from(t)]).unwrap();

        assert_matches!(
            partial.instantiate(vec![]),
            Err(ReificationError::UnboundTypeVariable { .. })
        );
    }

    #[test]
    fn plain_class() {
        let b = Builtins::new();

        let object = b.str.instantiate(vec![Value::from("hello")]).unwrap();

        assert!(object.orig_class().is_none());
        assert!(object.type_arguments().is_none());
        assert_eq!(object.to_string(), "a str(\"hello\")");
    }

    #[test]
    fn forms() {
        let b = Builtins::new();

        assert!(concrete(&b.int).instantiate(vec![]).is_ok());
        assert_matches!(
            union(vec![concrete(&b.int), concrete(&b.str)]).instantiate(vec![]),
            Err(ReificationError::TypeForm(_))
        );
        assert_matches!(
            TypeForm::from(invariant("T")).instantiate(vec![]),
            Err(ReificationError::UnboundTypeVariable { .. })
        );
    }
}
