use crate::typing::*;
use crate::*;
use std::hash::{Hash, Hasher};

/// Anything that can stand in a type argument position.
#[derive(Clone)]
pub enum TypeForm {
    Concrete(Arc<Class>),
    Parameter(Arc<TypeParameter>),
    Union(UnionForm),
    Generic(Arc<ReifiedType>),
}

/// The members of a union. Never empty, never nested, no duplicates.
#[derive(Clone)]
pub struct UnionForm {
    members: Vec<TypeForm>,
}

impl UnionForm {
    pub fn members(&self) -> &[TypeForm] {
        &self.members
    }
}

/// Structural identity of a type form.
///
/// Union members are sorted so that unions compare as sets.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormKey {
    Class(Id),
    Parameter(Id),
    Union(Vec<FormKey>),
    Generic(Id, Vec<FormKey>),
}

impl TypeForm {
    /// Builds the union of the given members.
    ///
    /// Nested unions are flattened and duplicates dropped, keeping first occurrences in
    /// order. A single remaining member is returned as itself.
    pub fn union(members: Vec<TypeForm>) -> Result<TypeForm, ReificationError> {
        let mut seen = HashSet::new();
        let mut flat = vec![];

        for member in members {
            let nested = match member {
                TypeForm::Union(u) => u.members,
                other => vec![other],
            };
            for member in nested {
                if seen.insert(member.key()) {
                    flat.push(member);
                }
            }
        }

        match flat.len() {
            0 => Err(ReificationError::TypeForm(
                "Cannot take a union of no types.".into(),
            )),
            1 => Ok(flat.remove(0)),
            _ => Ok(TypeForm::Union(UnionForm { members: flat })),
        }
    }

    pub fn key(&self) -> FormKey {
        match self {
            TypeForm::Concrete(class) => FormKey::Class(class.id),
            TypeForm::Parameter(param) => FormKey::Parameter(param.id),
            TypeForm::Union(u) => {
                let mut keys: Vec<_> = u.members.iter().map(TypeForm::key).collect();
                keys.sort();
                FormKey::Union(keys)
            }
            TypeForm::Generic(reified) => FormKey::Generic(
                reified.origin().id,
                reified.arguments().iter().map(TypeForm::key).collect(),
            ),
        }
    }

    pub fn as_class(&self) -> Option<&Arc<Class>> {
        match self {
            TypeForm::Concrete(class) => Some(class),
            _ => None,
        }
    }

    /// Collects unbound parameters into `into`, first appearance first, each once.
    pub fn collect_parameters(&self, into: &mut Vec<Arc<TypeParameter>>) {
        match self {
            TypeForm::Concrete(_) => {}
            TypeForm::Parameter(param) => {
                if !into.iter().any(|p| p.id == param.id) {
                    into.push(param.clone());
                }
            }
            TypeForm::Union(u) => {
                for member in u.members.iter() {
                    member.collect_parameters(into);
                }
            }
            TypeForm::Generic(reified) => {
                for param in reified.parameters() {
                    if !into.iter().any(|p| p.id == param.id) {
                        into.push(param.clone());
                    }
                }
            }
        }
    }

    pub fn is_fully_reified(&self) -> bool {
        let mut parameters = vec![];
        self.collect_parameters(&mut parameters);
        parameters.is_empty()
    }

    /// Replaces bound parameters, leaving the others in place.
    pub fn substitute(&self, bindings: &HashMap<Id, TypeForm>) -> Result<TypeForm, ReificationError> {
        match self {
            TypeForm::Concrete(_) => Ok(self.clone()),
            TypeForm::Parameter(param) => Ok(bindings
                .get(&param.id)
                .cloned()
                .unwrap_or_else(|| self.clone())),
            TypeForm::Union(u) => TypeForm::union(
                u.members
                    .iter()
                    .map(|member| member.substitute(bindings))
                    .collect::<Result<_, _>>()?,
            ),
            TypeForm::Generic(reified) => {
                if reified.parameters().is_empty() {
                    return Ok(self.clone());
                }
                let arguments = reified
                    .arguments()
                    .iter()
                    .map(|argument| argument.substitute(bindings))
                    .collect::<Result<_, _>>()?;
                Ok(TypeForm::Generic(parameterize(reified.template(), arguments)?))
            }
        }
    }
}

impl From<Arc<Class>> for TypeForm {
    fn from(class: Arc<Class>) -> Self {
        TypeForm::Concrete(class)
    }
}

impl From<Arc<TypeParameter>> for TypeForm {
    fn from(param: Arc<TypeParameter>) -> Self {
        TypeForm::Parameter(param)
    }
}

impl From<Arc<ReifiedType>> for TypeForm {
    fn from(reified: Arc<ReifiedType>) -> Self {
        TypeForm::Generic(reified)
    }
}

impl PartialEq for TypeForm {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TypeForm {}

impl Hash for TypeForm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl fmt::Display for TypeForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeForm::Concrete(class) => write!(f, "{}", class),
            TypeForm::Parameter(param) => write!(f, "{}", param),
            TypeForm::Union(u) => {
                for (i, member) in u.members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            TypeForm::Generic(reified) => write!(f, "{}", reified),
        }
    }
}

impl fmt::Debug for TypeForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::test_utils::*;
    use matches::assert_matches;

    #[test]
    fn unions_flatten_and_deduplicate() {
        let b = Builtins::new();
        let inner = union(vec![concrete(&b.int), concrete(&b.str)]);
        let outer = union(vec![inner, concrete(&b.bool), concrete(&b.int)]);

        assert_eq!(outer.to_string(), "int | str | bool");
    }

    #[test]
    fn unions_compare_as_sets() {
        let b = Builtins::new();

        assert_eq!(
            union(vec![concrete(&b.int), concrete(&b.str)]),
            union(vec![concrete(&b.str), concrete(&b.int)])
        );
        assert_ne!(
            union(vec![concrete(&b.int), concrete(&b.str)]),
            union(vec![concrete(&b.int), concrete(&b.float)])
        );
    }

    #[test]
    fn union_of_one_is_the_member() {
        let b = Builtins::new();
        let single = union(vec![concrete(&b.int), concrete(&b.int)]);

        assert_matches!(single, TypeForm::Concrete(_));
        assert_eq!(single, concrete(&b.int));
    }

    #[test]
    fn empty_union_is_rejected() {
        assert_matches!(TypeForm::union(vec![]), Err(ReificationError::TypeForm(_)));
    }

    #[test]
    fn parameters_are_collected_once_in_order() {
        let b = Builtins::new();
        let t = invariant("T");
        let u = covariant("U");
        let form = union(vec![
            TypeForm::from(u.clone()),
            concrete(&b.int),
            TypeForm::from(t.clone()),
            TypeForm::from(u.clone()),
        ]);

        let mut parameters = vec![];
        form.collect_parameters(&mut parameters);

        assert_eq!(
            parameters.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![u.id, t.id]
        );
        assert!(!form.is_fully_reified());
        assert!(concrete(&b.int).is_fully_reified());
    }

    #[test]
    fn substitute_inside_union() {
        let b = Builtins::new();
        let t = invariant("T");
        let form = union(vec![TypeForm::from(t.clone()), concrete(&b.str)]);

        let mut bindings = HashMap::new();
        bindings.insert(t.id, concrete(&b.str));

        assert_eq!(form.substitute(&bindings).unwrap(), concrete(&b.str));
    }
}
