use crate::typing::*;
use crate::*;

/// The static description of a generic class: its origin and ordered parameters.
pub struct GenericTemplate {
    origin: Arc<Class>,
    parameterizations: Mutex<InternCache<Vec<FormKey>, ReifiedType>>,
}

impl GenericTemplate {
    pub fn new(origin: Arc<Class>) -> Result<Arc<GenericTemplate>, ReificationError> {
        if origin.type_parameters.is_empty() {
            return Err(ReificationError::InvalidTemplate(
                origin.name.to_string(),
                "it declares no type parameters".into(),
            ));
        }

        let mut seen = HashSet::new();
        for param in origin.type_parameters.iter() {
            if !seen.insert(param.id) {
                return Err(ReificationError::InvalidTemplate(
                    origin.name.to_string(),
                    format!("type parameter `{}` is declared more than once", param),
                ));
            }
        }

        Ok(Arc::new(GenericTemplate {
            origin,
            parameterizations: Mutex::new(InternCache::new()),
        }))
    }

    pub fn origin(&self) -> &Arc<Class> {
        &self.origin
    }

    pub fn name(&self) -> &Symbol {
        &self.origin.name
    }

    pub fn parameters(&self) -> &[Arc<TypeParameter>] {
        &self.origin.type_parameters
    }

    pub fn arity(&self) -> usize {
        self.origin.type_parameters.len()
    }

    pub fn variance(&self, position: usize) -> Option<Variance> {
        self.origin.type_parameters.get(position).map(|p| p.variance)
    }

    pub(crate) fn cached(&self, key: &Vec<FormKey>) -> Option<Arc<ReifiedType>> {
        match self.parameterizations.lock() {
            Ok(cache) => cache.get(key),
            Err(_) => None,
        }
    }

    /// Stores `reified` unless an equal parameterization won the race, which is then
    /// returned instead.
    pub(crate) fn remember(&self, key: Vec<FormKey>, reified: Arc<ReifiedType>) -> Arc<ReifiedType> {
        match self.parameterizations.lock() {
            Ok(mut cache) => {
                if let Some(existing) = cache.get(&key) {
                    return existing;
                }
                cache.set(key, &reified);
                reified
            }
            Err(_) => {
                warn!("Parameterizations of {} are not cached.", self.origin);
                reified
            }
        }
    }

    /// The number of parameterizations currently alive.
    pub fn live_parameterizations(&self) -> usize {
        match self.parameterizations.lock() {
            Ok(cache) => cache.len(),
            Err(_) => 0,
        }
    }
}

impl fmt::Display for GenericTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[", self.origin.name)?;
        for (i, param) in self.parameters().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for GenericTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "template {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::test_utils::*;
    use matches::assert_matches;

    #[test]
    fn exposes_parameters_in_declaration_order() {
        let b = Builtins::new();
        let template = template(generic_class(
            "Pair",
            &b,
            vec![covariant("A"), contravariant("B")],
        ));

        assert_eq!(template.arity(), 2);
        assert_eq!(template.variance(0), Some(Variance::Covariant));
        assert_eq!(template.variance(1), Some(Variance::Contravariant));
        assert_eq!(template.variance(2), None);
        assert_eq!(template.to_string(), "Pair[+A, -B]");
    }

    #[test]
    fn rejects_non_generic_origin() {
        let b = Builtins::new();

        assert_matches!(
            GenericTemplate::new(b.list.clone()),
            Err(ReificationError::InvalidTemplate(ref name, _)) if name == "list"
        );
    }

    #[test]
    fn rejects_duplicate_parameters() {
        let b = Builtins::new();
        let t = invariant("T");
        let origin = generic_class("Twice", &b, vec![t.clone(), t]);

        assert_matches!(
            GenericTemplate::new(origin),
            Err(ReificationError::InvalidTemplate(_, _))
        );
    }
}
