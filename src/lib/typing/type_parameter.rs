use crate::typing::*;
use crate::*;
use serde::Deserialize;

/// A declared placeholder of a generic class.
///
/// Parameters are compared by identity; two parameters that share a name are still
/// different parameters.
pub struct TypeParameter {
    pub id: Id,
    pub name: Symbol,
    pub variance: Variance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, IntoStaticStr, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    #[serde(alias = "inout")]
    #[strum(serialize = "invariant")]
    Invariant,

    #[serde(alias = "out")]
    #[strum(serialize = "covariant")]
    Covariant,

    #[serde(alias = "in")]
    #[strum(serialize = "contravariant")]
    Contravariant,
}

impl Default for Variance {
    fn default() -> Self {
        Variance::Invariant
    }
}

impl Variance {
    /// The marker printed in front of a parameter's name.
    pub fn prefix(self) -> char {
        match self {
            Variance::Invariant => '~',
            Variance::Covariant => '+',
            Variance::Contravariant => '-',
        }
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

impl TypeParameter {
    pub fn new(name: &str, variance: Variance) -> Arc<TypeParameter> {
        Arc::new(TypeParameter {
            id: Id::new(),
            name: Symbol(name.into()),
            variance,
        })
    }

    pub fn invariant(name: &str) -> Arc<TypeParameter> {
        Self::new(name, Variance::Invariant)
    }

    pub fn covariant(name: &str) -> Arc<TypeParameter> {
        Self::new(name, Variance::Covariant)
    }

    pub fn contravariant(name: &str) -> Arc<TypeParameter> {
        Self::new(name, Variance::Contravariant)
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.variance.prefix(), self.name)
    }
}

impl fmt::Debug for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self, self.id)
    }
}
