use crate::*;

/// Misuse of the generic construction protocol.
///
/// Every variant is a programmer error raised where it is detected; nothing in this
/// crate retries or recovers from one.
#[derive(Clone, Debug, PartialEq, IntoStaticStr)]
pub enum ReificationError {
    /// A parameterization supplied the wrong number of type arguments.
    ParameterCount {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// A generic class was instantiated without being parameterized first.
    NoParameters(String),

    /// A type parameter was still unbound where a concrete type form was required.
    ///
    /// This is the "not reified" condition: instantiating `Foo[T]` instead of
    /// `Foo[int]`, or comparing against a descriptor that still has free parameters.
    UnboundTypeVariable {
        type_name: String,
        parameters: Vec<String>,
    },

    /// Malformed input to a type form operation.
    TypeForm(String),

    /// A template declaration that is not structurally valid.
    InvalidTemplate(String, String),
}

impl ReificationError {
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn code(&self) -> usize {
        use self::ReificationError::*;

        match self {
            ParameterCount { .. } => 1,
            NoParameters(_) => 2,
            UnboundTypeVariable { .. } => 3,
            TypeForm(_) => 4,
            InvalidTemplate(_, _) => 5,
        }
    }
}

impl Error for ReificationError {}

impl fmt::Display for ReificationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ReificationError::*;

        match self {
            ParameterCount {
                type_name,
                expected,
                actual,
            } => write!(
                f,
                "`{}` takes {} type arguments, but was provided {}.",
                type_name,
                if *expected == 0 {
                    "no".into()
                } else {
                    expected.to_string()
                },
                if *actual == 0 {
                    "none".into()
                } else {
                    actual.to_string()
                },
            ),
            NoParameters(name) => write!(
                f,
                "Cannot instantiate reified generic `{0}` because its type parameters were not supplied. \
                 They must be given explicitly so that they are available at runtime: \
                 use `{0}[int]()` instead of `{0}()`.",
                name
            ),
            UnboundTypeVariable {
                type_name,
                parameters,
            } => write!(
                f,
                "`{}` is not fully reified; unbound type parameters cannot be used here: {}.",
                type_name,
                parameters.join(", ")
            ),
            TypeForm(message) => write!(f, "{}", message),
            InvalidTemplate(name, reason) => write!(f, "`{}` is not a valid template: {}.", name, reason),
        }
    }
}
