use crate::*;

/// Failure while reading declarations or evaluating type expressions.
#[derive(Debug, IntoStaticStr)]
pub enum DeclarationError {
    Syntax { offset: usize, message: String },
    UndefinedName(String),
    DuplicateName(String),
    InvalidCheck(String),
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Pattern(glob::PatternError),
    Reification(ReificationError),
}

impl DeclarationError {
    /// The kind name, looking through to the wrapped reification error.
    pub fn kind(&self) -> &'static str {
        match self {
            DeclarationError::Reification(e) => e.kind(),
            _ => self.into(),
        }
    }
}

impl Error for DeclarationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DeclarationError::Io(e) => Some(e),
            DeclarationError::Yaml(e) => Some(e),
            DeclarationError::Pattern(e) => Some(e),
            DeclarationError::Reification(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeclarationError::Syntax { offset, message } => {
                write!(f, "{} (at offset {}).", message, offset)
            }
            DeclarationError::UndefinedName(name) => write!(f, "`{}` is undefined.", name),
            DeclarationError::DuplicateName(name) => {
                write!(f, "`{}` is declared more than once.", name)
            }
            DeclarationError::InvalidCheck(description) => {
                write!(f, "`{}` can only be expected to succeed or fail.", description)
            }
            DeclarationError::Io(e) => write!(f, "{}", e),
            DeclarationError::Yaml(e) => write!(f, "{}", e),
            DeclarationError::Pattern(e) => write!(f, "{}", e),
            DeclarationError::Reification(e) => write!(f, "{}", e),
        }
    }
}

impl From<ReificationError> for DeclarationError {
    fn from(err: ReificationError) -> Self {
        DeclarationError::Reification(err)
    }
}

impl From<std::io::Error> for DeclarationError {
    fn from(err: std::io::Error) -> Self {
        DeclarationError::Io(err)
    }
}

impl From<serde_yaml::Error> for DeclarationError {
    fn from(err: serde_yaml::Error) -> Self {
        DeclarationError::Yaml(err)
    }
}

impl From<glob::PatternError> for DeclarationError {
    fn from(err: glob::PatternError) -> Self {
        DeclarationError::Pattern(err)
    }
}
