use crate::typing::*;
use crate::*;

/// A generic template together with the type arguments it was parameterized with.
///
/// Descriptors are immutable and shared by every object constructed through them.
pub struct ReifiedType {
    template: Arc<GenericTemplate>,
    arguments: Vec<TypeForm>,
    parameters: Vec<Arc<TypeParameter>>,
}

#[derive(Clone, Debug)]
pub enum ReificationState {
    FullyReified,
    PartiallyReified(Vec<Arc<TypeParameter>>),
}

/// Binds `arguments` positionally to the parameters of `template`.
///
/// Equal argument lists share one descriptor for as long as something holds on to it.
pub fn parameterize(
    template: &Arc<GenericTemplate>,
    arguments: Vec<TypeForm>,
) -> Result<Arc<ReifiedType>, ReificationError> {
    if arguments.len() != template.arity() {
        return Err(ReificationError::ParameterCount {
            type_name: template.name().to_string(),
            expected: template.arity(),
            actual: arguments.len(),
        });
    }

    let key: Vec<FormKey> = arguments.iter().map(TypeForm::key).collect();
    if let Some(reified) = template.cached(&key) {
        return Ok(reified);
    }

    let mut parameters = vec![];
    for argument in arguments.iter() {
        argument.collect_parameters(&mut parameters);
    }

    let reified = Arc::new(ReifiedType {
        template: template.clone(),
        arguments,
        parameters,
    });
    debug!("Parameterized {}.", reified);

    Ok(template.remember(key, reified))
}

impl ReifiedType {
    pub fn template(&self) -> &Arc<GenericTemplate> {
        &self.template
    }

    pub fn origin(&self) -> &Arc<Class> {
        self.template.origin()
    }

    pub fn arguments(&self) -> &[TypeForm] {
        &self.arguments
    }

    /// The type parameters still unbound anywhere in the arguments.
    pub fn parameters(&self) -> &[Arc<TypeParameter>] {
        &self.parameters
    }

    pub fn is_fully_reified(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn state(&self) -> ReificationState {
        if self.parameters.is_empty() {
            ReificationState::FullyReified
        } else {
            ReificationState::PartiallyReified(self.parameters.clone())
        }
    }

    pub fn check_reified(&self) -> Result<(), ReificationError> {
        if self.parameters.is_empty() {
            return Ok(());
        }
        Err(ReificationError::UnboundTypeVariable {
            type_name: self.to_string(),
            parameters: self.parameters.iter().map(ToString::to_string).collect(),
        })
    }

    /// Binds the free parameters, in the order of [`ReifiedType::parameters`].
    pub fn bind(&self, arguments: Vec<TypeForm>) -> Result<Arc<ReifiedType>, ReificationError> {
        if arguments.len() != self.parameters.len() {
            return Err(ReificationError::ParameterCount {
                type_name: self.to_string(),
                expected: self.parameters.len(),
                actual: arguments.len(),
            });
        }

        let bindings: HashMap<Id, TypeForm> = self
            .parameters
            .iter()
            .map(|param| param.id)
            .zip(arguments)
            .collect();

        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.substitute(&bindings))
            .collect::<Result<_, _>>()?;

        parameterize(&self.template, arguments)
    }
}

impl fmt::Display for ReifiedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[", self.template.name())?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for ReifiedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
