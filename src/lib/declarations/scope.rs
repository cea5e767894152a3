use crate::declarations::*;
use crate::typing::*;
use crate::*;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Declarations {
    #[serde(default)]
    pub type_variables: Vec<TypeVariableDeclaration>,
    #[serde(default)]
    pub classes: Vec<ClassDeclaration>,
}

#[derive(Debug, Deserialize)]
pub struct TypeVariableDeclaration {
    pub name: String,
    #[serde(default)]
    pub variance: Variance,
}

#[derive(Debug, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    /// Defaults to `object`.
    #[serde(default)]
    pub bases: Vec<String>,
    /// Names of type variables; a non-empty list makes the class generic.
    #[serde(default)]
    pub parameters: Vec<String>,
}

/// Named classes, templates and type variables that type expressions can refer to.
///
/// Every scope starts with the builtin classes and the type variables `T`, `T_co`
/// and `T_cont`.
#[derive(Clone)]
pub struct Scope {
    builtins: Builtins,
    classes: HashMap<String, Arc<Class>>,
    templates: HashMap<Id, Arc<GenericTemplate>>,
    type_variables: HashMap<String, Arc<TypeParameter>>,
}

impl Scope {
    pub fn new() -> Scope {
        let builtins = Builtins::new();
        let classes = builtins
            .classes()
            .into_iter()
            .map(|class| (class.name.to_string(), class.clone()))
            .collect();
        let type_variables = vec![
            TypeParameter::invariant("T"),
            TypeParameter::covariant("T_co"),
            TypeParameter::contravariant("T_cont"),
        ]
        .into_iter()
        .map(|param| (param.name.to_string(), param))
        .collect();

        Scope {
            builtins,
            classes,
            templates: HashMap::new(),
            type_variables,
        }
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Declares type variables first, then classes in order. Bases must already be
    /// declared.
    ///
    /// Either everything is declared or, on error, nothing is.
    pub fn declare(&mut self, declarations: &Declarations) -> Result<(), DeclarationError> {
        let mut staged = self.clone();
        staged.declare_all(declarations)?;
        *self = staged;
        Ok(())
    }

    fn declare_all(&mut self, declarations: &Declarations) -> Result<(), DeclarationError> {
        for declaration in declarations.type_variables.iter() {
            self.check_unused(&declaration.name)?;
            self.type_variables.insert(
                declaration.name.clone(),
                TypeParameter::new(&declaration.name, declaration.variance),
            );
        }

        for declaration in declarations.classes.iter() {
            self.declare_class(declaration)?;
        }

        Ok(())
    }

    fn declare_class(&mut self, declaration: &ClassDeclaration) -> Result<Arc<Class>, DeclarationError> {
        self.check_unused(&declaration.name)?;

        let super_classes = if declaration.bases.is_empty() {
            vec![self.builtins.object.clone()]
        } else {
            declaration
                .bases
                .iter()
                .map(|base| self.class(base))
                .collect::<Result<_, _>>()?
        };

        let type_parameters = declaration
            .parameters
            .iter()
            .map(|name| {
                self.type_variables
                    .get(name)
                    .cloned()
                    .ok_or_else(|| DeclarationError::UndefinedName(name.clone()))
            })
            .collect::<Result<_, _>>()?;

        let class = Class::generic(&declaration.name, super_classes, type_parameters);
        if class.is_generic() {
            let template = GenericTemplate::new(class.clone())?;
            self.templates.insert(class.id, template);
        }
        debug!("Declared {:?}.", class);

        self.classes.insert(declaration.name.clone(), class.clone());
        Ok(class)
    }

    fn check_unused(&self, name: &str) -> Result<(), DeclarationError> {
        if self.classes.contains_key(name) || self.type_variables.contains_key(name) {
            return Err(DeclarationError::DuplicateName(name.into()));
        }
        Ok(())
    }

    pub fn class(&self, name: &str) -> Result<Arc<Class>, DeclarationError> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| DeclarationError::UndefinedName(name.into()))
    }

    pub fn template(&self, class: &Class) -> Option<&Arc<GenericTemplate>> {
        self.templates.get(&class.id)
    }

    pub fn type_variable(&self, name: &str) -> Option<&Arc<TypeParameter>> {
        self.type_variables.get(name)
    }

    /// The type form a bare name stands for.
    pub fn resolve(&self, name: &str) -> Result<TypeForm, DeclarationError> {
        if let Some(param) = self.type_variables.get(name) {
            return Ok(TypeForm::Parameter(param.clone()));
        }
        Ok(TypeForm::Concrete(self.class(name)?))
    }

    /// Evaluates a type expression such as `Reified[int, str]` or `int | str`.
    pub fn evaluate(&self, code: &str) -> Result<TypeForm, DeclarationError> {
        Parser::new(self, code)?.parse()
    }

    /// Evaluates a type expression that must denote a parameterized generic.
    pub fn evaluate_generic(&self, code: &str) -> Result<Arc<ReifiedType>, DeclarationError> {
        match self.evaluate(code)? {
            TypeForm::Generic(reified) => Ok(reified),
            other => Err(ReificationError::TypeForm(format!(
                "`{}` is not a parameterized generic.",
                other
            ))
            .into()),
        }
    }
}
