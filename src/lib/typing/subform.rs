use crate::typing::*;
use crate::*;

/// Whether `form` is a subform of `reference`: `issubclass` generalized to unions and
/// reified generics.
pub fn is_subform(form: &TypeForm, reference: &TypeForm) -> Result<bool, ReificationError> {
    Ok(explain_subform(form, reference)?.is_valid())
}

pub fn explain_subform(
    form: &TypeForm,
    reference: &TypeForm,
) -> Result<Assignability, ReificationError> {
    check_reference(reference)?;
    trace!("{} <: {}?", form, reference);

    match form {
        TypeForm::Union(u) => {
            for member in u.members() {
                let member_assignability = explain_subform(member, reference)?;
                if member_assignability.is_invalid() {
                    return Ok(Assignability::invalid(form.clone(), reference.clone())
                        .because(member_assignability));
                }
            }
            Ok(Assignability::Valid)
        }

        TypeForm::Parameter(param) => Err(ReificationError::TypeForm(format!(
            "`{}` is an unbound type parameter, not a class.",
            param
        ))),

        _ => match reference {
            TypeForm::Union(u) => {
                for member in u.members() {
                    if single_subform(form, member)?.is_valid() {
                        return Ok(Assignability::Valid);
                    }
                }
                Ok(Assignability::invalid(form.clone(), reference.clone()))
            }
            _ => single_subform(form, reference),
        },
    }
}

/// The reference must be a class, a fully reified generic, or a union of those.
fn check_reference(reference: &TypeForm) -> Result<(), ReificationError> {
    match reference {
        TypeForm::Concrete(_) => Ok(()),
        TypeForm::Generic(reified) => reified.check_reified(),
        TypeForm::Parameter(param) => Err(ReificationError::TypeForm(format!(
            "`{}` is an unbound type parameter and cannot be a subform reference.",
            param
        ))),
        TypeForm::Union(u) => {
            for member in u.members() {
                match member {
                    TypeForm::Parameter(param) => {
                        return Err(ReificationError::TypeForm(format!(
                            "A union reference may not contain type parameters, but `{}` contains `{}`.",
                            reference, param
                        )))
                    }
                    TypeForm::Generic(reified) => reified.check_reified()?,
                    _ => {}
                }
            }
            Ok(())
        }
    }
}

/// Compares a class or reified generic against a class or reified generic.
fn single_subform(form: &TypeForm, reference: &TypeForm) -> Result<Assignability, ReificationError> {
    match (form, reference) {
        (TypeForm::Generic(reified), TypeForm::Generic(reference_reified)) => {
            explain_subtype(reified, reference_reified)
        }
        (TypeForm::Generic(reified), TypeForm::Concrete(class)) => {
            reified.check_reified()?;
            Ok(verdict(reified.origin().is_subclass_of(class), form, reference))
        }
        (TypeForm::Concrete(class), TypeForm::Concrete(reference_class)) => Ok(verdict(
            class.is_subclass_of(reference_class),
            form,
            reference,
        )),
        _ => Ok(Assignability::invalid(form.clone(), reference.clone())),
    }
}

fn verdict(valid: bool, form: &TypeForm, reference: &TypeForm) -> Assignability {
    if valid {
        Assignability::Valid
    } else {
        Assignability::invalid(form.clone(), reference.clone())
    }
}
