use crate::runtime::Object;
use crate::typing::*;
use crate::*;

/// Whether `candidate` is a subtype of `reference`, honouring the variance of each of the
/// reference template's parameters.
pub fn is_subtype(
    candidate: &Arc<ReifiedType>,
    reference: &Arc<ReifiedType>,
) -> Result<bool, ReificationError> {
    Ok(explain_subtype(candidate, reference)?.is_valid())
}

pub fn explain_subtype(
    candidate: &Arc<ReifiedType>,
    reference: &Arc<ReifiedType>,
) -> Result<Assignability, ReificationError> {
    candidate.check_reified()?;
    reference.check_reified()?;
    trace!("{} <: {}?", candidate, reference);

    let candidate_form = TypeForm::Generic(candidate.clone());
    let reference_form = TypeForm::Generic(reference.clone());

    if !candidate.origin().is_subclass_of(reference.origin()) {
        return Ok(Assignability::invalid(candidate_form, reference_form));
    }

    let parameters = reference.template().parameters();
    if candidate.arguments().len() != parameters.len() {
        return Err(ReificationError::ParameterCount {
            type_name: reference.template().name().to_string(),
            expected: parameters.len(),
            actual: candidate.arguments().len(),
        });
    }

    let positions = parameters
        .iter()
        .zip(candidate.arguments())
        .zip(reference.arguments());

    for ((param, candidate_argument), reference_argument) in positions {
        let position = match param.variance {
            Variance::Covariant => explain_subform(candidate_argument, reference_argument)?,
            Variance::Contravariant => explain_subform(reference_argument, candidate_argument)?,
            Variance::Invariant => {
                if candidate_argument == reference_argument {
                    Assignability::Valid
                } else {
                    Assignability::not_same(candidate_argument.clone(), reference_argument.clone())
                }
            }
        };

        if position.is_invalid() {
            trace!("{} fails at {}.", candidate, param);
            return Ok(Assignability::invalid(candidate_form, reference_form).because(position));
        }
    }

    Ok(Assignability::Valid)
}

/// Whether `object` was built through a parameterization that is a subtype of `reference`.
///
/// Objects constructed without reification never qualify, whatever their class.
pub fn is_instance(object: &Object, reference: &Arc<ReifiedType>) -> Result<bool, ReificationError> {
    if !object.class().is_subclass_of(reference.origin()) {
        return Ok(false);
    }
    match object.orig_class() {
        Some(orig_class) => is_subtype(orig_class, reference),
        None => Ok(false),
    }
}

/// `isinstance` against any reference form.
pub fn is_instance_of(object: &Object, reference: &TypeForm) -> Result<bool, ReificationError> {
    match reference {
        TypeForm::Generic(reified) => is_instance(object, reified),
        TypeForm::Concrete(class) => Ok(object.class().is_subclass_of(class)),
        TypeForm::Union(u) => {
            for member in u.members() {
                if is_instance_of(object, member)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        TypeForm::Parameter(param) => Err(ReificationError::TypeForm(format!(
            "`{}` is an unbound type parameter and cannot be used in an instance check.",
            param
        ))),
    }
}
