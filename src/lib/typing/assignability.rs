use crate::typing::*;
use crate::*;

/// The verdict of a subform or subtype check, with the reasons for a failure.
#[derive(Clone, Debug)]
pub enum Assignability {
    Valid,
    Invalid {
        assignee: TypeForm,
        assigned: TypeForm,
        invariant: bool,
        because: Vec<Assignability>,
    },
}

impl Assignability {
    pub fn invalid(assigned: TypeForm, assignee: TypeForm) -> Assignability {
        Assignability::Invalid {
            assignee,
            assigned,
            invariant: false,
            because: vec![],
        }
    }

    pub fn not_same(assigned: TypeForm, assignee: TypeForm) -> Assignability {
        Assignability::Invalid {
            assignee,
            assigned,
            invariant: true,
            because: vec![],
        }
    }

    pub fn because(self, reason: Assignability) -> Assignability {
        match self {
            Assignability::Valid => Assignability::Valid,
            Assignability::Invalid {
                assignee,
                assigned,
                invariant,
                mut because,
            } => {
                because.push(reason);
                Assignability::Invalid {
                    assignee,
                    assigned,
                    invariant,
                    because,
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Assignability::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

fn format_invalid_assignability(
    f: &mut fmt::Formatter,
    indentation: usize,
    assignee: &TypeForm,
    assigned: &TypeForm,
    because: &[Assignability],
    invariant: bool,
) -> fmt::Result {
    if indentation > 0 {
        writeln!(f)?;
    }

    for _ in 0..indentation {
        write!(f, "  ")?;
    }

    if indentation > 0 {
        write!(f, "because ")?;
    }

    if invariant {
        write!(f, "`{}` isn't the same as `{}`", assigned, assignee)?;
    } else {
        write!(f, "`{}` cannot act as `{}`", assigned, assignee)?;
    }

    for b in because.iter() {
        format_assignability(f, indentation + 1, b)?;
    }

    Ok(())
}

fn format_assignability(
    f: &mut fmt::Formatter,
    indentation: usize,
    assignability: &Assignability,
) -> fmt::Result {
    match assignability {
        Assignability::Valid => Ok(()),
        Assignability::Invalid {
            assignee,
            assigned,
            because,
            invariant,
        } => format_invalid_assignability(f, indentation, assignee, assigned, because, *invariant),
    }
}

impl fmt::Display for Assignability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Assignability::Valid = self {
            return write!(f, "valid.");
        }
        format_assignability(f, 0, self)?;
        write!(f, ".")
    }
}
