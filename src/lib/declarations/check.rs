use crate::declarations::*;
use crate::typing::*;
use crate::*;
use serde::Deserialize;

/// A declarations file that also carries checks to run against them.
#[derive(Debug, Deserialize)]
pub struct CheckFile {
    #[serde(flatten)]
    pub declarations: Declarations,
    #[serde(default)]
    pub checks: Vec<Check>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Subform {
        form: String,
        reference: String,
        expect: Expectation,
    },
    Subtype {
        candidate: String,
        reference: String,
        expect: Expectation,
    },
    /// Instantiates `of` without arguments and checks the object against `reference`.
    Instance {
        of: String,
        reference: String,
        expect: Expectation,
    },
    /// `true` expects instantiation of `of` to succeed; `false` is rejected on load.
    Instantiate { of: String, expect: Expectation },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Expectation {
    Holds(bool),
    Fails { error: String },
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub description: String,
    pub expected: Expectation,
    pub actual: Result<bool, DeclarationError>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match (&self.expected, &self.actual) {
            (Expectation::Holds(expected), Ok(actual)) => expected == actual,
            (Expectation::Fails { error }, Err(e)) => error == e.kind(),
            _ => false,
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.description)?;
        match &self.actual {
            Ok(actual) => write!(f, "{}", actual)?,
            Err(e) => write!(f, "{} ({})", e.kind(), e)?,
        }
        if !self.passed() {
            match &self.expected {
                Expectation::Holds(expected) => write!(f, ", expected {}", expected)?,
                Expectation::Fails { error } => write!(f, ", expected {}", error)?,
            }
        }
        Ok(())
    }
}

impl Check {
    pub fn description(&self) -> String {
        match self {
            Check::Subform {
                form, reference, ..
            } => format!("is_subform({}, {})", form, reference),
            Check::Subtype {
                candidate,
                reference,
                ..
            } => format!("is_subtype({}, {})", candidate, reference),
            Check::Instance { of, reference, .. } => format!("is_instance({}(), {})", of, reference),
            Check::Instantiate { of, .. } => format!("{}()", of),
        }
    }

    pub fn expectation(&self) -> &Expectation {
        match self {
            Check::Subform { expect, .. }
            | Check::Subtype { expect, .. }
            | Check::Instance { expect, .. }
            | Check::Instantiate { expect, .. } => expect,
        }
    }

    /// Rejects expectations a check can never meet.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        match self {
            Check::Instantiate {
                expect: Expectation::Holds(false),
                ..
            } => Err(DeclarationError::InvalidCheck(self.description())),
            _ => Ok(()),
        }
    }

    pub fn run(&self, scope: &Scope) -> Result<bool, DeclarationError> {
        match self {
            Check::Subform { form, reference, .. } => Ok(is_subform(
                &scope.evaluate(form)?,
                &scope.evaluate(reference)?,
            )?),
            Check::Subtype {
                candidate,
                reference,
                ..
            } => Ok(is_subtype(
                &scope.evaluate_generic(candidate)?,
                &scope.evaluate_generic(reference)?,
            )?),
            Check::Instance { of, reference, .. } => {
                let object = scope.evaluate(of)?.instantiate(vec![])?;
                Ok(is_instance_of(&object, &scope.evaluate(reference)?)?)
            }
            Check::Instantiate { of, .. } => {
                scope.evaluate(of)?.instantiate(vec![])?;
                Ok(true)
            }
        }
    }

    pub fn verify(&self, scope: &Scope) -> CheckOutcome {
        CheckOutcome {
            description: self.description(),
            expected: self.expectation().clone(),
            actual: self.run(scope),
        }
    }
}

impl CheckFile {
    pub fn load(path: &std::path::Path) -> Result<CheckFile, DeclarationError> {
        let file = std::fs::File::open(path)?;
        let check_file: CheckFile = serde_yaml::from_reader(file)?;
        check_file.validate()?;
        Ok(check_file)
    }

    pub fn validate(&self) -> Result<(), DeclarationError> {
        for check in self.checks.iter() {
            check.validate()?;
        }
        Ok(())
    }

    /// Declares everything in a fresh scope and verifies every check.
    pub fn verify(&self) -> Result<Vec<CheckOutcome>, DeclarationError> {
        self.validate()?;
        let mut scope = Scope::new();
        scope.declare(&self.declarations)?;
        Ok(self.checks.iter().map(|check| check.verify(&scope)).collect())
    }
}

/// Every file matching any of the glob patterns, in pattern order.
pub fn check_files(patterns: &[&str]) -> Result<Vec<std::path::PathBuf>, DeclarationError> {
    let mut paths = vec![];
    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => warn!("Skipping {}: {}", e.path().display(), e),
            }
        }
    }
    Ok(paths)
}
