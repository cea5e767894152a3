use crate::declarations::*;
use crate::typing::*;
use crate::*;

macro_rules! consume {
    ($self: expr, $kind: pat) => {{
        let t = $self.tokens[$self.offset].clone();
        if !matches!(t.kind, $kind) {
            return Err(DeclarationError::Syntax {
                offset: t.offset,
                message: format!("Expected {} but found {}", stringify!($kind), t.kind),
            });
        }
        $self.offset += 1;
        t
    }};
}

macro_rules! sees {
    ($self: expr, $kind: pat) => {{
        matches!($self.tokens[$self.offset].kind, $kind)
    }};
}

/// Evaluates type expressions against the names declared in a [`Scope`].
///
/// ```text
/// form      := member ('|' member)*
/// member    := NAME subscript*
/// subscript := '[' form (',' form)* ']'
/// ```
pub struct Parser<'a> {
    scope: &'a Scope,
    offset: usize,
    tokens: Vec<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(scope: &'a Scope, code: &str) -> Result<Parser<'a>, DeclarationError> {
        Ok(Parser {
            scope,
            offset: 0,
            tokens: tokenize(code)?,
        })
    }

    pub fn parse(mut self) -> Result<TypeForm, DeclarationError> {
        let form = self.parse_form()?;
        consume!(self, TokenKind::EOF);
        Ok(form)
    }

    fn parse_form(&mut self) -> Result<TypeForm, DeclarationError> {
        let mut members = vec![self.parse_member()?];
        while sees!(self, TokenKind::Pipe) {
            consume!(self, TokenKind::Pipe);
            members.push(self.parse_member()?);
        }
        if members.len() == 1 {
            return Ok(members.remove(0));
        }
        Ok(TypeForm::union(members)?)
    }

    fn parse_member(&mut self) -> Result<TypeForm, DeclarationError> {
        let token = self.tokens[self.offset].clone();
        let name = match token.kind {
            TokenKind::Name(name) => name,
            other => {
                return Err(DeclarationError::Syntax {
                    offset: token.offset,
                    message: format!("Expected a type name but found {}", other),
                })
            }
        };
        self.offset += 1;

        let mut form = self.scope.resolve(&name)?;
        while sees!(self, TokenKind::OpenBracket) {
            let arguments = self.parse_subscript()?;
            form = self.subscript(form, arguments)?;
        }
        Ok(form)
    }

    fn parse_subscript(&mut self) -> Result<Vec<TypeForm>, DeclarationError> {
        consume!(self, TokenKind::OpenBracket);
        let mut arguments = vec![self.parse_form()?];
        while sees!(self, TokenKind::Comma) {
            consume!(self, TokenKind::Comma);
            arguments.push(self.parse_form()?);
        }
        consume!(self, TokenKind::CloseBracket);
        Ok(arguments)
    }

    fn subscript(&self, form: TypeForm, arguments: Vec<TypeForm>) -> Result<TypeForm, DeclarationError> {
        match form {
            TypeForm::Concrete(ref class) => match self.scope.template(class) {
                Some(template) => Ok(TypeForm::Generic(parameterize(template, arguments)?)),
                None => Err(ReificationError::TypeForm(format!("`{}` is not generic.", class)).into()),
            },
            TypeForm::Generic(reified) => Ok(TypeForm::Generic(reified.bind(arguments)?)),
            other => Err(
                ReificationError::TypeForm(format!("`{}` cannot be subscripted.", other)).into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;

    fn scope() -> Scope {
        let mut scope = Scope::new();
        scope
            .declare(
                &serde_yaml::from_str(
                    "
classes:
  - { name: Reified, parameters: [T, T_co] }
  - { name: Box, parameters: [T_co] }
",
                )
                .unwrap(),
            )
            .unwrap();
        scope
    }

    fn parse(scope: &Scope, code: &str) -> Result<TypeForm, DeclarationError> {
        Parser::new(scope, code)?.parse()
    }

    #[test]
    fn names() {
        let scope = scope();

        assert_eq!(parse(&scope, "int").unwrap().to_string(), "int");
        assert_eq!(parse(&scope, "T_co").unwrap().to_string(), "+T_co");
    }

    #[test]
    fn unions() {
        let scope = scope();

        assert_eq!(
            parse(&scope, "int | str | int").unwrap().to_string(),
            "int | str"
        );
    }

    #[test]
    fn parameterized() {
        let scope = scope();

        let form = parse(&scope, "Reified[int | str, Box[bool]]").unwrap();

        assert_eq!(form.to_string(), "Reified[int | str, Box[bool]]");
        assert!(form.is_fully_reified());
    }

    #[test]
    fn same_expression_same_descriptor() {
        let scope = scope();

        match (
            parse(&scope, "Box[int | str]").unwrap(),
            parse(&scope, "Box[str | int]").unwrap(),
        ) {
            (TypeForm::Generic(a), TypeForm::Generic(b)) => assert!(Arc::ptr_eq(&a, &b)),
            other => panic!("expected generics, got {:?}", other),
        }
    }

    #[test]
    fn binding_a_partial_parameterization() {
        let scope = scope();

        assert_eq!(
            parse(&scope, "Reified[int, T][str]").unwrap(),
            parse(&scope, "Reified[int, str]").unwrap()
        );
    }

    #[test]
    fn errors() {
        let scope = scope();

        assert_matches!(
            parse(&scope, "Reified[int]"),
            Err(DeclarationError::Reification(ReificationError::ParameterCount { .. }))
        );
        assert_matches!(
            parse(&scope, "int[str]"),
            Err(DeclarationError::Reification(ReificationError::TypeForm(_)))
        );
        assert_matches!(
            parse(&scope, "T[int]"),
            Err(DeclarationError::Reification(ReificationError::TypeForm(_)))
        );
        assert_matches!(parse(&scope, "Nope"), Err(DeclarationError::UndefinedName(_)));
        assert_matches!(parse(&scope, "Box[int"), Err(DeclarationError::Syntax { offset: 7, .. }));
        assert_matches!(parse(&scope, "int str"), Err(DeclarationError::Syntax { offset: 4, .. }));
        assert_matches!(parse(&scope, ""), Err(DeclarationError::Syntax { offset: 0, .. }));
    }
}
