use log::debug;

use crate::operators::builtin::{add, builtin, divide, factorial, multiply, sqrt, subtract};
use crate::operators::errors::OperatorError;
use crate::operators::types::Operator;

/// Ordered collection of operators. Registration order is the order in which
/// the engine tries operators, which keeps searches repeatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorSet {
    operators: Vec<Operator>,
}

impl OperatorSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// `+ - * /` followed by factorial and exact square root
    pub fn standard() -> Self {
        Self {
            operators: vec![
                add(),
                subtract(),
                multiply(),
                divide(),
                factorial(),
                sqrt(),
            ],
        }
    }

    /// The four arithmetic joins only
    pub fn arithmetic() -> Self {
        Self {
            operators: vec![add(), subtract(), multiply(), divide()],
        }
    }

    /// Build a set from built-in operator names, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown name or a name given twice.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, OperatorError> {
        let mut set = Self::empty();
        for name in names {
            let name = name.as_ref();
            let operator = builtin(name).ok_or_else(|| OperatorError::Unknown(name.to_string()))?;
            set.register(operator)?;
        }
        Ok(set)
    }

    /// # Errors
    ///
    /// Returns an error if an operator with the same name is already
    /// registered or the operator is inconsistent.
    pub fn register(&mut self, operator: Operator) -> Result<(), OperatorError> {
        operator.check()?;
        if self.get(operator.name()).is_some() {
            return Err(OperatorError::Duplicate(operator.name().to_string()));
        }
        debug!(
            "Registering operator '{}' (arity {})",
            operator.name(),
            operator.arity()
        );
        self.operators.push(operator);
        Ok(())
    }

    /// Builder-style [`OperatorSet::register`].
    ///
    /// # Errors
    ///
    /// Same as [`OperatorSet::register`].
    pub fn with(mut self, operator: Operator) -> Result<Self, OperatorError> {
        self.register(operator)?;
        Ok(self)
    }

    /// Re-check every operator, as a set assembled elsewhere may not have
    /// gone through [`OperatorSet::register`].
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency or duplicate found.
    pub fn validate(&self) -> Result<(), OperatorError> {
        for (idx, operator) in self.operators.iter().enumerate() {
            operator.check()?;
            if self.operators.iter().take(idx).any(|other| other == operator) {
                return Err(OperatorError::Duplicate(operator.name().to_string()));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    pub fn joins(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter().filter(|op| op.is_join())
    }

    pub fn modifiers(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter().filter(|op| !op.is_join())
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<'a> IntoIterator for &'a OperatorSet {
    type Item = &'a Operator;
    type IntoIter = std::slice::Iter<'a, Operator>;

    fn into_iter(self) -> Self::IntoIter {
        self.operators.iter()
    }
}
