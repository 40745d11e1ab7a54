use std::fmt;

use crate::operators::errors::OperatorError;
use crate::value::Value;

pub type JoinValidity = fn(Value, Value) -> bool;
pub type JoinApply = fn(Value, Value) -> Option<Value>;
pub type ModifierValidity = fn(Value) -> bool;
pub type ModifierApply = fn(Value) -> Option<Value>;

/// How an operator is written when a path is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `a + b`; a higher precedence binds tighter
    Infix { precedence: u8 },
    /// `√a`
    Prefix,
    /// `a!`
    Postfix,
    /// `symbol(a, b)`
    Function,
}

/// Arity together with the functions that implement it.
///
/// `apply` returns `None` when the arithmetic overflows; the candidate is
/// then dropped exactly like one whose `valid` predicate failed.
#[derive(Debug, Clone, Copy)]
pub enum OperatorKind {
    Join {
        commutative: bool,
        valid: JoinValidity,
        apply: JoinApply,
    },
    Modifier {
        valid: ModifierValidity,
        apply: ModifierApply,
    },
}

/// A self-contained operator value. Two operators are the same operator
/// when they share a name.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    name: &'static str,
    symbol: &'static str,
    notation: Notation,
    kind: OperatorKind,
}

impl Operator {
    /// A binary operator that combines two remaining values into one
    pub fn join(
        name: &'static str,
        symbol: &'static str,
        notation: Notation,
        commutative: bool,
        valid: JoinValidity,
        apply: JoinApply,
    ) -> Self {
        Self {
            name,
            symbol,
            notation,
            kind: OperatorKind::Join {
                commutative,
                valid,
                apply,
            },
        }
    }

    /// A unary operator that replaces one remaining value in place
    pub fn modifier(
        name: &'static str,
        symbol: &'static str,
        notation: Notation,
        valid: ModifierValidity,
        apply: ModifierApply,
    ) -> Self {
        Self {
            name,
            symbol,
            notation,
            kind: OperatorKind::Modifier { valid, apply },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn kind(&self) -> &OperatorKind {
        &self.kind
    }

    pub fn arity(&self) -> usize {
        match self.kind {
            OperatorKind::Join { .. } => 2,
            OperatorKind::Modifier { .. } => 1,
        }
    }

    pub fn is_join(&self) -> bool {
        matches!(self.kind, OperatorKind::Join { .. })
    }

    /// Only joins can be commutative
    pub fn is_commutative(&self) -> bool {
        matches!(
            self.kind,
            OperatorKind::Join {
                commutative: true,
                ..
            }
        )
    }

    /// Combine `left` and `right`, or `None` if this is not a join, the
    /// operands are invalid, or the result overflows.
    pub fn apply_join(&self, left: Value, right: Value) -> Option<Value> {
        match self.kind {
            OperatorKind::Join { valid, apply, .. } if valid(left, right) => apply(left, right),
            _ => None,
        }
    }

    /// Transform `operand`, or `None` if this is not a modifier, the operand
    /// is invalid, or the result overflows.
    pub fn apply_modifier(&self, operand: Value) -> Option<Value> {
        match self.kind {
            OperatorKind::Modifier { valid, apply } if valid(operand) => apply(operand),
            _ => None,
        }
    }

    /// Whether the validity predicate accepts `operands`; false on an arity mismatch
    pub fn is_valid(&self, operands: &[Value]) -> bool {
        match (self.kind, operands) {
            (OperatorKind::Join { valid, .. }, &[left, right]) => valid(left, right),
            (OperatorKind::Modifier { valid, .. }, &[operand]) => valid(operand),
            _ => false,
        }
    }

    /// Apply to a slice of operands whose length must match the arity
    pub fn apply(&self, operands: &[Value]) -> Option<Value> {
        match (self.kind, operands) {
            (OperatorKind::Join { .. }, &[left, right]) => self.apply_join(left, right),
            (OperatorKind::Modifier { .. }, &[operand]) => self.apply_modifier(operand),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Returns an error when the name or symbol is empty, or the notation
    /// cannot express the operator's arity (a postfix join, an infix modifier).
    pub fn check(&self) -> Result<(), OperatorError> {
        let inconsistent = |reason| OperatorError::Inconsistent {
            name: self.name.to_string(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(inconsistent("name must not be empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(inconsistent("symbol must not be empty"));
        }

        match (self.kind, self.notation) {
            (OperatorKind::Join { .. }, Notation::Prefix | Notation::Postfix) => {
                Err(inconsistent("a join needs infix or function notation"))
            }
            (OperatorKind::Modifier { .. }, Notation::Infix { .. }) => {
                Err(inconsistent("a modifier cannot use infix notation"))
            }
            _ => Ok(()),
        }
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Operator {}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
