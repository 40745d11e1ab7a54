use std::fmt;

use crate::operators::{Notation, Operator};
use crate::value::{Value, format_operand};

/// A value consumed by a step, with its position in the parent state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub position: usize,
    pub value: Value,
}

impl Operand {
    pub fn new(position: usize, value: Value) -> Self {
        Self { position, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    Join { left: Operand, right: Operand },
    Modifier(Operand),
}

/// One applied operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    operator: Operator,
    operands: Operands,
    result: Value,
}

impl Step {
    pub fn join(operator: Operator, left: Operand, right: Operand, result: Value) -> Self {
        Self {
            operator,
            operands: Operands::Join { left, right },
            result,
        }
    }

    pub fn modifier(operator: Operator, operand: Operand, result: Value) -> Self {
        Self {
            operator,
            operands: Operands::Modifier(operand),
            result,
        }
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    pub fn result(&self) -> Value {
        self.result
    }

    /// Positions consumed in the parent state, left operand first
    pub fn positions(&self) -> Vec<usize> {
        match self.operands {
            Operands::Join { left, right } => vec![left.position, right.position],
            Operands::Modifier(operand) => vec![operand.position],
        }
    }

    /// How many values the step removes from the state
    pub fn consumed(&self) -> usize {
        match self.operands {
            Operands::Join { .. } => 1,
            Operands::Modifier(_) => 0,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = self.operator.symbol();
        match (self.operands, self.operator.notation()) {
            (Operands::Join { left, right }, Notation::Function) => write!(
                f,
                "{}({}, {})",
                symbol,
                format_operand(&left.value),
                format_operand(&right.value)
            )?,
            (Operands::Join { left, right }, _) => write!(
                f,
                "{} {} {}",
                format_operand(&left.value),
                symbol,
                format_operand(&right.value)
            )?,
            (Operands::Modifier(operand), Notation::Postfix) => {
                write!(f, "{}{}", format_operand(&operand.value), symbol)?
            }
            (Operands::Modifier(operand), Notation::Function) => {
                write!(f, "{}({})", symbol, format_operand(&operand.value))?
            }
            (Operands::Modifier(operand), _) => {
                write!(f, "{}{}", symbol, format_operand(&operand.value))?
            }
        }
        write!(f, " = {}", self.result)
    }
}

/// Ordered list of steps from the initial state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// A copy of this path with `step` appended
    pub fn extended(&self, step: Step) -> Path {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Path { steps }
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
