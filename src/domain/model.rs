use serde::{Deserialize, Serialize};

use crate::core::math;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }
}

/// 一個二元運算：兩個運算元加上一個運算符
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub operand_a: f64,
    pub operand_b: f64,
    pub operator: Operator,
}

impl Operation {
    pub fn new(operand_a: f64, operand_b: f64, operator: Operator) -> Self {
        Self {
            operand_a,
            operand_b,
            operator,
        }
    }

    /// Pure: the result depends only on the operands and the operator.
    pub fn evaluate(&self) -> f64 {
        match self.operator {
            Operator::Add => math::add(self.operand_a, self.operand_b),
            Operator::Subtract => math::subtract(self.operand_a, self.operand_b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbol() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
    }

    #[test]
    fn test_evaluate_dispatch() {
        let add = Operation::new(10.0, 5.0, Operator::Add);
        let sub = Operation::new(10.0, 5.0, Operator::Subtract);
        assert_eq!(add.evaluate(), 15.0);
        assert_eq!(sub.evaluate(), 5.0);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let op = Operation::new(2.5, 4.25, Operator::Add);
        assert_eq!(op.evaluate(), op.evaluate());
        assert_eq!(op, Operation::new(2.5, 4.25, Operator::Add));
    }
}
