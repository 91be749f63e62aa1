pub mod error;
pub mod eval;
pub mod operand;
pub mod operator;
pub mod value;
