//! exprcalc evaluates lines of arithmetic: the four basic operators,
//! parentheses, unary minus, integer and decimal literals. Parsing and
//! evaluation happen in one pass; see [`calc_engine::Evaluator`].

pub mod calc_engine;

pub use calc_engine::{Evaluator, SyntaxError, Value};
