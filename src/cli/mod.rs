//! Operator-facing console layer

pub mod operator;

pub use operator::{ConsoleIo, OperatorIo, ScriptedIo};
