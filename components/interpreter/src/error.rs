//! VM error types

use core_types::Namespace;
use thiserror::Error;

/// Recoverable execution errors.
///
/// Stack overflow and underflow are not listed here: they panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// An operator met a value that is not an immediate number
    #[error("{mnemonic}: operand is {namespace}, expected immediate number")]
    NonImmediateOperand {
        /// Mnemonic of the executing opcode
        mnemonic: &'static str,
        /// Namespace of the offending operand
        namespace: Namespace,
    },

    /// The configured instruction budget ran out
    #[error("instruction budget of {limit} exhausted")]
    BudgetExhausted {
        /// The configured budget
        limit: u64,
    },
}
