/// Account logic: owner identity, exact decimal balance, and the
/// debit/credit operations enforcing the non-negative balance rule.
pub mod account;

/// Bank aggregate. Owns a collection of accounts and moves money
/// between them by account id.
pub mod bank;

/// Create validated operations that later are executed against [`bank`].
pub mod operation;

/// Operation processor interface, plus "in memory" implementation.
/// Coordinates all the logic from operation parsing and processing
///
/// NOTE: Technically this interface is not necessary, but it might be
/// good integration point to replace in memory implementation with
/// something more sophisticated.
pub mod processor;

/// Ideally, this module should exists on its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
