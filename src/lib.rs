/// A single account: balance, holder name and passbook behind one lock.
pub mod account;

/// Passbook entries and their printed line format.
pub mod passbook;

/// Account number issuance and routing of operations to accounts.
pub mod bank;

/// Terminal menu table and the commands built from it.
pub mod command;

/// Command processor interface, implemented by [`bank::Bank`].
///
/// NOTE: the bank can be used directly; the trait is the seam the batch
/// driver (and any other front end) talks to.
pub mod processor;

/// Batch driver that runs a CSV script against a bank. It lives in the
/// library so the integration tests can use it.
pub mod bin_utils;
