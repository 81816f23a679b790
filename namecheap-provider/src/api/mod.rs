//! Per-command façade methods on [`NamecheapClient`](crate::NamecheapClient),
//! one file per API area. Each builds its parameters and dispatches through
//! the matching [`operations`](crate::operations) descriptor.

mod dns;
mod domains;
mod ns;
mod ssl;
mod users;
mod whoisguard;
