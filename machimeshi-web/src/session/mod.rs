//! Session state, page access policy, and the reusable auth gate.
//!
//! The session is materialized from two cookies (`authToken` and `userType`)
//! into a yewdux store. [`store::set_session`] and [`store::clear_session`]
//! are the only writers; everything else subscribes to the store.

pub mod gate;
pub mod policy;
pub mod profile_cache;
pub mod store;

#[cfg(test)]
mod policy_test;
#[cfg(test)]
mod store_test;
