//! Requests, each a `struct` implementing [`RemoteCall`](tlkit_wire::RemoteCall).
//!
//! A request encodes boxed: its own constructor id, then its arguments. The
//! response is decoded with [`RemoteCall::decode_response`](tlkit_wire::RemoteCall::decode_response),
//! which dispatches through the registry of the request's return family.

pub mod messages;
pub mod users;
