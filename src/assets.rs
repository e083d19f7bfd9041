//! Asset registry and decoding.
//!
//! Fetching is an external collaborator behind [`store::AssetSource`]; the
//! registry front-loads IO so the per-frame pipeline never touches it.

pub mod decode;
pub mod store;
