//! Core types for kvgate: the key-value storage capability and the pure
//! request-routing rules that sit in front of it.

pub mod routing;
pub mod storage;
