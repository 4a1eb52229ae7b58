//! Quickcheck harness. Each submodule fuzzes one area of the crate; shared
//! generator plumbing lives in `quick`.

mod quick;
mod tree;

pub(crate) use quick::Op;
