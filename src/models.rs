//! Wire models for the TheHive v5 API, one submodule per entity.
//!
//! Input types serialize with unset optional fields omitted; output types
//! tolerate fields the server leaves out.

pub mod alert;
pub mod case;
pub mod observable;

pub use alert::{InputAlert, InputBulkUpdateAlert, InputUpdateAlert, OutputAlert};
pub use case::OutputCase;
pub use observable::{InputObservable, OutputObservable};
