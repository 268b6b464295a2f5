pub mod aggregate;

pub use aggregate::{EditTarget, Sale, SaleDraft, SalePatch};
