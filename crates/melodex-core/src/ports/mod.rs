pub mod id_source;

pub use id_source::{IdSource, SequentialIds};
pub(crate) use id_source::PROCESS_IDS;
