pub mod classify;
pub mod export;
pub mod input;
pub mod pipeline;
pub mod record;
pub mod runlog;
pub mod signals;
pub mod vocab;

pub use pipeline::Pipeline;
pub use record::{Category, EnrichmentRecord, Entity, PageRecord, RowStatus};
pub use runlog::RunLogger;
pub use signals::SignalSet;
