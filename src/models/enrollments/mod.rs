pub mod entities;

pub use entities::TranscriptEntry;
