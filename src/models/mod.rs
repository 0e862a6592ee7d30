mod metadata;
mod score;

pub use metadata::{MetadataRecord, OpenGraph, SchemaData, TwitterCard};
pub use score::{Analysis, PlatformScore, ScoreResult};
