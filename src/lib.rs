
mod pipeline;
mod config;
mod corpus;
mod sampling;
mod skipgram;
mod negative;
mod dataset;
mod builder;
mod error;

pub use pipeline::Pipeline;
pub use config::files_handling;
pub use corpus::Corpus;
pub use sampling::SamplingTable;
pub use skipgram::SkipGrams;
pub use negative::NegativeSampler;
pub use dataset::{Dataset, TrainingExample};
pub use builder::DatasetBuilder;
pub use error::SamplerError;
