pub mod analyzer;
pub mod config;
pub mod detection;
pub mod features;
pub mod input;
pub mod report;
pub mod samples;
pub mod scoring;
pub mod verdict;

pub use analyzer::{analyze, AnalysisResult, Analyzer};
pub use config::Config;
pub use input::AnalysisInput;
pub use verdict::{RiskLevel, Verdict};
