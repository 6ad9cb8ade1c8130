pub mod requirement;

pub use requirement::{ClusterShape, FormatError, NodeSpec, ResourceRequirement, SizeKind};
