//! Build artifacts derived from a version record
//! - resource.rs: Windows resource script (.rc) generator
//! - properties.rs: gradle.properties patcher
//! - error.rs: Patch error type

pub mod error;
pub mod properties;
pub mod resource;

pub use error::PatchError;
pub use properties::PropertiesPatcher;
pub use resource::{render_resource_script, write_resource_script};
