//! Editor support module
//!
//! Data-only services for editor tooling.

mod inspector_registry;

pub use inspector_registry::{
    ComponentView, InspectorRegistry, Property, PropertyValue,
    register_builtin_inspectors,
};
