mod directive;
pub use directive::Directive;

mod model;
pub use model::{FieldDescriptor, Model, ModelDescriptor};

mod ty;
pub use ty::FieldType;
