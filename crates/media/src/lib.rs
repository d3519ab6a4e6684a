//! Product-media write extension.
//!
//! Before product-media fields are written, a [`ProductMediaWriteExtenderEvent`]
//! is published so other modules can contribute [`FieldExtender`]s. The
//! collected extenders then shape the list of writable fields.

pub mod event;
pub mod field;
pub mod resource;

pub use event::ProductMediaWriteExtenderEvent;
pub use field::{FieldExtender, FieldExtenderCollection, WriteField};
pub use resource::ProductMediaWriteResource;
