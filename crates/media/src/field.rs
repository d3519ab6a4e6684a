use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A writable field of an entity: API name, storage column, required flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteField {
    pub name: String,
    pub storage_name: String,
    pub required: bool,
}

impl WriteField {
    pub fn new(name: impl Into<String>, storage_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage_name: storage_name.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Adds, removes or adjusts the fields of a write operation.
pub trait FieldExtender: Send + Sync {
    fn extend_fields(&self, fields: &mut Vec<WriteField>);
}

impl<F> FieldExtender for F
where
    F: Fn(&mut Vec<WriteField>) + Send + Sync,
{
    fn extend_fields(&self, fields: &mut Vec<WriteField>) {
        self(fields)
    }
}

/// Ordered set of extenders, applied in the order they were added.
#[derive(Clone, Default)]
pub struct FieldExtenderCollection {
    extenders: Vec<Arc<dyn FieldExtender>>,
}

impl FieldExtenderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<E>(&mut self, extender: E)
    where
        E: FieldExtender + 'static,
    {
        self.extenders.push(Arc::new(extender));
    }

    /// Add an extender that is also held elsewhere.
    pub fn add_shared(&mut self, extender: Arc<dyn FieldExtender>) {
        self.extenders.push(extender);
    }

    pub fn len(&self) -> usize {
        self.extenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extenders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FieldExtender>> {
        self.extenders.iter()
    }
}

impl FieldExtender for FieldExtenderCollection {
    fn extend_fields(&self, fields: &mut Vec<WriteField>) {
        for extender in &self.extenders {
            extender.extend_fields(fields);
        }
    }
}

impl core::fmt::Debug for FieldExtenderCollection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldExtenderCollection")
            .field("extenders", &self.extenders.len())
            .finish()
    }
}
