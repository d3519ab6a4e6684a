use commerce_events::{EventPublisher, Subscriber};

use crate::event::ProductMediaWriteExtenderEvent;
use crate::field::{FieldExtender, FieldExtenderCollection, WriteField};

/// Resolves the writable fields of the product-media association.
///
/// Each resolution publishes a fresh [`ProductMediaWriteExtenderEvent`];
/// whatever extenders subscribers put into it are applied to the base
/// fields, in the order they were added.
#[derive(Debug)]
pub struct ProductMediaWriteResource {
    base_fields: Vec<WriteField>,
    publisher: EventPublisher<ProductMediaWriteExtenderEvent>,
}

impl ProductMediaWriteResource {
    pub fn new() -> Self {
        Self::with_fields(Self::default_fields())
    }

    pub fn with_fields(base_fields: Vec<WriteField>) -> Self {
        Self {
            base_fields,
            publisher: EventPublisher::new(),
        }
    }

    /// Fields every product-media write carries.
    pub fn default_fields() -> Vec<WriteField> {
        vec![
            WriteField::new("uuid", "uuid").required(),
            WriteField::new("productUuid", "product_uuid").required(),
            WriteField::new("mediaUuid", "media_uuid").required(),
            WriteField::new("isCover", "is_cover"),
            WriteField::new("position", "position"),
        ]
    }

    pub fn subscribe<S>(&mut self, subscriber: S)
    where
        S: Subscriber<ProductMediaWriteExtenderEvent> + 'static,
    {
        self.publisher.subscribe(subscriber);
    }

    pub fn base_fields(&self) -> &[WriteField] {
        &self.base_fields
    }

    pub fn write_fields(&self) -> Vec<WriteField> {
        let mut event = ProductMediaWriteExtenderEvent::new(FieldExtenderCollection::new());
        self.publisher.publish(&mut event);

        let extenders = event.into_extender_collection();
        let mut fields = self.base_fields.clone();
        extenders.extend_fields(&mut fields);

        tracing::debug!(
            extenders = extenders.len(),
            base = self.base_fields.len(),
            resolved = fields.len(),
            "resolved product media write fields"
        );

        fields
    }
}

impl Default for ProductMediaWriteResource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subscribers_yields_base_fields() {
        let resource = ProductMediaWriteResource::new();

        assert_eq!(resource.write_fields(), ProductMediaWriteResource::default_fields());
    }

    #[test]
    fn each_resolution_starts_from_an_empty_collection() {
        let mut resource = ProductMediaWriteResource::with_fields(Vec::new());
        resource.subscribe(|event: &mut ProductMediaWriteExtenderEvent| {
            assert!(event.extender_collection().is_empty());
            event
                .extender_collection_mut()
                .add(|fields: &mut Vec<WriteField>| fields.push(WriteField::new("x", "x")));
        });

        assert_eq!(resource.write_fields().len(), 1);
        assert_eq!(resource.write_fields().len(), 1);
        assert!(resource.base_fields().is_empty());
    }
}
