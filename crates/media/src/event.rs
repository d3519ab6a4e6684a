use commerce_events::Event;

use crate::field::FieldExtenderCollection;

/// Published before product-media fields are written.
///
/// Subscribers add extenders to the carried collection in place.
#[derive(Debug, Default)]
pub struct ProductMediaWriteExtenderEvent {
    extender_collection: FieldExtenderCollection,
}

impl ProductMediaWriteExtenderEvent {
    pub const NAME: &'static str = "product_media.write.extender";

    pub fn new(extender_collection: FieldExtenderCollection) -> Self {
        Self {
            extender_collection,
        }
    }

    pub fn extender_collection(&self) -> &FieldExtenderCollection {
        &self.extender_collection
    }

    pub fn extender_collection_mut(&mut self) -> &mut FieldExtenderCollection {
        &mut self.extender_collection
    }

    pub fn into_extender_collection(self) -> FieldExtenderCollection {
        self.extender_collection
    }
}

impl Event for ProductMediaWriteExtenderEvent {
    fn event_type(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::WriteField;

    #[test]
    fn event_type_is_the_stable_name() {
        let event = ProductMediaWriteExtenderEvent::default();
        assert_eq!(event.event_type(), "product_media.write.extender");
        assert_eq!(event.version(), 1);
    }

    #[test]
    fn carried_collection_is_mutable_in_place() {
        let mut event = ProductMediaWriteExtenderEvent::new(FieldExtenderCollection::new());

        event
            .extender_collection_mut()
            .add(|fields: &mut Vec<WriteField>| fields.push(WriteField::new("alt", "alt")));

        assert_eq!(event.extender_collection().len(), 1);
        assert_eq!(event.into_extender_collection().len(), 1);
    }
}
