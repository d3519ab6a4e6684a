/// A domain-agnostic event payload.
///
/// Unlike persisted domain facts, these events are notifications handed to
/// subscribers *before* an operation proceeds; subscribers may mutate them.
pub trait Event: core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "product_media.write.extender").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32 {
        1
    }
}
