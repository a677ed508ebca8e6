//! Mapping between persisted records and wire shapes

/// Bidirectional field copy between a record and its wire shape.
///
/// Implementations are pure: no validation, no side effects, never fail.
/// The `*_opt` helpers give absent-in, absent-out semantics.
pub trait Converter: Send + Sync + 'static {
    type Record;
    type Wire;

    /// Copy every domain field plus the identifier into a wire shape
    fn to_wire(record: &Self::Record) -> Self::Wire;

    /// Build a fresh, unsaved record. Any id on the wire shape is ignored.
    fn to_record(wire: &Self::Wire) -> Self::Record;

    /// Overwrite the record's domain fields in place. The id is left untouched.
    fn apply_to_record(record: &mut Self::Record, wire: &Self::Wire);

    fn to_wire_opt(record: Option<&Self::Record>) -> Option<Self::Wire> {
        record.map(Self::to_wire)
    }

    fn to_record_opt(wire: Option<&Self::Wire>) -> Option<Self::Record> {
        wire.map(Self::to_record)
    }

    /// No-op unless both sides are present
    fn apply_to_record_opt(record: Option<&mut Self::Record>, wire: Option<&Self::Wire>) {
        if let (Some(record), Some(wire)) = (record, wire) {
            Self::apply_to_record(record, wire);
        }
    }
}
