//! Macro for reducing boilerplate when defining entity kinds
//!
//! One invocation generates the persisted record, the wire shape and the
//! converter between them. Field rules are written on the fields as
//! `#[validate(...)]` attributes and only land on the wire shape.

/// Generate the record, wire shape and converter of one entity kind
///
/// Every field is stored as `Option<T>`. Columns listed under `unique` are
/// reported through [`Record::unique_keys`](crate::core::record::Record::unique_keys).
///
/// # Example
///
/// ```rust,ignore
/// use shopfront::core::validation::validators::not_blank;
///
/// impl_crud_entity!(
///     record: CategoryRecord,
///     wire: CategoryDto,
///     mapper: CategoryMapper,
///     table: "categories",
///     unique: [],
///     {
///         #[validate(required(message = "Name is required"))]
///         name: String,
///         active: bool,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_crud_entity {
    (
        record: $record:ident,
        wire: $wire:ident,
        mapper: $mapper:ident,
        table: $table:expr,
        unique: [ $( $unique:ident ),* $(,)? ],
        {
            $(
                $( #[$meta:meta] )*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        /// Persisted form; equality is by identifier only
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $record {
            pub id: Option<$crate::core::record::RecordId>,
            $( pub $field: Option<$ty>, )*
        }

        impl PartialEq for $record {
            fn eq(&self, other: &Self) -> bool {
                $crate::core::record::same_identity(self.id, other.id)
            }
        }

        impl $crate::core::record::Record for $record {
            fn table() -> &'static str {
                $table
            }

            fn id(&self) -> Option<$crate::core::record::RecordId> {
                self.id
            }

            fn assign_id(&mut self, id: $crate::core::record::RecordId) {
                self.id = Some(id);
            }

            fn unique_keys(&self) -> Vec<(&'static str, String)> {
                let keys: Vec<(&'static str, Option<String>)> = vec![
                    $( (stringify!($unique), self.$unique.as_ref().map(|v| v.to_string())), )*
                ];
                keys.into_iter()
                    .filter_map(|(column, value)| value.map(|value| (column, value)))
                    .collect()
            }
        }

        /// Transfer form; `id` is read-only and ignored on input
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::validator::Validate,
        )]
        #[serde(rename_all = "camelCase")]
        pub struct $wire {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub id: Option<$crate::core::record::RecordId>,
            $(
                $( #[$meta] )*
                pub $field: Option<$ty>,
            )*
        }

        pub struct $mapper;

        impl $crate::core::converter::Converter for $mapper {
            type Record = $record;
            type Wire = $wire;

            fn to_wire(record: &$record) -> $wire {
                $wire {
                    id: record.id,
                    $( $field: record.$field.clone(), )*
                }
            }

            fn to_record(wire: &$wire) -> $record {
                $record {
                    id: None,
                    $( $field: wire.$field.clone(), )*
                }
            }

            fn apply_to_record(record: &mut $record, wire: &$wire) {
                $( record.$field = wire.$field.clone(); )*
            }
        }
    };
}
