mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)]
// ============================================================================

/// Derive macro that implements `clapboard::Record` (and `clapboard::ProjectScoped`
/// when the struct carries a project foreign key).
///
/// # Usage
///
/// ```ignore
/// use clapboard::Record;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(key = "crew", name = "Crew")]
/// struct CrewMember {
///     pub id: String,
///     #[record(project)]
///     pub project_id: String,
///     pub name: String,
/// }
/// ```
///
/// - `#[record(key = "...")]` sets the storage key.
///   If omitted, defaults to snake_case struct name + "s".
/// - `#[record(name = "...")]` sets the logical name. Defaults to the struct name.
/// - `#[record(id)]` marks the identifier field. Defaults to a field named `id`.
/// - `#[record(project)]` marks the project foreign key (`String` or
///   `Option<String>`). Defaults to a field named `project_id`; structs with
///   neither are not project scoped.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
