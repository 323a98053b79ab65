//! Query-component serialization.

use super::QueryParams;

/// Serializes parameters back to a query component (no leading `?`).
///
/// Form-urlencoded output: keys keep their order, repeated keys become
/// repeated pairs, values are percent-encoded with space as `+`.
pub fn serialize_query(params: &QueryParams) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
