use serde::{Deserialize, Serialize};

/// Attribute carrying the stable identifier shared by a live node and its
/// clone.
pub const DEFAULT_ID_ATTRIBUTE: &str = "data-percy-element-id";
/// Attribute present on every live element hosting a shadow root.
pub const DEFAULT_SHADOW_HOST_ATTRIBUTE: &str = "data-percy-shadow-host";
/// Attribute set on `<style>` elements written by serialization.
pub const DEFAULT_SERIALIZED_MARKER: &str = "data-percy-cssom-serialized";

/// Attribute names a pass reads and writes.
///
/// Missing fields in a deserialized value fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Stable identifier attribute, see [`DEFAULT_ID_ATTRIBUTE`].
    pub id_attribute: String,
    /// Shadow host marker, see [`DEFAULT_SHADOW_HOST_ATTRIBUTE`].
    pub shadow_host_attribute: String,
    /// Marker for synthesized `<style>` elements, see
    /// [`DEFAULT_SERIALIZED_MARKER`].
    pub serialized_marker: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
            shadow_host_attribute: DEFAULT_SHADOW_HOST_ATTRIBUTE.to_string(),
            serialized_marker: DEFAULT_SERIALIZED_MARKER.to_string(),
        }
    }
}
