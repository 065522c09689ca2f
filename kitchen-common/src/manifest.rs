use serde::{Deserialize, Serialize};

use crate::slug::to_slug;

/// File name suffix that marks a testbed definition.
pub const TESTBED_SUFFIX: &str = ".testbed.rs";

/// Suffix appended to a component name to form the registry key.
pub const EXPORT_SUFFIX: &str = "Testbed";

/// Route prefix under which every testbed page lives.
pub const KITCHEN_ROUTE_PREFIX: &str = "/kitchen";

/// One discoverable component in the generated manifest.
///
/// Field order is the serialized key order: `name`, `slug`, `exportName`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestItem {
    pub name: String,
    pub slug: String,
    pub export_name: String,
}

impl ManifestItem {
    /// Derive the record for a bare component name.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            slug: to_slug(&name),
            export_name: format!("{name}{EXPORT_SUFFIX}"),
            name,
        }
    }

    /// Derive the record for a file name carrying `suffix`.
    ///
    /// Returns `None` when the file does not end with the suffix or nothing
    /// is left once it is stripped.
    pub fn from_file_name(file_name: &str, suffix: &str) -> Option<Self> {
        let name = file_name.strip_suffix(suffix)?;
        if name.is_empty() {
            return None;
        }
        Some(Self::from_name(name))
    }

    /// Gallery link target for this component.
    pub fn href(&self) -> String {
        format!("{KITCHEN_ROUTE_PREFIX}/{}", self.slug)
    }
}

/// Serialize a manifest the way it is stored on disk: pretty JSON with a
/// two-space indent and no trailing newline.
pub fn render_manifest(items: &[ManifestItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}

/// Parse manifest JSON as written by [`render_manifest`].
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<ManifestItem>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_item_from_file_name() {
        let item = ManifestItem::from_file_name("SwitchRouterButton.testbed.rs", TESTBED_SUFFIX)
            .expect("matches suffix");
        assert_eq!(item.name, "SwitchRouterButton");
        assert_eq!(item.slug, "switch-router-button");
        assert_eq!(item.export_name, "SwitchRouterButtonTestbed");
        assert_eq!(item.href(), "/kitchen/switch-router-button");
    }

    #[test]
    fn rejects_non_matching_and_empty_names() {
        assert!(ManifestItem::from_file_name("Button.rs", TESTBED_SUFFIX).is_none());
        assert!(ManifestItem::from_file_name("Button.testbed.rs.bak", TESTBED_SUFFIX).is_none());
        assert!(ManifestItem::from_file_name(".testbed.rs", TESTBED_SUFFIX).is_none());
    }

    #[test]
    fn renders_camel_case_keys_with_two_space_indent() {
        let json = render_manifest(&[ManifestItem::from_name("Foo")]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"name\": \"Foo\",\n    \"slug\": \"foo\",\n    \"exportName\": \"FooTestbed\"\n  }\n]"
        );
    }

    #[test]
    fn empty_manifest_is_bare_brackets() {
        assert_eq!(render_manifest(&[]).unwrap(), "[]");
    }

    #[test]
    fn parse_reads_rendered_output() {
        let items = vec![ManifestItem::from_name("BarBaz"), ManifestItem::from_name("Foo")];
        let json = render_manifest(&items).unwrap();
        assert_eq!(parse_manifest(json.as_bytes()).unwrap(), items);
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert!(parse_manifest(br#"{"name":"Foo"}"#).is_err());
        assert!(parse_manifest(br#"[{"name":"Foo","slug":"foo"}]"#).is_err());
        assert!(parse_manifest(b"not json").is_err());
    }
}
