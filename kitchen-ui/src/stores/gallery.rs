//! Gallery load state

use kitchen_common::{ManifestItem, ManifestLoadError, GENERATE_COMMAND, TESTBED_SUFFIX};

/// Where the manifest load stands
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryState {
    Loading,
    Failed(ManifestLoadError),
    Ready(Vec<ManifestItem>),
}

/// One navigable gallery entry
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryEntry {
    /// Unique render key (the component name)
    pub key: String,
    pub label: String,
    pub href: String,
}

impl From<&ManifestItem> for GalleryEntry {
    fn from(item: &ManifestItem) -> Self {
        Self {
            key: item.name.clone(),
            label: item.name.clone(),
            href: item.href(),
        }
    }
}

/// What the gallery body shows for a state
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryBody {
    Loading,
    Error { message: String, detail: String },
    Empty { message: String },
    Entries(Vec<GalleryEntry>),
}

pub fn empty_message() -> String {
    format!(
        "No components found. Create {TESTBED_SUFFIX} files in kitchen-mocks/src/kitchen/ and run {GENERATE_COMMAND}."
    )
}

impl GalleryState {
    /// Map a pending (`None`) or finished load onto a state.
    pub fn from_load(result: Option<&Result<Vec<ManifestItem>, ManifestLoadError>>) -> Self {
        match result {
            None => Self::Loading,
            Some(Ok(items)) => Self::Ready(items.clone()),
            Some(Err(e)) => Self::Failed(e.clone()),
        }
    }

    pub fn body(&self) -> GalleryBody {
        match self {
            Self::Loading => GalleryBody::Loading,
            Self::Failed(e) => GalleryBody::Error {
                message: e.remediation(),
                detail: e.to_string(),
            },
            Self::Ready(items) if items.is_empty() => GalleryBody::Empty {
                message: empty_message(),
            },
            Self::Ready(items) => GalleryBody::Entries(items.iter().map(GalleryEntry::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use kitchen_common::{ManifestLoader, StaticManifestSource};

    fn load(source: StaticManifestSource) -> GalleryState {
        let result = block_on(ManifestLoader::new(source).load());
        GalleryState::from_load(Some(&result))
    }

    #[test]
    fn starts_loading() {
        assert_eq!(GalleryState::from_load(None).body(), GalleryBody::Loading);
    }

    #[test]
    fn empty_manifest_shows_message_not_list() {
        let body = load(StaticManifestSource(Ok(vec![]))).body();
        assert_eq!(body, GalleryBody::Empty { message: empty_message() });
    }

    #[test]
    fn rejection_shows_error_never_ready() {
        let state = load(StaticManifestSource(Err(ManifestLoadError::Missing(
            "/kitchen-manifest.json".into(),
        ))));
        assert!(!matches!(state, GalleryState::Ready(_)));
        match state.body() {
            GalleryBody::Error { message, detail } => {
                assert!(message.contains(GENERATE_COMMAND));
                assert!(detail.contains("/kitchen-manifest.json"));
            }
            other => panic!("expected error body, got {other:?}"),
        }
    }

    #[test]
    fn entries_link_to_slug_routes() {
        let items = vec![
            ManifestItem::from_name("BarBaz"),
            ManifestItem::from_name("SwitchRouterButton"),
        ];
        let body = load(StaticManifestSource(Ok(items))).body();
        assert_eq!(
            body,
            GalleryBody::Entries(vec![
                GalleryEntry {
                    key: "BarBaz".into(),
                    label: "BarBaz".into(),
                    href: "/kitchen/bar-baz".into(),
                },
                GalleryEntry {
                    key: "SwitchRouterButton".into(),
                    label: "SwitchRouterButton".into(),
                    href: "/kitchen/switch-router-button".into(),
                },
            ])
        );
    }
}
