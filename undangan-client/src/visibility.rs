use std::collections::{HashMap, HashSet};

use crate::{
    api::{CommentId, Error},
    Store, COMMENT,
};

/// Which reply threads are expanded and which replies are shown.
///
/// Only the host page toggles this, the renderer just reads it.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "LoadedVisibility", into = "StoredVisibility")]
pub struct VisibilityState {
    /// Comments whose replies are expanded
    pub show: HashSet<CommentId>,

    /// Whether each reply is itself shown
    pub hidden: HashMap<CommentId, bool>,
}

// Layout of the "comment" namespace in the store
#[derive(Clone, serde::Serialize)]
struct StoredVisibility {
    show: Vec<CommentId>,
    hidden: Vec<HiddenEntry>,
}

#[derive(Clone, serde::Deserialize, serde::Serialize)]
struct HiddenEntry {
    uuid: CommentId,
    show: bool,
}

// Same layout, with entries decoded one at a time so a bad one only loses
// itself
#[derive(Default, serde::Deserialize)]
struct LoadedVisibility {
    #[serde(default)]
    show: Vec<serde_json::Value>,
    #[serde(default)]
    hidden: Vec<serde_json::Value>,
}

fn entries<T: serde::de::DeserializeOwned>(
    field: &'static str,
    values: Vec<serde_json::Value>,
) -> impl Iterator<Item = T> {
    values
        .into_iter()
        .filter_map(move |v| match serde_json::from_value(v) {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::warn!(field, %err, "ignoring unreadable visibility entry");
                None
            }
        })
}

impl From<LoadedVisibility> for VisibilityState {
    fn from(s: LoadedVisibility) -> VisibilityState {
        VisibilityState {
            show: entries("show", s.show).collect(),
            hidden: entries::<HiddenEntry>("hidden", s.hidden)
                .map(|e| (e.uuid, e.show))
                .collect(),
        }
    }
}

impl From<VisibilityState> for StoredVisibility {
    fn from(v: VisibilityState) -> StoredVisibility {
        let mut show = v.show.into_iter().collect::<Vec<_>>();
        show.sort_unstable();
        let mut hidden = v
            .hidden
            .into_iter()
            .map(|(uuid, show)| HiddenEntry { uuid, show })
            .collect::<Vec<_>>();
        hidden.sort_unstable_by(|a, b| a.uuid.cmp(&b.uuid));
        StoredVisibility { show, hidden }
    }
}

impl VisibilityState {
    pub fn load<S: Store + ?Sized>(store: &S) -> VisibilityState {
        let Some(doc) = store.get(COMMENT) else {
            return VisibilityState::default();
        };
        serde_json::from_value(doc).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring unreadable visibility state");
            VisibilityState::default()
        })
    }

    /// Whether the replies to `uuid` are expanded, false if unknown
    pub fn is_expanded(&self, uuid: &CommentId) -> bool {
        self.show.contains(uuid)
    }

    pub fn node_visibility(&self, uuid: &CommentId) -> Result<bool, Error> {
        self.hidden
            .get(uuid)
            .copied()
            .ok_or_else(|| Error::MissingVisibility(uuid.clone()))
    }

    /// Whether the reply `uuid` is shown, false if unknown
    pub fn is_node_visible(&self, uuid: &CommentId) -> bool {
        self.node_visibility(uuid).unwrap_or_else(|err| {
            tracing::trace!(%err, "treating reply as hidden");
            false
        })
    }
}
