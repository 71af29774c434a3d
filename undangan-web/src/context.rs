use chrono::Utc;
use undangan_client::{api::Time, Locale, Session, Store, Theme, VisibilityState};

pub const DEFAULT_PER_PAGE: usize = 10;

/// Host-provided settings that do not live in the store
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub locale: Locale,

    /// Whether the viewer is logged in as the page owner
    pub is_admin: bool,

    pub per_page: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            theme: Theme::default(),
            locale: Locale::default(),
            is_admin: false,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Everything the renderers read, captured once per render pass
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub theme: Theme,
    pub locale: Locale,
    pub session: Session,
    pub visibility: VisibilityState,
    pub per_page: usize,

    /// Reference instant for comment ages
    pub now: Time,
}

impl RenderContext {
    pub fn init<S: Store + ?Sized>(store: &S, settings: Settings) -> RenderContext {
        RenderContext {
            theme: settings.theme,
            locale: settings.locale,
            session: Session::load(store, settings.is_admin),
            visibility: VisibilityState::load(store),
            per_page: settings.per_page,
            now: Utc::now(),
        }
    }

    pub fn at(self, now: Time) -> RenderContext {
        RenderContext { now, ..self }
    }
}
