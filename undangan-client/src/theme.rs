use std::str::FromStr;

use anyhow::anyhow;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns `dark` in dark mode, `light` otherwise
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    /// Color token for text, contrasting with the background
    pub fn text(self) -> &'static str {
        self.pick("light", "dark")
    }

    /// Color token for card backgrounds
    pub fn surface(self) -> &'static str {
        self.pick("dark", "light")
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Indonesian,
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Locale> {
        match &s.to_lowercase() as &str {
            "en" | "english" => Ok(Locale::English),
            "id" | "indonesian" => Ok(Locale::Indonesian),
            _ => Err(anyhow!("unknown locale {s:?}, expected one of en, id")),
        }
    }
}

impl Locale {
    pub fn attending(self) -> &'static str {
        match self {
            Locale::English => "Attending",
            Locale::Indonesian => "Datang",
        }
    }

    pub fn not_attending(self) -> &'static str {
        match self {
            Locale::English => "Unable to attend",
            Locale::Indonesian => "Berhalangan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        assert_eq!(Theme::Dark.text(), "light");
        assert_eq!(Theme::Dark.surface(), "dark");
        assert_eq!(Theme::Light.text(), "dark");
        assert_eq!(Theme::Light.surface(), "light");
        assert_eq!(Theme::Light.pick(1, 2), 2);
    }

    #[test]
    fn locale_names() {
        assert_eq!("id".parse::<Locale>().unwrap(), Locale::Indonesian);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
        assert!("fr".parse::<Locale>().is_err());
    }
}
