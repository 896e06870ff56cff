use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, Section};

/// Named moments of the greeting page that carry a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKey {
    TurnOn,
    Play,
    BannarComing,
    BalloonsFlying,
    CakeFadein,
    LightCandle,
    WishMessage,
    Story,
}

impl EventKey {
    /// Every key, in the order the page plays them.
    pub const ALL: [EventKey; 8] = [
        EventKey::TurnOn,
        EventKey::Play,
        EventKey::BannarComing,
        EventKey::BalloonsFlying,
        EventKey::CakeFadein,
        EventKey::LightCandle,
        EventKey::WishMessage,
        EventKey::Story,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKey::TurnOn => "turn_on",
            EventKey::Play => "play",
            EventKey::BannarComing => "bannar_coming",
            EventKey::BalloonsFlying => "balloons_flying",
            EventKey::CakeFadein => "cake_fadein",
            EventKey::LightCandle => "light_candle",
            EventKey::WishMessage => "wish_message",
            EventKey::Story => "story",
        }
    }
}

impl FromStr for EventKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EventKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::missing(Section::Desc, s))
    }
}

impl std::fmt::Display for EventKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Descriptions {
    pub turn_on: String,
    pub play: String,
    pub bannar_coming: String,
    pub balloons_flying: String,
    pub cake_fadein: String,
    pub light_candle: String,
    pub wish_message: String,
    pub story: String,
}

impl Descriptions {
    pub fn get(&self, key: EventKey) -> &str {
        match key {
            EventKey::TurnOn => &self.turn_on,
            EventKey::Play => &self.play,
            EventKey::BannarComing => &self.bannar_coming,
            EventKey::BalloonsFlying => &self.balloons_flying,
            EventKey::CakeFadein => &self.cake_fadein,
            EventKey::LightCandle => &self.light_candle,
            EventKey::WishMessage => &self.wish_message,
            EventKey::Story => &self.story,
        }
    }
}

/// Text and image references for one greeting page.
///
/// Built once by [`crate::asset`] and handed to consumers by reference;
/// nothing mutates it afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    pub texts: Vec<String>,
    pub imgs: BTreeMap<String, String>,
    pub desc: Descriptions,
}

impl GreetingConfig {
    /// The poem lines exactly as authored.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn image_path(&self, label: &str) -> Result<&str> {
        self.imgs
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| Error::missing(Section::Imgs, label))
    }

    pub fn image_labels(&self) -> impl Iterator<Item = &str> {
        self.imgs.keys().map(String::as_str)
    }

    /// Joins the image path for `label` onto `base_dir`. The file is not
    /// required to exist.
    pub fn resolve_image(&self, label: &str, base_dir: &Path) -> Result<PathBuf> {
        let path = self.image_path(label)?;
        Ok(base_dir.join(path))
    }

    pub fn description(&self, key: &str) -> Result<&str> {
        let key: EventKey = key.parse()?;
        Ok(self.caption(key))
    }

    pub fn caption(&self, key: EventKey) -> &str {
        self.desc.get(key)
    }

    /// Checks what serde cannot: captions and image entries must not be blank.
    pub fn validate(&self, source_name: &str) -> Result<()> {
        for key in EventKey::ALL {
            if self.caption(key).trim().is_empty() {
                return Err(Error::malformed(
                    source_name,
                    format!("caption for `{}` is empty", key),
                ));
            }
        }
        for (label, path) in &self.imgs {
            if label.trim().is_empty() {
                return Err(Error::malformed(source_name, "image label is empty"));
            }
            if path.trim().is_empty() {
                return Err(Error::malformed(
                    source_name,
                    format!("image path for `{}` is empty", label),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GreetingConfig {
        let mut imgs = BTreeMap::new();
        imgs.insert("cover".to_string(), "imgs/cover.png".to_string());
        GreetingConfig {
            texts: vec!["one".to_string(), "".to_string(), "one".to_string()],
            imgs,
            desc: Descriptions {
                turn_on: "a".to_string(),
                play: "b".to_string(),
                bannar_coming: "c".to_string(),
                balloons_flying: "d".to_string(),
                cake_fadein: "e".to_string(),
                light_candle: "f".to_string(),
                wish_message: "g".to_string(),
                story: "h".to_string(),
            },
        }
    }

    #[test]
    fn event_keys_parse_back() {
        for key in EventKey::ALL {
            assert_eq!(key.as_str().parse::<EventKey>().unwrap(), key);
        }
        assert!(matches!(
            "Story".parse::<EventKey>(),
            Err(Error::MissingKey { section: Section::Desc, .. })
        ));
    }

    #[test]
    fn texts_keep_duplicates_and_blanks() {
        let config = sample();
        assert_eq!(config.texts(), ["one", "", "one"]);
    }

    #[test]
    fn image_lookup() {
        let config = sample();
        assert_eq!(config.image_path("cover").unwrap(), "imgs/cover.png");
        match config.image_path("back") {
            Err(Error::MissingKey { section, key }) => {
                assert_eq!(section, Section::Imgs);
                assert_eq!(key, "back");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn resolve_image_does_not_touch_disk() {
        let config = sample();
        let path = config
            .resolve_image("cover", Path::new("/nowhere/site"))
            .unwrap();
        assert_eq!(path, PathBuf::from("/nowhere/site/imgs/cover.png"));
    }

    #[test]
    fn description_by_name() {
        let config = sample();
        assert_eq!(config.description("light_candle").unwrap(), "f");
        assert!(config.description("blow_candle").is_err());
    }

    #[test]
    fn blank_caption_fails_validation() {
        let mut config = sample();
        config.desc.play = "  ".to_string();
        let err = config.validate("sample").unwrap_err();
        assert!(err.to_string().contains("`play`"), "{}", err);
    }

    #[test]
    fn blank_image_path_fails_validation() {
        let mut config = sample();
        config.imgs.insert("empty".to_string(), String::new());
        assert!(matches!(
            config.validate("sample"),
            Err(Error::MalformedAsset { .. })
        ));
    }

    #[test]
    fn no_images_is_valid() {
        let mut config = sample();
        config.imgs.clear();
        config.validate("sample").unwrap();
        assert_eq!(config.image_labels().count(), 0);
    }
}
