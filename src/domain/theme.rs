use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("`{other}` is not a valid theme.")),
        }
    }
}

/// 页面主题设置，启动时由配置传入，通过setter修改
#[derive(Debug, Default)]
pub struct ThemeSetting(RwLock<Theme>);

impl ThemeSetting {
    pub fn new(theme: Theme) -> Self {
        Self(RwLock::new(theme))
    }

    pub fn get(&self) -> Theme {
        *self.0.read()
    }

    pub fn set(&self, theme: Theme) {
        *self.0.write() = theme;
    }

    /// 切换主题并返回新主题
    pub fn toggle(&self) -> Theme {
        let mut theme = self.0.write();
        *theme = theme.toggle();
        *theme
    }
}
