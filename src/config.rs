use std::{error::Error, fs::File, io::Read};

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Title";
pub const DEFAULT_REMARK_JS_HREF: &str =
    "https://gnab.github.io/remark/downloads/remark-latest.min.js";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub remark_js_href: String,
    pub css_href: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: String::from(DEFAULT_TITLE),
            remark_js_href: String::from(DEFAULT_REMARK_JS_HREF),
            css_href: String::from(""),
        }
    }
}

pub fn read_config(path: &str) -> Result<Config, Box<dyn Error>> {
    let mut buf = String::new();
    File::open(path)?.read_to_string(&mut buf)?;

    let mut cfg: Config = serde_json::from_str(&buf)?;
    if cfg.title.is_empty() {
        cfg.title = String::from(DEFAULT_TITLE);
    }
    if cfg.remark_js_href.is_empty() {
        cfg.remark_js_href = String::from(DEFAULT_REMARK_JS_HREF);
    }
    if !crate::is_url(&cfg.remark_js_href) {
        return Err(format!(
            "invalid url of the slideshow script: \"{}\"",
            cfg.remark_js_href
        )
        .into());
    }
    if !cfg.css_href.is_empty() && !crate::is_url(&cfg.css_href) {
        return Err(format!("invalid url of the css: \"{}\"", cfg.css_href).into());
    }
    Ok(cfg)
}
