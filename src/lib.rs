use url::Url;

pub mod config;
mod html;
pub mod slides;

pub fn is_url(s: &str) -> bool {
    Url::try_from(s).is_ok()
}
