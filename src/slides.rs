use std::error::Error;
use std::fs::File;
use std::io::Read;

use crate::config::Config;
use crate::html;

// Read a markdown file and embed it into the slideshow html document.
// The open and the read share one error path, a file that disappears
// between the two surfaces the same way as one that never existed.
pub fn process_file(cfg: &Config, path: &str) -> Result<String, Box<dyn Error>> {
    let mut buf = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut buf))
        .map_err(|e| format!("failed to read the markdown file \"{}\": {}", path, e))?;
    process_string(cfg, &buf)
}

// Embed a markdown string into the slideshow html document.
pub fn process_string(cfg: &Config, content: &str) -> Result<String, Box<dyn Error>> {
    let gen = html::Generator::new()?;
    gen.exec(cfg, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_file() {
        let path = std::env::temp_dir().join("mdslide_process_file_test.md");
        std::fs::write(&path, "# Hello\n\n---\n\nWorld").unwrap();

        let cfg = Config::default();
        let html = process_file(&cfg, path.to_str().unwrap()).unwrap();
        assert!(html.contains("# Hello\n\n---\n\nWorld"));
        assert_eq!(html, process_string(&cfg, "# Hello\n\n---\n\nWorld").unwrap());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_process_file_not_found() {
        let err = process_file(&Config::default(), "does-not-exist.md").unwrap_err();
        assert!(err.to_string().contains("does-not-exist.md"));
    }

    #[test]
    fn test_process_string_idempotent() {
        let cfg = Config::default();
        let one = process_string(&cfg, "* a\n* b").unwrap();
        let two = process_string(&cfg, "* a\n* b").unwrap();
        assert_eq!(one, two);
    }
}
