use std::error::Error;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::config::Config;

// html template of the slideshow document, the markdown content is placed
// into the textarea and remark.js turns it into slides in the browser.
const TP_SLIDESHOW_NAME: &str = "slideshow";
const TP_SLIDESHOW: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>{ title }</title>
    <meta charset="utf-8">
    <style>
      @import url(https://fonts.googleapis.com/css?family=Yanone+Kaffeesatz);
      @import url(https://fonts.googleapis.com/css?family=Droid+Serif:400,700,400italic);
      @import url(https://fonts.googleapis.com/css?family=Ubuntu+Mono:400,700,400italic);

      body \{ font-family: 'Droid Serif'; }
      h1, h2, h3 \{
        font-family: 'Yanone Kaffeesatz';
        font-weight: normal;
      }
      .remark-code, .remark-inline-code \{ font-family: 'Ubuntu Mono'; background-color: #F0F0F0; }
      .remark-code-line \{ min-height: 0px !important; }
    </style>
{{ if css_href }}    <link rel="stylesheet" type="text/css" href="{ css_href }">
{{ endif }}  </head>
  <body>
    <textarea id="source">
{ content }
    </textarea>
    <script src="{ remark_js_href }"></script>
    <script>
      var slideshow = remark.create();
    </script>
  </body>
</html>"#;

#[derive(Serialize)]
struct SlideshowContext<'slideshow_context> {
    title: &'slideshow_context str,
    css_href: &'slideshow_context str,
    remark_js_href: &'slideshow_context str,
    content: &'slideshow_context str,
}

pub(crate) struct Generator<'generator> {
    tt: TinyTemplate<'generator>,
}

impl<'generator> Generator<'generator> {
    pub(crate) fn new() -> Result<Self, Box<dyn Error>> {
        let mut tt = TinyTemplate::new();
        tt.add_template(TP_SLIDESHOW_NAME, TP_SLIDESHOW)?;
        // the markdown content must land in the textarea untouched,
        // escaping is remark's business, not ours.
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        Ok(Generator { tt })
    }

    pub(crate) fn exec(&self, cfg: &Config, content: &str) -> Result<String, Box<dyn Error>> {
        let ctx = SlideshowContext {
            title: &cfg.title,
            css_href: &cfg.css_href,
            remark_js_href: &cfg.remark_js_href,
            content,
        };
        let s = self.tt.render(TP_SLIDESHOW_NAME, &ctx)?;
        Ok(s)
    }
}
