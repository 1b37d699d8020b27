mod gen;

use crate::gen::proc_gen;

use clap::{arg, Command};

fn main() {
    let matches = cli().get_matches();
    proc_gen(&matches);
}

fn cli() -> Command {
    Command::new("mdslide")
        .version("0.1")
        .about("Generate a remark.js slideshow from a markdown file")
        .arg(arg!(<MARKDOWN_FILE_PATH> "Path of the markdown file shown as slides"))
        .arg(arg!(-o --output [OUTPUT_FILE_PATH] "Specify path of the output html file, default stdout."))
        .arg(arg!(-c --"config-path" [CONFIG_PATH] "Specify path of the config file, it's optional."))
}
