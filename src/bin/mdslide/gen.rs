use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::process;

use mdslide::config::{self, Config};
use mdslide::slides;

use clap::ArgMatches;

pub fn proc_gen(matches: &ArgMatches) {
    if let Err(e) = gen(matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn gen(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let cfg = load_config(matches)?;

    // read markdown file path from cli
    let md_path = matches
        .get_one::<String>("MARKDOWN_FILE_PATH")
        .expect("required");

    let html = slides::process_file(&cfg, md_path)?;

    // output the html
    match matches.get_one::<String>("output") {
        None => println!("{}", html),
        Some(path) => {
            let mut out = File::options()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)
                .map_err(|e| format!("failed to open the output file \"{}\": {}", path, e))?;
            out.write_all(html.as_bytes())?;
        }
    }
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<Config, Box<dyn Error>> {
    match matches.get_one::<String>("config-path") {
        None => Ok(Config::default()),
        Some(path) => config::read_config(path)
            .map_err(|e| format!("failed to read config \"{}\": {}", path, e).into()),
    }
}
