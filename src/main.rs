//! Standalone orbit camera viewer binary.

use std::path::Path;

use orbitcam::{options::Options, OrbitError, Viewer};

/// `orbitcam [preset.toml | preset-dir [name]]`
fn load_options() -> Result<Options, OrbitError> {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return Ok(Options::default());
    };
    let path = Path::new(&arg);
    if path.is_dir() {
        Options::load_preset(path, args.next().as_deref())
    } else {
        Options::load(path)
    }
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("failed to load options: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
