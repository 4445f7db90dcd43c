mod app;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use albumview::models::SourceKind;
use albumview::SessionConfig;
use app::{AppOptions, ViewerApp};

const USAGE: &str = "\
Usage: albumview [OPTIONS] [FILE]

Options:
  --folder DIR      Browse every image in DIR
  --archive ZIP     Browse every image in a zip archive
  --size WxH        Viewport size (default 800x600)
  --keys \"d d t\"    Keys to press, separated by spaces
  --no-info         Hide the size/name overlay
  --pan             Start at native size instead of fitting
  --yes             Confirm deletions
  -h, --help        Show this help";

fn parse_size(s: &str) -> Result<(i32, i32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("Expected WxH, got {s:?}"))?;
    let w = w.trim().parse().with_context(|| format!("Bad width in {s:?}"))?;
    let h = h.trim().parse().with_context(|| format!("Bad height in {s:?}"))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("albumview=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let folder: Option<PathBuf> = args.opt_value_from_str("--folder")?;
    let archive: Option<PathBuf> = args.opt_value_from_str("--archive")?;
    let size: Option<String> = args.opt_value_from_str("--size")?;
    let keys: Option<String> = args.opt_value_from_str("--keys")?;
    let no_info = args.contains("--no-info");
    let pan = args.contains("--pan");
    let assume_yes = args.contains("--yes");
    let file: Option<PathBuf> = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    let open = match (file, folder, archive) {
        (None, None, None) => None,
        (Some(path), None, None) => Some((SourceKind::File, path)),
        (None, Some(path), None) => Some((SourceKind::Folder, path)),
        (None, None, Some(path)) => Some((SourceKind::Archive, path)),
        _ => bail!("Pass only one of FILE, --folder or --archive"),
    };

    let config = SessionConfig {
        fit_to_window: !pan,
        show_info: !no_info,
        ..SessionConfig::default()
    };

    let options = AppOptions {
        open,
        keys: keys
            .map(|k| k.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default(),
        size: size.as_deref().map(parse_size).transpose()?,
        assume_yes,
    };

    let start_dir = std::env::current_dir().context("Cannot read working directory")?;
    let mut app = ViewerApp::new(config, &start_dir, options);
    app.run(&mut std::io::stdout().lock())
}
