use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use salsa::DatabaseImpl;
use sweep_db::{File, check_file, fix_file};
use sweep_errors::{Diagnostic, Renderer};

#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "sweep", about = "Finds and removes trailing whitespace")]
enum Options {
    /// Report trailing whitespace without touching any file.
    Check { paths: Vec<Utf8PathBuf> },
    /// Remove trailing whitespace, rewriting files in place.
    Fix {
        paths: Vec<Utf8PathBuf>,
        /// Print the fixed text to stdout instead of writing it back.
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> anyhow::Result<()> {
    match Options::parse() {
        Options::Check { paths } => check(paths),
        Options::Fix { paths, dry_run } => fix(paths, dry_run),
    }
}

fn check(paths: Vec<Utf8PathBuf>) -> anyhow::Result<()> {
    let db = DatabaseImpl::default();
    let renderer = Renderer::styled();
    let mut clean = true;

    for path in paths {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read `{path}`"))?;
        let file = File::new(&db, path, text);
        let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

        let path = file.path(&db).as_str();
        let text = file.text(&db);
        for diagnostic in diagnostics {
            clean = false;
            eprintln!("{}", diagnostic.render(&renderer, path, text));
        }
    }

    if !clean {
        std::process::exit(1);
    }
    Ok(())
}

fn fix(paths: Vec<Utf8PathBuf>, dry_run: bool) -> anyhow::Result<()> {
    let db = DatabaseImpl::default();

    for path in paths {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read `{path}`"))?;
        let file = File::new(&db, path.clone(), text);
        let fixed = fix_file(&db, file);

        if dry_run {
            print!("{fixed}");
        } else if fixed.as_str() != file.text(&db) {
            std::fs::write(&path, fixed)
                .with_context(|| format!("failed to write `{path}`"))?;
            eprintln!("fixed {path}");
        }
    }

    Ok(())
}
