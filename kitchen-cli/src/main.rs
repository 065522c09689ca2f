use clap::Parser;
use kitchen_common::ManifestItem;
use kitchen_core::{check_manifest, generate_manifest, KitchenConfig, KitchenPaths, ManifestStatus};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Scan the kitchen testbed directory and regenerate the component manifest.
#[derive(Parser)]
#[command(name = "generate-kitchen-manifest")]
struct Args {
    /// Project root that config paths are relative to.
    /// Defaults to the workspace this tool was built from.
    #[arg(long, env = "KITCHEN_ROOT")]
    root: Option<PathBuf>,

    /// Config file. Defaults to kitchen.yaml under the project root, if present.
    #[arg(long, env = "KITCHEN_CONFIG")]
    config: Option<PathBuf>,

    /// Exit non-zero if the manifest is missing or out of date, without writing it.
    #[arg(long)]
    check: bool,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout is reserved for the summary
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn default_root() -> PathBuf {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    crate_dir.parent().unwrap_or(crate_dir).to_path_buf()
}

fn write_summary(
    out: &mut impl Write,
    items: &[ManifestItem],
    paths: &KitchenPaths,
) -> std::io::Result<()> {
    writeln!(out, "Generated manifest with {} components:", items.len())?;
    for item in items {
        writeln!(out, "- {} ({})", item.name, item.slug)?;
    }
    writeln!(out, "Manifest written to: {}", paths.manifest_path.display())
}

fn main() {
    configure_logging();
    let args = Args::parse();

    let root = args.root.clone().unwrap_or_else(default_root);
    let config = KitchenConfig::load(&root, args.config.as_deref()).unwrap_or_else(|e| {
        error!("Failed to load config: {e}");
        std::process::exit(1);
    });
    let paths = config.resolve(&root);

    println!("Scanning for testbed files in: {}", paths.testbed_dir.display());

    if args.check {
        let status = check_manifest(&paths).unwrap_or_else(|e| {
            error!("Error checking manifest: {e}");
            std::process::exit(1);
        });
        match status {
            ManifestStatus::UpToDate => {
                println!("Manifest is up to date: {}", paths.manifest_path.display());
            }
            ManifestStatus::Missing | ManifestStatus::Stale => {
                error!(
                    "Manifest {} is {:?}; run generate-kitchen-manifest",
                    paths.manifest_path.display(),
                    status
                );
                std::process::exit(1);
            }
        }
        return;
    }

    let items = generate_manifest(&paths).unwrap_or_else(|e| {
        error!("Error generating manifest: {e}");
        std::process::exit(1);
    });

    let stdout = std::io::stdout();
    if let Err(e) = write_summary(&mut stdout.lock(), &items, &paths) {
        error!("Failed to write summary: {e}");
        std::process::exit(1);
    }
    info!("Done");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_each_component() {
        let items = vec![
            ManifestItem::from_name("BarBaz"),
            ManifestItem::from_name("Foo"),
        ];
        let paths = KitchenPaths::new("kitchen", "public/kitchen-manifest.json");
        let mut out = Vec::new();
        write_summary(&mut out, &items, &paths).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Generated manifest with 2 components:\n\
             - BarBaz (bar-baz)\n\
             - Foo (foo)\n\
             Manifest written to: public/kitchen-manifest.json\n"
        );
    }

    #[test]
    fn zero_arguments_parse() {
        let args = Args::try_parse_from(["generate-kitchen-manifest"]).unwrap();
        assert!(!args.check);
        assert!(args.config.is_none());
    }

    #[test]
    fn default_root_contains_workspace_manifest() {
        assert!(default_root().join("Cargo.toml").exists());
    }

    #[test]
    fn repository_manifest_is_up_to_date() {
        let root = default_root();
        let paths = KitchenConfig::load(&root, None).unwrap().resolve(&root);
        assert_eq!(check_manifest(&paths).unwrap(), ManifestStatus::UpToDate);
    }
}
