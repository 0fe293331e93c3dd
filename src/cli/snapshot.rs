// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::Path;
use std::process;

use crate::cli::args::SnapshotArgs;
use crate::color::StrokeColor;
use crate::config::StudioConfig;
use crate::export::save_snapshot;
use crate::skeleton::Skeleton;
use crate::{error, success};

/// Render the default pose headlessly and write `stick.png`.
pub fn run_snapshot(args: &SnapshotArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    let stroke: StrokeColor = match args.color.parse() {
        Ok(stroke) => stroke,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let config = StudioConfig::new();
    let skeleton = Skeleton::new();

    match save_snapshot(&skeleton, stroke.color(), &config, Path::new(&args.output)) {
        Ok(path) => {
            success!("Snapshot saved to {}", path.display());
        }
        Err(e) => {
            error!("Failed to save snapshot: {e}");
            process::exit(1);
        }
    }
}
