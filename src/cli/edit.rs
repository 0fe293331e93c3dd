// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;
use std::process;

use crate::cli::args::EditArgs;
use crate::config::StudioConfig;
use crate::{VERSION, verbose, warn};

/// Run the interactive pose editor.
pub fn run_edit(args: &EditArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    let interval = if args.interval == 0 {
        warn!("'--interval 0' is invalid. Using the default 100 ms.");
        100
    } else {
        args.interval
    };

    let config = StudioConfig::new()
        .with_frame_interval_ms(interval)
        .with_gif_quality(args.quality);

    verbose!(
        "Stick Studio {VERSION}: {}x{} surface, {} ms capture interval",
        config.surface_width,
        config.surface_height,
        config.frame_interval_ms
    );

    let app = crate::app::App::new(config, PathBuf::from(&args.output));

    #[cfg(feature = "visualize")]
    if let Err(e) = crate::editor::run(app) {
        crate::error!("Editor failed: {e}");
        process::exit(1);
    }

    #[cfg(not(feature = "visualize"))]
    {
        let _ = app;
        crate::error!(
            "The editor requires the 'visualize' feature. Compile with --features visualize."
        );
        process::exit(1);
    }
}
