/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use favicon_raster::DEFAULT_DISC_COLOR;
use log::{info, Level};

use crate::config::{GeneratorConfig, IcoStrategy, SourceKind};
use crate::errors::FaviconErrors;

pub fn parse_options(options: &ArgMatches) -> Result<GeneratorConfig, FaviconErrors> {
    let output = options
        .get_one::<PathBuf>("output")
        .ok_or_else(|| String::from("No output directory given"))?;

    let mut config = GeneratorConfig::new(output.clone());

    if let Some(input) = options.get_one::<PathBuf>("input") {
        info!("Resampling source image {:?}", input);
        config = config.set_source(SourceKind::Loaded {
            path: input.clone()
        });
    } else {
        let color = options
            .get_one::<[u8; 4]>("color")
            .copied()
            .unwrap_or(DEFAULT_DISC_COLOR);
        info!("Drawing disc with color {:?}", color);
        config = config.set_source(SourceKind::Procedural { color });
    }

    if options.get_flag("ico-render") {
        info!("Rendering every favicon.ico size");
        config = config.set_ico_strategy(IcoStrategy::RenderEachSize);
    }

    if options.value_source("effort") == Some(ValueSource::CommandLine) {
        if let Some(effort) = options.get_one::<u8>("effort") {
            info!("Setting compression effort to {}", effort);
            config = config.set_effort(*effort);
        }
    }
    config = config.set_summary(options.get_flag("summary"));

    Ok(config)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;
    use crate::config::{IcoStrategy, SourceKind};

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["favicon-gen", "-o", "public"])
            .unwrap();
        let config = parse_options(&matches).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(
            config.source,
            SourceKind::Procedural {
                color: [40, 120, 200, 255]
            }
        );
        assert_eq!(config.ico_strategy, IcoStrategy::Fallback);
        assert_eq!(config.effort, 9);
        assert!(!config.summary);
    }

    #[test]
    fn loaded_source_and_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "favicon-gen",
                "-o",
                "public",
                "-i",
                "public/favicon.png",
                "--ico-render",
                "--effort",
                "3",
                "--summary"
            ])
            .unwrap();
        let config = parse_options(&matches).unwrap();

        assert_eq!(
            config.source,
            SourceKind::Loaded {
                path: PathBuf::from("public/favicon.png")
            }
        );
        assert_eq!(config.ico_strategy, IcoStrategy::RenderEachSize);
        assert_eq!(config.effort, 3);
        assert!(config.summary);
    }

    #[test]
    fn color_reaches_procedural_source() {
        let matches = create_cmd_args()
            .try_get_matches_from(["favicon-gen", "-o", "public", "--color", "#FF000080"])
            .unwrap();
        let config = parse_options(&matches).unwrap();

        assert_eq!(
            config.source,
            SourceKind::Procedural {
                color: [255, 0, 0, 128]
            }
        );
    }
}
