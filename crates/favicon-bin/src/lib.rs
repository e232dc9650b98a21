/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Favicon generation front end
//!
//! Renders the fixed set of favicon assets into an output directory,
//! see [`workflow::generate`].
use std::process::exit;

use log::error;

use crate::workflow::generate;

pub mod assets;
mod cmd_args;
mod cmd_parsers;
pub mod config;
pub mod errors;
mod file_io;
pub mod report;
pub mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let result = cmd_parsers::global_options::parse_options(&options)
        .and_then(|config| generate(&config).map(|report| (config, report)));

    match result {
        Ok((config, report)) => {
            if config.summary {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        error!("Could not serialize summary, reason {:?}", err);
                        exit(-1);
                    }
                }
            }
        }
        Err(err) => {
            println!();
            error!(" Could not generate favicons, reason {:?}", err);
            println!();
            exit(-1);
        }
    }
}
