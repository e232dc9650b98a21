/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::parse_color;

pub(crate) mod arg_parsers;
mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("favicon-gen")
        .about("Generate favicon PNG files and a multi size favicon.ico")
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Directory to write the favicons to")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .help("Source image to resample instead of drawing a disc")
            .value_parser(value_parser!(PathBuf))
            .conflicts_with("color"))
        .arg(Arg::new("color")
            .long("color")
            .help("Fill color of the procedural disc, as R,G,B[,A] or #RRGGBB[AA]")
            .long_help(help_strings::COLOR_HELP)
            .value_parser(parse_color))
        .arg(Arg::new("ico-render")
            .long("ico-render")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Render every favicon.ico size instead of reusing the largest png")
            .long_help(help_strings::ICO_RENDER_HELP))
        .arg(Arg::new("effort")
            .long("effort")
            .help_heading("ADVANCED")
            .help("zlib compression level, 0-9")
            .value_parser(value_parser!(u8).range(0..=9))
            .default_value("9"))
        .arg(Arg::new("summary")
            .long("summary")
            .action(ArgAction::SetTrue)
            .help("Print a JSON summary of the written files"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about written files"))
}
