/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static COLOR_HELP: &str = "Fill color of the procedural disc

Accepts comma separated channels, R,G,B or R,G,B,A with values
between 0 and 255, or a hex color #RRGGBB or #RRGGBBAA.
Alpha defaults to 255 (opaque).";

pub static ICO_RENDER_HELP: &str = "Render every favicon.ico size

favicon.ico declares 16, 32, 48 and 64 pixel entries. By default
sizes without a matching png reuse the largest png (512x512),
which icon readers scale down. With this flag each size is rendered
from the source instead.";
