/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Parse a color given as `R,G,B[,A]` or `#RRGGBB[AA]`
///
/// Alpha defaults to 255
pub fn parse_color(value: &str) -> Result<[u8; 4], String> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    let split_args: Vec<&str> = value.split(',').map(str::trim).collect();

    if split_args.len() != 3 && split_args.len() != 4 {
        return Err(format!(
            "Color expected 3 or 4 values separated by `,`, got {}",
            split_args.len()
        ));
    }
    let mut color = [0, 0, 0, 255];

    for (channel, arg) in color.iter_mut().zip(split_args) {
        *channel = str::parse::<u8>(arg).map_err(|x| format!("Invalid channel {arg:?}: {x}"))?;
    }
    Ok(color)
}

fn parse_hex_color(hex: &str) -> Result<[u8; 4], String> {
    if (hex.len() != 6 && hex.len() != 8) || !hex.is_ascii() {
        return Err(format!(
            "Hex color expected 6 or 8 digits, got {:?}",
            hex
        ));
    }
    let mut color = [0, 0, 0, 255];

    for (channel, pos) in color.iter_mut().zip((0..hex.len()).step_by(2)) {
        *channel = u8::from_str_radix(&hex[pos..pos + 2], 16)
            .map_err(|x| format!("Invalid hex color #{hex}: {x}"))?;
    }
    Ok(color)
}
