use crate::constants::CARDINAL_SECTOR_DEGREES;

const CARDINALS_16: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point cardinal name for a heading in degrees.
///
/// Rounds to the nearest 22.5° sector, so sector boundaries split halfway:
/// anything within 11.25° of due north reads "N".
pub fn cardinal_16(degrees: f32) -> &'static str {
    let sector = (degrees / CARDINAL_SECTOR_DEGREES).round() as usize % 16;
    CARDINALS_16[sector]
}
