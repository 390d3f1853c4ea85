pub mod cardinal;
pub mod heading;
pub mod zones;

pub use cardinal::cardinal_16;
pub use heading::{Heading, normalize};
pub use zones::{ActiveZone, CHAKRA_DEITIES, Zone, ZoneCount, classify, zones};
