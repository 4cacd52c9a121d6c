pub mod sdk;

pub use sdk::cities::{sanitize_name, CityRecord};
pub use sdk::config::ExtractConfig;
pub use sdk::encoder::{GeoAddEncoder, RallyingPoint};
pub use sdk::error::ExtractError;
pub use sdk::extract::{collect_cities, is_valid, run, ExtractReport, ExtractSummary};
pub use sdk::regions::{Region, RegionTable};
