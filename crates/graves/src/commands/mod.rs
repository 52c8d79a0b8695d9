use clap::Args;
use grave_layout::MapOrigin;

pub mod format_csv;
pub mod grid_kml;
pub mod sequential_kml;

/// Map position of the first grave; also the rotation pivot
#[derive(Args, Debug, Clone, Copy)]
pub struct AnchorArgs {
    /// Longitude where graves start, e.g. -1.9566000
    #[arg(short = 'o', long = "long-start", allow_negative_numbers = true)]
    pub long_start: f64,

    /// Latitude where graves start, e.g. 53.8306300
    #[arg(short = 'a', long = "lat-start", allow_negative_numbers = true)]
    pub lat_start: f64,
}

impl AnchorArgs {
    pub fn origin(&self) -> MapOrigin {
        MapOrigin::new(self.long_start, self.lat_start)
    }
}
