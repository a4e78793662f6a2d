pub mod active_set;
pub mod band_scale;
pub mod boundary;
pub mod category_scale;
pub mod data;
pub mod layout;
pub mod scale;
pub mod value_scale;

pub use active_set::InactiveSeries;
pub use band_scale::BandScale;
pub use boundary::Boundary;
pub use category_scale::{CategoryScale, CategoryWindow};
pub use data::{
    ChartData, GroupEntry, Series, SeriesLengthPolicy, default_categories, transform_series,
};
pub use layout::{ChartLayout, LayoutMargins};
pub use scale::LinearScale;
pub use value_scale::{
    ScaleInputs, ScaleState, VALUE_DOMAIN_HEADROOM, active_value_max, value_domain_max,
};
