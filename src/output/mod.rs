pub mod formatter;

pub use formatter::{
    format_bike_detail, format_breakdown, format_header, format_price, format_results,
    format_tsv, should_use_colors, title_case, NO_MATCHES,
};
