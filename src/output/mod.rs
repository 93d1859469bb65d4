pub mod formatter;

pub use formatter::{
    format_breakdown, format_grid_table, format_header, format_percentage, format_results,
    format_tsv, format_weather, format_winner, ranked_rows, should_use_colors, RankedDriver,
};
