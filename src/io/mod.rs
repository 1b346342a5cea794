pub mod scad;
pub mod svg;

pub use scad::{polygon_statement, write_scad, write_scad_file};
pub use svg::{find_all, load_path_data, parse_path_data, path_data_from_str};
