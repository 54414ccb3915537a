pub mod json;

pub use json::{
    read_pad, read_pad_file, write_pad, write_pad_file, PadRecord, PointRecord, RocketRecord,
    DEFAULT_STORE,
};
