//! Pose streaming boundary: wire codec, UDP receive loop, CSV sink.

pub mod csv;
pub mod receiver;
pub mod wire;

pub use csv::CsvSink;
pub use receiver::PoseReceiver;
pub use wire::PoseRecord;
