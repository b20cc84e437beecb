//! Testing utilities for the storefront carousel crates.

pub mod fake_track;
pub mod frame_driver;

pub use fake_track::FakeTrack;
pub use frame_driver::TestFrameDriver;

pub mod prelude {
    pub use crate::fake_track::FakeTrack;
    pub use crate::frame_driver::TestFrameDriver;
}
