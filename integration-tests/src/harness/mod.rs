pub mod fixture;
pub mod tracing;

pub use fixture::{LogFixture, Row, at};
pub use tracing::{CapturedEvent, init_test_tracing};
