pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ARTIST_PATH, TEST_BASE_PATH, TEST_EVENTS_PATH},
        fixtures::{catalog, factory},
        TestBuilder, TestError, TestSetup,
    };
}
