pub mod archive;
pub mod cli;
pub mod error;
pub mod media;
pub mod metadata;
pub mod recover;
pub mod scan;
pub mod timestamp;

pub use cli::{Cli, OutputFormat};
pub use error::RestampError;
pub use media::MediaKind;
pub use recover::{recover, RecoverOptions, RecoverStats};
pub use timestamp::CaptureTimestamp;
