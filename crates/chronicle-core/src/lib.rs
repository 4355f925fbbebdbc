//! Chronicle Core - the computational side of the Chronicle news site
//!
//! The site itself is view composition over a hosted backend; everything
//! that actually computes lives here: the thumbnail crop/rotate extractor,
//! article text derivations (slug, read time), record validation and
//! lifecycle patches, the inbox CSV export, storage key derivation, and
//! the session/config plumbing.

pub mod config;
pub mod content;
pub mod decode;
pub mod encode;
pub mod export;
pub mod extract;
pub mod model;
pub mod raster;
pub mod session;
pub mod storage;

pub use config::BackendConfig;
pub use content::{read_time_minutes, slugify, strip_markup, word_count};
pub use decode::{decode_image, DecodeError};
pub use encode::{encode_jpeg, EncodeError, EXPORT_QUALITY};
pub use export::{contacts_csv, subscribers_csv, ExportError};
pub use extract::{extract_region, extract_to_jpeg, rotated_bounds, CropRect, ExtractError};
pub use model::{Article, ContactMessage, Subscriber, ValidationError};
pub use raster::Raster;
pub use session::{AuthEvent, Session, SessionState};
