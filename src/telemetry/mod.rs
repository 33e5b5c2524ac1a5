//! Report protocol
//!
//! The outgoing report format (frame + checksum), the flow-controlled
//! serial transport that carries it, and the streaming matcher that watches
//! for the modem's success marker.

pub mod checksum;
pub mod frame;
pub mod matcher;
pub mod transport;

pub use checksum::Crc8;
pub use frame::{Report, FRAME_LEN};
pub use matcher::{ResponseMatcher, RxControl, SEND_OK_MARKER};
