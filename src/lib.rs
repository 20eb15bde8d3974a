#![warn(missing_docs)]
#![doc = r#"
SMPTE timecode designed for humans

`timecodex` converts between frame indices and SMPTE timecode text such as
`01:23:45:12`, including the drop-frame notation (`01:23:45;12`) used by
23.976, 29.97 and 59.94 fps material.

# Example
```rust
use timecodex::prelude::*;

// drop-frame: `;00` and `;01` don't exist at the start of minute 2
let tc = Timecode::parse("00:02:00;00", Rate::FPS_23_976).unwrap();
assert_eq!(tc.to_string(), "00:02:00;02");
assert_eq!(tc.frame(), 2878);

// non-drop frame
let tc = Timecode::from_frame_index(1511, Rate::FPS_24, false);
assert_eq!(tc.to_string(), "00:01:02:23");
assert_eq!((tc + Frame(3)).to_string(), "00:01:03:02");
```

# Features
- `serde`: `Serialize`/`Deserialize` for all value types
- `tracing`: log skipped drop-frame codes and correction passes
"#]

mod components;
pub mod drop_frame;
mod error;
mod frame;
mod nanos;
mod rate;
mod timecode;

pub use components::*;
pub use error::*;
pub use frame::*;
pub use nanos::*;
pub use rate::*;
pub use timecode::*;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        Components, Frame, FrameIndex, Nanos, ParseError, ParseResult, Rate, Separator, Timecode,
    };
}
