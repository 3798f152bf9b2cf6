//! # igframe
//!
//! Re-frames photos onto social media canvases: a 2:3 or 3:4 photo goes onto a
//! 4:5 (or custom) canvas, scaled and centered, with either a blurred copy of
//! itself or a plain frame as the background, and is written back as JPEG.
//!
//! ## Architecture
//!
//! - `ig_layout` (workspace crate): placement geometry and the resize kernel
//! - [`config`]: per-variant settings and validation
//! - [`processing`]: pixel composition of the variants
//! - [`batch`]: single-file and list conversion with per-file error isolation
//! - [`store`]: filesystem collaborator
//! - [`naming`]: output file names
//! - [`error`]: error taxonomy
//!
//! ## Example
//!
//! ```rust,no_run
//! use igframe::{batch::convert_file, config::{BorderConfig, Job}, store::FsStore};
//!
//! let job = Job::Bordered(BorderConfig::default());
//! let written = convert_file("IMG_0001.jpg".as_ref(), &job, &FsStore)?;
//! println!("wrote {}", written.display());
//! # Ok::<(), igframe::error::ConvertError>(())
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod naming;
pub mod processing;
pub mod store;

pub use batch::{convert_file, convert_files, convert_list, BatchSummary};
pub use config::{BlurConfig, BorderConfig, Job};
pub use error::{ConvertError, ConvertResult, HasRecoverySuggestion};
pub use store::{FsStore, ImageStore};

pub use ig_layout::rect::{calculate_internal_image_rectangle, is_vertical, Placement, ScaleRule, Size};
