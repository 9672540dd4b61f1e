//! Playback state and the player façade.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `media`: Media element interface, events and source identity
//! - `state`: PlaybackState and the changes it reports
//! - `store`: PlaybackStore, which forwards commands and applies events
//! - `scrub`: Progress bar position mapping and hover throttling
//! - `session`: Player façade and per-source sessions
//!
//! # Usage
//!
//! ```no_run
//! use cueplay::player::{MediaEvent, MediaSource, Player};
//! use cueplay::{Config, MediaElement, MediaError};
//!
//! struct Headless;
//!
//! impl MediaElement for Headless {
//!     fn play(&mut self) -> Result<(), MediaError> { Ok(()) }
//!     fn pause(&mut self) -> Result<(), MediaError> { Ok(()) }
//!     fn seek(&mut self, _time: f64) -> Result<(), MediaError> { Ok(()) }
//!     fn set_volume(&mut self, _volume: f64) -> Result<(), MediaError> { Ok(()) }
//! }
//!
//! let mut player = Player::with_ffmpeg(Headless, Config::default());
//! player.load_source(MediaSource::new("movie.mp4"));
//! player.handle_event(MediaEvent::LoadedMetadata { duration: 120.0 });
//! player.handle_event(MediaEvent::TimeUpdate { time: 12.5 });
//! println!("{:.1}%", player.state().progress_percent());
//! ```

pub mod media;
pub mod scrub;
pub mod session;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use media::{MediaElement, MediaError, MediaEvent, MediaSource};
pub use scrub::{HoverPreview, HoverTracker};
pub use session::{HoverUpdate, Player, Session};
pub use state::{PlaybackPhase, PlaybackState, StateChange};
pub use store::{CommandError, PlaybackStore};
