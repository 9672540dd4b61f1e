//! Integration tests for cueplay

mod cue_test;
mod helpers;
mod player_test;
mod thumbnail_test;
