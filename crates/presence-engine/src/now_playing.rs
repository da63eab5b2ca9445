//! "Now playing" line shown during listening hours.
//!
//! Between 11:00 and 19:00 offset time, except on Sundays, a random song from
//! [`SONGS`] is reported. The host refreshes the line on its own cadence
//! ([`FIRST_UPDATE_DELAY_MS`], then every [`UPDATE_INTERVAL_MS`]).

use std::fmt;
use std::ops::Range;

use chrono::{DateTime, Utc, Weekday};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::oracle::{AvailabilityOracle, OracleConfig};

pub const FIRST_UPDATE_DELAY_MS: u64 = 1_000;
pub const UPDATE_INTERVAL_MS: u64 = 240_000;

/// Offset hours (unwrapped) during which a song is playing.
pub const LISTENING_HOURS: Range<u32> = 11..19;

pub const NOT_PLAYING: &str = "🔇 Not playing any song at the moment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Song {
    pub title: &'static str,
    pub artist: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NowPlaying {
    Playing { song: Song },
    Silent,
}

impl NowPlaying {
    pub fn song(&self) -> Option<&Song> {
        match self {
            NowPlaying::Playing { song } => Some(song),
            NowPlaying::Silent => None,
        }
    }
}

impl fmt::Display for NowPlaying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NowPlaying::Playing { song } => write!(f, "🎧 {} by {}", song.title, song.artist),
            NowPlaying::Silent => f.write_str(NOT_PLAYING),
        }
    }
}

/// Whether `now` falls in the listening window.
pub fn is_listening(now: DateTime<Utc>, config: &OracleConfig) -> bool {
    let (weekday, hour) = config.schedule_slot(now);
    LISTENING_HOURS.contains(&hour) && weekday != Weekday::Sun
}

/// Pick what is playing at `now`, drawing the song from `rng`.
pub fn now_playing<R: Rng + ?Sized>(
    now: DateTime<Utc>,
    config: &OracleConfig,
    rng: &mut R,
) -> NowPlaying {
    if !is_listening(now, config) {
        return NowPlaying::Silent;
    }
    SONGS
        .choose(rng)
        .map_or(NowPlaying::Silent, |song| NowPlaying::Playing { song: *song })
}

impl AvailabilityOracle {
    /// [`now_playing`] with this oracle's configuration.
    pub fn now_playing<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> NowPlaying {
        now_playing(now, self.config(), rng)
    }
}

pub const SONGS: &[Song] = &[
    Song { title: "Freestyle", artist: "Lil Baby" },
    Song { title: "THANK GOD", artist: "Travis Scott" },
    Song { title: "Gang Gang", artist: "Polo G" },
    Song { title: "The Woo", artist: "Pop Smoke" },
    Song { title: "For The Night", artist: "Pop Smoke" },
    Song { title: "Mood Swings", artist: "Pop Smoke" },
    Song { title: "Pop Out", artist: "Lil Baby ft. Nardo Wick" },
    Song { title: "Dior", artist: "Pop Smoke" },
    Song { title: "The Box", artist: "Roddy Ricch" },
    Song { title: "The London", artist: "Young Thug" },
    Song { title: "Life Is Good", artist: "Future" },
    Song { title: "Ransom", artist: "Lil Tecca" },
    Song { title: "Ballin'", artist: "Mustard" },
    Song { title: "Panini", artist: "Lil Nas X" },
    Song { title: "Hot", artist: "Young Thug" },
    Song { title: "Suge", artist: "DaBaby" },
    Song { title: "Wow.", artist: "Post Malone" },
    Song { title: "Old Town Road", artist: "Lil Nas X" },
    Song { title: "Raindrops (Insane)", artist: "Metro Boomin" },
    Song { title: "SICKO MODE", artist: "Travis Scott" },
    Song { title: "Lucid Dreams", artist: "Juice WRLD" },
    Song { title: "Nonstop", artist: "Drake" },
    Song { title: "I Like It", artist: "Cardi B" },
    Song { title: "Better Now", artist: "Post Malone" },
    Song { title: "MELTDOWN", artist: "Travis Scott ft. Drake" },
    Song { title: "In A Minute", artist: "Lil Baby" },
    Song { title: "Yes Indeed", artist: "Lil Baby" },
    Song { title: "Low Down", artist: "Lil Baby" },
    Song { title: "Drip Too Hard", artist: "Lil Baby" },
    Song { title: "Never Recover", artist: "Lil Baby" },
    Song { title: "Close Friends", artist: "Lil Baby" },
    Song { title: "Not Finished", artist: "Lil Baby" },
    Song { title: "Walk It Talk It", artist: "Migos" },
    Song { title: "SIRENS", artist: "Travis Scott" },
    Song { title: "BUTTERFLY EFFECT", artist: "Travis Scott" },
    Song { title: "STARGAZING", artist: "Travis Scott" },
    Song { title: "SKELETONS", artist: "Travis Scott" },
    Song { title: "YOSEMITE", artist: "Travis Scott" },
    Song { title: "CAN'T SAY", artist: "Travis Scott" },
    Song { title: "Overdue", artist: "Metro Boomin ft. Travis Scott" },
    Song { title: "Transporin'", artist: "Kodak Black" },
    Song { title: "Sanguine Paradise", artist: "Lil Uzi Vert" },
    Song { title: "That's A Rack", artist: "Lil Uzi Vert" },
    Song { title: "Money In The Grave", artist: "Drake" },
    Song { title: "P Power", artist: "Gunna ft. Drake" },
    Song { title: "Going Bad", artist: "Meek Mill ft. Drake" },
    Song { title: "No Stylist", artist: "French Montana" },
    Song { title: "ZEZE", artist: "Kodak Black" },
    Song { title: "SAD!", artist: "XXXTENTACION" },
    Song { title: "Armed And Dangerous", artist: "Juice WRLD" },
    Song { title: "Millions", artist: "Young Thug" },
    Song { title: "GOD'S COUNTRY", artist: "Travis Scott" },
    Song { title: "Heyy", artist: "Lil Baby" },
    Song { title: "Creepin'", artist: "Metro Boomin" },
    Song { title: "25k jacket", artist: "Gunna" },
    Song { title: "Don't Play", artist: "Polo G" },
    Song { title: "SKITZO", artist: "Travis Scott ft. Young Thug" },
    Song { title: "Bank Account", artist: "21 Savage" },
    Song { title: "rockstar", artist: "Post Malone" },
    Song { title: "Bartier Cardi", artist: "Cardi B" },
    Song { title: "I Get The Bag", artist: "Gucci Mane" },
    Song { title: "I KNOW ?", artist: "Travis Scott" },
    Song { title: "Digits", artist: "Young Thug" },
    Song { title: "Back On", artist: "Quality Control & Lil Baby" },
    Song { title: "Took Her To The O", artist: "King Von" },
    Song { title: "BOP", artist: "DaBaby" },
    Song { title: "Hot", artist: "Meek Mill" },
    Song { title: "ESCAPE PLAN", artist: "Travis Scott" },
    Song { title: "GATTI", artist: "JACKBOYS" },
    Song { title: "OUT WEST", artist: "JACKBOYS" },
    Song { title: "GANG GANG", artist: "JACKBOYS" },
    Song { title: "Right On", artist: "Lil Baby" },
    Song { title: "25 million", artist: "Roddy Ricch" },
    Song { title: "Just Wanna Rock", artist: "Lil Uzi Vert" },
    Song { title: "MY EYES", artist: "Travis Scott" },
    Song { title: "HIGHEST IN THE ROOM", artist: "Travis Scott" },
    Song { title: "Real Spill", artist: "Lil Baby" },
    Song { title: "Woah", artist: "Lil Baby" },
    Song { title: "Broke Boys", artist: "Drake & 21 Savage" },
    Song { title: "Life Is Good", artist: "Drake" },
    Song { title: "Pissy", artist: "Gucci Mane" },
    Song { title: "Baby", artist: "Quality Control & Lil Baby" },
    Song { title: "Bigger Picture", artist: "Lil Baby" },
    Song { title: "We Paid", artist: "Lil Baby" },
    Song { title: "Realist In It", artist: "Lil Baby" },
    Song { title: "south to west", artist: "Lil Baby" },
    Song { title: "Long Time (Intro)", artist: "Playboi Carti" },
    Song { title: "R.I.P. Fredo (Notice Me)", artist: "Playboi Carti" },
    Song { title: "Lean 4 Real", artist: "Playboi Carti" },
    Song { title: "Old Money", artist: "Playboi Carti" },
    Song { title: "Love Hurts", artist: "Playboi Carti" },
    Song { title: "Shoota", artist: "Playboi Carti" },
    Song { title: "Right Now", artist: "Playboi Carti" },
    Song { title: "Poke It Out", artist: "Playboi Carti" },
    Song { title: "5% TINT", artist: "Travis Scott" },
    Song { title: "Check", artist: "Young Thug" },
    Song { title: "My Dawg", artist: "Lil Baby" },
    Song { title: "Frozen", artist: "Lil Baby" },
    Song { title: "Never Needed No Help", artist: "Lil Baby" },
    Song { title: "Close Friends", artist: "Lil Baby" },
    Song { title: "California Breeze", artist: "Lil Baby" },
    Song { title: "Ocean Spray", artist: "Moneybagg Yo" },
    Song { title: "fukumean", artist: "Gunna" },
    Song { title: "fukk sleep", artist: "A$AP Rocky" },
    Song { title: "Me vs Me", artist: "Moneybagg Yo" },
    Song { title: "Um Yea", artist: "Quality Control & Lil Baby" },
    Song { title: "BASE", artist: "Lil Skies" },
    Song { title: "Lil Baby", artist: "Lil Baby" },
    Song { title: "PUFFIN ON ZOOTIEZ", artist: "Future" },
    Song { title: "Diamonds Dancing", artist: "Young Stoner Life" },
    Song { title: "Want Me Dead", artist: "Young Thug" },
    Song { title: "Sweater Weather", artist: "The Neighbourhood" },
];
