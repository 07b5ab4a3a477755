use core::{fmt, str::FromStr};

use crate::{Error, Result};
use Command::*;

/// Grouping of commands by the part of the stack they control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Power,
    SourceSelect,
    TapeA,
    TapeB,
    Cd,
}

/// A button of the XS system remote.
///
/// Codes are not unique: `Band` and `Tuner` both send 123, so the code is
/// looked up with [`Command::code`] rather than stored as a discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    PowerOn,
    PowerOff,

    Band,
    Plus10,
    Tape2On,
    Tape2Off,
    Video2,
    Phono,
    Tape1,
    Video1,
    Tuner,
    Cd,

    TaFastForward,
    TaStop,
    TaPlay,
    TaRecord,
    TaRewind,
    TaPause,
    TaRewindSlow,

    TbFastForward,
    TbStop,
    TbPlay,
    TbRecord,
    TbRewind,
    TbPause,
    TbRewindSlow,

    CdPlayPause,
    CdStop,
    CdDisc,
    CdFastForward,
    CdRewind,
    CdNextTrack,
    CdPrevTrack,
    CdScrubStop,
}

impl Command {
    /// Every command, in listing order.
    pub const ALL: &'static [Command] = &[
        PowerOn,
        PowerOff,
        Band,
        Plus10,
        Tape2On,
        Tape2Off,
        Video2,
        Phono,
        Tape1,
        Video1,
        Tuner,
        Cd,
        TaFastForward,
        TaStop,
        TaPlay,
        TaRecord,
        TaRewind,
        TaPause,
        TaRewindSlow,
        TbFastForward,
        TbStop,
        TbPlay,
        TbRecord,
        TbRewind,
        TbPause,
        TbRewindSlow,
        CdPlayPause,
        CdStop,
        CdDisc,
        CdFastForward,
        CdRewind,
        CdNextTrack,
        CdPrevTrack,
        CdScrubStop,
    ];

    /// Byte sent on the bus for this command.
    pub const fn code(self) -> u8 {
        match self {
            PowerOn => 181,
            PowerOff => 185,

            Band => 123,
            Plus10 => 164,
            Tape2On => 20,
            Tape2Off => 24,
            Video2 => 113,
            Phono => 115,
            Tape1 => 121,
            Video1 => 122,
            Tuner => 123,
            Cd => 125,

            TaFastForward => 67,
            TaStop => 69,
            TaPlay => 71,
            TaRecord => 73,
            TaRewind => 75,
            TaPause => 77,
            TaRewindSlow => 79,

            TbFastForward => 66,
            TbStop => 68,
            TbPlay => 70,
            TbRecord => 72,
            TbRewind => 74,
            TbPause => 76,
            TbRewindSlow => 78,

            CdPlayPause => 194,
            CdStop => 198,
            CdDisc => 174,
            CdFastForward => 161,
            CdRewind => 169,
            CdNextTrack => 192,
            CdPrevTrack => 200,
            CdScrubStop => 177,
        }
    }

    /// Symbolic name, e.g. `CD_PLAY_PAUSE`.
    pub const fn name(self) -> &'static str {
        match self {
            PowerOn => "POWER_ON",
            PowerOff => "POWER_OFF",

            Band => "BAND",
            Plus10 => "PLUS_10",
            Tape2On => "TAPE_2_ON",
            Tape2Off => "TAPE_2_OFF",
            Video2 => "VIDEO_2",
            Phono => "PHONO",
            Tape1 => "TAPE_1",
            Video1 => "VIDEO_1",
            Tuner => "TUNER",
            Cd => "CD",

            TaFastForward => "TA_FAST_FORWARD",
            TaStop => "TA_STOP",
            TaPlay => "TA_PLAY",
            TaRecord => "TA_RECORD",
            TaRewind => "TA_REWIND",
            TaPause => "TA_PAUSE",
            TaRewindSlow => "TA_REWIND_SLOW",

            TbFastForward => "TB_FAST_FORWARD",
            TbStop => "TB_STOP",
            TbPlay => "TB_PLAY",
            TbRecord => "TB_RECORD",
            TbRewind => "TB_REWIND",
            TbPause => "TB_PAUSE",
            TbRewindSlow => "TB_REWIND_SLOW",

            CdPlayPause => "CD_PLAY_PAUSE",
            CdStop => "CD_STOP",
            CdDisc => "CD_DISC",
            CdFastForward => "CD_FAST_FORWARD",
            CdRewind => "CD_REWIND",
            CdNextTrack => "CD_NEXT_TRACK",
            CdPrevTrack => "CD_PREV_TRACK",
            CdScrubStop => "CD_SCRUB_STOP",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            PowerOn | PowerOff => Category::Power,
            Band | Plus10 | Tape2On | Tape2Off | Video2 | Phono | Tape1 | Video1 | Tuner | Cd => {
                Category::SourceSelect
            }
            TaFastForward | TaStop | TaPlay | TaRecord | TaRewind | TaPause | TaRewindSlow => {
                Category::TapeA
            }
            TbFastForward | TbStop | TbPlay | TbRecord | TbRewind | TbPause | TbRewindSlow => {
                Category::TapeB
            }
            CdPlayPause | CdStop | CdDisc | CdFastForward | CdRewind | CdNextTrack
            | CdPrevTrack | CdScrubStop => Category::Cd,
        }
    }

    /// True for commands that switch the amplifier to an input.
    ///
    /// `Band`, `Plus10` and `Tape2Off` sit with the source buttons but do not
    /// select an input.
    pub const fn is_input_selection(self) -> bool {
        matches!(
            self,
            Tape1 | Tape2On | Video1 | Video2 | Phono | Tuner | Cd
        )
    }

    /// Finds a command by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Result<Command> {
        Command::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name() == name)
            .ok_or(Error::UnknownCommand)
    }

    /// Commands that send `code`, in listing order.
    pub fn from_code(code: u8) -> impl Iterator<Item = Command> + Clone {
        Command::ALL
            .iter()
            .copied()
            .filter(move |cmd| cmd.code() == code)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Command::from_name(s)
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd.code()
    }
}

/// Returns the code for the command called `name`.
pub fn lookup(name: &str) -> Result<u8> {
    match Command::from_name(name) {
        Ok(cmd) => Ok(cmd.code()),
        Err(e) => {
            log::debug!("no XS command named {:?}", name);
            Err(e)
        }
    }
}

/// Lists every `(name, code)` pair in a stable order.
///
/// The iterator can be cloned to walk the listing again.
pub fn all_commands() -> impl ExactSizeIterator<Item = (&'static str, u8)> + Clone {
    Command::ALL.iter().map(|cmd| (cmd.name(), cmd.code()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_known_names() {
        assert_eq!(lookup("CD_PLAY_PAUSE"), Ok(194));
        assert_eq!(lookup("TA_REWIND_SLOW"), Ok(79));
        assert_eq!(lookup("POWER_OFF"), Ok(185));
        assert_eq!(lookup("TAPE_2_ON"), Ok(20));
    }

    #[test]
    fn band_and_tuner_share_code() {
        assert_eq!(lookup("BAND"), Ok(123));
        assert_eq!(lookup("TUNER"), Ok(123));
        assert_ne!(Band, Tuner);

        let matches: Vec<Command> = Command::from_code(123).collect();
        assert_eq!(matches, vec![Band, Tuner]);
    }

    #[test]
    fn lookup_unknown_names() {
        assert_eq!(lookup("NONEXISTENT"), Err(Error::UnknownCommand));
        assert_eq!(lookup(""), Err(Error::UnknownCommand));
        assert_eq!(lookup("cd_stop"), Err(Error::UnknownCommand));
        assert_eq!(lookup("CD_STOP "), Err(Error::UnknownCommand));
        // Present in some Kenwood command lists, but not on this remote.
        assert_eq!(lookup("CD_START"), Err(Error::UnknownCommand));
    }

    #[test]
    fn names_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for &cmd in Command::ALL {
            assert!(seen.insert(cmd.name()), "duplicate name {}", cmd);
            assert_eq!(cmd.name().parse::<Command>(), Ok(cmd));
            assert_eq!(cmd.to_string(), cmd.name());
        }
    }

    #[test]
    fn listing_is_stable() {
        let first: Vec<_> = all_commands().collect();
        let second: Vec<_> = all_commands().collect();
        assert_eq!(first, second);
        assert_eq!(all_commands().len(), 34);
        assert_eq!(first[0], ("POWER_ON", 181));
        assert_eq!(first[33], ("CD_SCRUB_STOP", 177));

        let listing = all_commands();
        assert!(listing.clone().eq(listing));
    }

    #[test]
    fn unused_code_matches_nothing() {
        assert_eq!(Command::from_code(0).count(), 0);
        assert_eq!(Command::from_code(222).count(), 0);
    }

    #[test]
    fn categories() {
        let count = |cat| Command::ALL.iter().filter(|c| c.category() == cat).count();
        assert_eq!(count(Category::Power), 2);
        assert_eq!(count(Category::SourceSelect), 10);
        assert_eq!(count(Category::TapeA), 7);
        assert_eq!(count(Category::TapeB), 7);
        assert_eq!(count(Category::Cd), 8);
    }

    #[test]
    fn input_selection() {
        let inputs: Vec<Command> = Command::ALL
            .iter()
            .copied()
            .filter(|c| c.is_input_selection())
            .collect();
        assert_eq!(inputs, vec![Tape2On, Video2, Phono, Tape1, Video1, Tuner, Cd]);
        assert!(inputs.iter().all(|c| c.category() == Category::SourceSelect));
        assert!(!Band.is_input_selection());
        assert!(!Tape2Off.is_input_selection());
    }

    #[test]
    fn code_into_byte() {
        let byte: u8 = CdStop.into();
        assert_eq!(byte, 198);
    }
}
