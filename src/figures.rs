//! The two built-in figures: a potato chip and a cockroach.
//!
//! Art is authored as indented raw blocks and squared up by the frame
//! normalizer at construction time, so the blocks here can be sloppy about
//! width and height.

use std::str::FromStr;

use crate::error::Error;
use crate::frame::{normalize_frames, Spinner};

/// Which figure to spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Figure {
    /// The potato chip.
    Chip,
    /// The cockroach.
    Cockroach,
}

impl Figure {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Chip => "chip",
            Self::Cockroach => "cockroach",
        }
    }

    /// Display label used when the figure speaks in the debate.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chip => "Chip",
            Self::Cockroach => "Cockroach",
        }
    }

    /// Build this figure's spinner from its raw art.
    ///
    /// # Errors
    ///
    /// Propagates normalization errors; with the built-in art this only
    /// fails if the art itself is broken.
    pub fn spinner(self) -> Result<Spinner, Error> {
        let raw = match self {
            Self::Chip => CHIP_FRAMES.as_slice(),
            Self::Cockroach => COCKROACH_FRAMES.as_slice(),
        };
        Spinner::new(normalize_frames(raw)?)
    }
}

impl FromStr for Figure {
    type Err = Error;

    /// Parse a user-supplied choice, case-insensitive and trimmed.
    ///
    /// Accepts `chip`/`c` and `cockroach`/`roach`/`r`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "chip" | "c" => Ok(Self::Chip),
            "cockroach" | "roach" | "r" => Ok(Self::Cockroach),
            _ => Err(Error::UnknownFigure(value.to_owned())),
        }
    }
}

const CHIP_FRAMES: [&str; 4] = [
    r"
                   ____________
                .-'            '-.
              .'    _  LAYS _     '.
             /    .' `'----'`.      \
            |    /  o      o  \      |
            |    |            |      |
             \    \   .--.   /      /
              '.   '._\__/_.''    .'
                '-.          .-'
                   '--------'
        ",
    r#"
                     _______
                .-''        ''-.
              .'    LAYS        '.
             /    .-""""-.        \
            |   /  o  o  \         |
            |   \   __   /         |
             \    '-.__.-'        /
              '.                .'
                 '-.        .-'
                    '------'
        "#,
    r"
                     __________
                   /          /
                  /  LAYS    /
                  \         /
                   \_______/
                   /       \
                  /_________\
        ",
    r#"
                    _______
               .-''        ''-.
             .'        LAYS    '.
            /        .-""""-.    \
           |         \ o  o /     |
           |         /  __  \     |
            \        '-.__.-'    /
             '.                .'
                '-.        .-'
                   '------'
        "#,
];

const COCKROACH_FRAMES: [&str; 4] = [
    r"
                       /\        /\
                 ___.-'( )------( )'-.___
               .'      /  \    /  \      '.
              /      _/____\__/____\_      \
             /      /  /  /    \  \  \      \
            |      |  /__/      \__\  |      |
             \      \              /      /
              '.      '._      _.'      .'
                 '-._____\____/_____.-'
                    /    /    \    \
                   (    (      )    )
        ",
    r"
                       /\  /\
                      (  \/  )
                 ___.- \    / -.___
               .'      \__/      '.
              /      __/  \__      \
             /     _/  /\  \_ \     \
            |     |__ /  \ __| |     |
             \      /      \      /
              '.    '._  _.'    .'
                 '-.____\/____.-'
                    /    /\    \
                   (    (  )    )
        ",
    r"
                       /\        /\
                      //\\      //\\
                 ____//  \\____//  \\____
               .'      /\  /\  /\      '.
              /      _/  \/  \/  \_      \
             /     _/   (      )   \_     \
            |     |__   \_/\__/   __|     |
             \      /            \      /
              '.    '._        _.'    .'
                 '-.____\____/____.-'
                    /    /    \    \
                   (    (      )    )
        ",
    r"
                      /\  /\
                     (  \/  )
                 ____/      \____
               .'     /\  /\     '.
              /     _/  \/  \_     \
             /    _/   /\   \_ \    \
            |    |__  /  \  __| |    |
             \     /        \     /
              '.   '._    _.'   .'
                 '-.___\__/__.-'
                    /   /\   \
                   (   (  )   )
        ",
];
