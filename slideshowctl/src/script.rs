//! Line-oriented command scripts.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! next | prev            step one slide
//! jump <index>           jump directly to a slide
//! swipe left|right       swipe gesture
//! end <index>            completion signal from a slide
//! finalize               complete the pending transition
//! thumbs next|prev       page the thumbnail strip
//! thumbs init            (re)measure the thumbnail strip
//! width <px>             set the measured thumbnail strip width
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use slideshow_model::{SlideDirection, SwipeDirection};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    Move(SlideDirection),
    Jump(usize),
    Swipe(SwipeDirection),
    TransitionEnd(usize),
    Finalize,
    ThumbnailPage(SlideDirection),
    ThumbnailInit,
    StripWidth(f64),
}

impl Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptCommand::Move(SlideDirection::Next) => write!(f, "next"),
            ScriptCommand::Move(SlideDirection::Previous) => write!(f, "prev"),
            ScriptCommand::Jump(index) => write!(f, "jump {index}"),
            ScriptCommand::Swipe(swipe) => write!(f, "swipe {swipe}"),
            ScriptCommand::TransitionEnd(index) => write!(f, "end {index}"),
            ScriptCommand::Finalize => write!(f, "finalize"),
            ScriptCommand::ThumbnailPage(SlideDirection::Next) => {
                write!(f, "thumbs next")
            }
            ScriptCommand::ThumbnailPage(SlideDirection::Previous) => {
                write!(f, "thumbs prev")
            }
            ScriptCommand::ThumbnailInit => write!(f, "thumbs init"),
            ScriptCommand::StripWidth(width) => write!(f, "width {width}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CommandParseError(String);

fn direction(word: Option<&str>) -> Result<SlideDirection, CommandParseError> {
    match word {
        Some("next") => Ok(SlideDirection::Next),
        Some("prev") | Some("previous") => Ok(SlideDirection::Previous),
        other => Err(CommandParseError(format!(
            "expected next or prev, got {}",
            other.unwrap_or("nothing")
        ))),
    }
}

fn number<T: FromStr>(
    word: Option<&str>,
    what: &str,
) -> Result<T, CommandParseError> {
    let word = word
        .ok_or_else(|| CommandParseError(format!("missing {what}")))?;
    word.parse()
        .map_err(|_| CommandParseError(format!("invalid {what} '{word}'")))
}

impl FromStr for ScriptCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();

        let command = match verb {
            "next" => ScriptCommand::Move(SlideDirection::Next),
            "prev" | "previous" => ScriptCommand::Move(SlideDirection::Previous),
            "jump" => ScriptCommand::Jump(number(words.next(), "index")?),
            "swipe" => match words.next() {
                Some("left") => ScriptCommand::Swipe(SwipeDirection::Left),
                Some("right") => ScriptCommand::Swipe(SwipeDirection::Right),
                other => {
                    return Err(CommandParseError(format!(
                        "expected left or right, got {}",
                        other.unwrap_or("nothing")
                    )));
                }
            },
            "end" => ScriptCommand::TransitionEnd(number(words.next(), "index")?),
            "finalize" => ScriptCommand::Finalize,
            "thumbs" => match words.next() {
                Some("init") => ScriptCommand::ThumbnailInit,
                word => ScriptCommand::ThumbnailPage(direction(word)?),
            },
            "width" => ScriptCommand::StripWidth(number(words.next(), "width")?),
            other => {
                return Err(CommandParseError(format!(
                    "unknown command '{other}'"
                )));
            }
        };

        if let Some(extra) = words.next() {
            return Err(CommandParseError(format!(
                "unexpected argument '{extra}'"
            )));
        }
        Ok(command)
    }
}

/// Parse a whole script, reporting the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            text.parse().map_err(|err: CommandParseError| ScriptError {
                line,
                message: err.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "
            # warm up
            next
            prev
            jump 4
            swipe left
            swipe right
            end 2
            finalize
            thumbs next
            thumbs prev
            thumbs init
            width 480.5
        ";
        assert_eq!(
            parse_script(script).unwrap(),
            vec![
                ScriptCommand::Move(SlideDirection::Next),
                ScriptCommand::Move(SlideDirection::Previous),
                ScriptCommand::Jump(4),
                ScriptCommand::Swipe(SwipeDirection::Left),
                ScriptCommand::Swipe(SwipeDirection::Right),
                ScriptCommand::TransitionEnd(2),
                ScriptCommand::Finalize,
                ScriptCommand::ThumbnailPage(SlideDirection::Next),
                ScriptCommand::ThumbnailPage(SlideDirection::Previous),
                ScriptCommand::ThumbnailInit,
                ScriptCommand::StripWidth(480.5),
            ]
        );
    }

    #[test]
    fn errors_carry_the_line_number() {
        let err = parse_script("next\n\njump x\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("invalid index"));

        assert_eq!(parse_script("next now").unwrap_err().line, 1);
        assert!(parse_script("fly").is_err());
        assert!(parse_script("swipe up").is_err());
    }

    #[test]
    fn display_round_trips_through_the_parser() {
        let command = ScriptCommand::ThumbnailPage(SlideDirection::Previous);
        assert_eq!(command.to_string().parse::<ScriptCommand>(), Ok(command));
    }
}
