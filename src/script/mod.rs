//! Line-oriented drawing command scripts.
//!
//! # Syntax
//!
//! One command per line, tokens separated by whitespace, blank lines ignored:
//!
//! ```text
//! resetCanvas W H
//! saveCanvas NAME
//! setColor R G B
//! drawLine ID x0 y0 x1 y1 ALG          ALG: Naive | DDA | Bresenham
//! drawPolygon ID x0 y0 x1 y1 ... ALG   ALG: Naive | DDA | Bresenham
//! drawEllipse ID x0 y0 x1 y1
//! drawCurve ID x0 y0 x1 y1 ... ALG     ALG: Bezier | B-spline
//! translate ID dx dy
//! rotate ID x y degrees
//! scale ID x y factor
//! clip ID x0 y0 x1 y1 ALG              ALG: Cohen-Sutherland | Liang-Barsky
//! ```
//!
//! # Example
//!
//! ```rust
//! use trueno_raster::script::{parse_line, Command};
//!
//! let command = parse_line("translate line1 10 -5").unwrap();
//! assert_eq!(
//!     command,
//!     Command::Translate { id: "line1".into(), dx: 10, dy: -5 }
//! );
//! ```

mod interpreter;

use std::path::{Component, Path};
use std::str::FromStr;

pub use interpreter::Interpreter;

use crate::clip::ClipAlgorithm;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point};
use crate::primitive::Primitive;
use crate::raster::{CurveAlgorithm, LineAlgorithm};

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the canvas and drop every item.
    ResetCanvas {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Paint the scene and write it to `NAME.<ext>`.
    SaveCanvas {
        /// File stem.
        name: String,
    },
    /// Change the pen color for subsequent draws.
    SetColor(Rgba),
    /// Store a primitive under an identifier.
    Draw {
        /// Item identifier.
        id: String,
        /// The validated primitive.
        primitive: Primitive,
    },
    /// Translate an item.
    Translate {
        /// Item identifier.
        id: String,
        /// X offset.
        dx: i32,
        /// Y offset.
        dy: i32,
    },
    /// Rotate an item clockwise.
    Rotate {
        /// Item identifier.
        id: String,
        /// Rotation center.
        pivot: Point,
        /// Angle in degrees.
        degrees: f64,
    },
    /// Scale an item.
    Scale {
        /// Item identifier.
        id: String,
        /// Scaling center.
        pivot: Point,
        /// Scale factor.
        factor: f64,
    },
    /// Clip a line item to a window.
    Clip {
        /// Item identifier.
        id: String,
        /// Clip window.
        window: ClipWindow,
        /// Clipping algorithm.
        algorithm: ClipAlgorithm,
    },
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (&name, args) = tokens
            .split_first()
            .ok_or_else(|| Error::InvalidInput("empty command".into()))?;
        let args = Args { command: name, tokens: args };

        match name {
            "resetCanvas" => {
                args.expect_len(2)?;
                Ok(Self::ResetCanvas {
                    width: args.number(0)?,
                    height: args.number(1)?,
                })
            }
            "saveCanvas" => {
                args.expect_len(1)?;
                Ok(Self::SaveCanvas {
                    name: file_stem(args.tokens[0])?.to_string(),
                })
            }
            "setColor" => {
                args.expect_len(3)?;
                Ok(Self::SetColor(Rgba::rgb(
                    args.number(0)?,
                    args.number(1)?,
                    args.number(2)?,
                )))
            }
            "drawLine" => {
                args.expect_len(6)?;
                Ok(Self::Draw {
                    id: args.id()?,
                    primitive: Primitive::line(
                        args.point(1)?,
                        args.point(3)?,
                        args.tokens[5].parse::<LineAlgorithm>()?,
                    ),
                })
            }
            "drawPolygon" => {
                let (vertices, algorithm) = args.point_list()?;
                Ok(Self::Draw {
                    id: args.id()?,
                    primitive: Primitive::polygon(vertices, algorithm.parse::<LineAlgorithm>()?)?,
                })
            }
            "drawEllipse" => {
                args.expect_len(5)?;
                Ok(Self::Draw {
                    id: args.id()?,
                    primitive: Primitive::ellipse(args.point(1)?, args.point(3)?),
                })
            }
            "drawCurve" => {
                let (control_points, algorithm) = args.point_list()?;
                Ok(Self::Draw {
                    id: args.id()?,
                    primitive: Primitive::curve(
                        control_points,
                        algorithm.parse::<CurveAlgorithm>()?,
                    )?,
                })
            }
            "translate" => {
                args.expect_len(3)?;
                Ok(Self::Translate {
                    id: args.id()?,
                    dx: args.number(1)?,
                    dy: args.number(2)?,
                })
            }
            "rotate" => {
                args.expect_len(4)?;
                Ok(Self::Rotate {
                    id: args.id()?,
                    pivot: args.point(1)?,
                    degrees: args.number(3)?,
                })
            }
            "scale" => {
                args.expect_len(4)?;
                Ok(Self::Scale {
                    id: args.id()?,
                    pivot: args.point(1)?,
                    factor: args.number(3)?,
                })
            }
            "clip" => {
                args.expect_len(6)?;
                Ok(Self::Clip {
                    id: args.id()?,
                    window: ClipWindow::from_corners(args.point(1)?, args.point(3)?),
                    algorithm: args.tokens[5].parse()?,
                })
            }
            other => Err(Error::InvalidInput(format!("unknown command '{other}'"))),
        }
    }
}

/// Check that a `saveCanvas` name is a single plain file name, so the image
/// lands directly inside the output directory.
pub(crate) fn file_stem(name: &str) -> Result<&str> {
    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if plain && !name.contains(['/', '\\']) {
        Ok(name)
    } else {
        Err(Error::InvalidInput(format!(
            "saveCanvas: '{name}' is not a plain file name"
        )))
    }
}

/// Arguments following a command name.
struct Args<'a> {
    command: &'a str,
    tokens: &'a [&'a str],
}

impl Args<'_> {
    fn expect_len(&self, n: usize) -> Result<()> {
        if self.tokens.len() == n {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!(
                "{} takes {n} arguments, got {}",
                self.command,
                self.tokens.len()
            )))
        }
    }

    fn id(&self) -> Result<String> {
        self.tokens
            .first()
            .map(|s| (*s).to_string())
            .ok_or_else(|| Error::InvalidInput(format!("{} is missing an identifier", self.command)))
    }

    fn number<T: FromStr>(&self, index: usize) -> Result<T> {
        let token = self.tokens.get(index).copied().unwrap_or_default();
        token.parse().map_err(|_| {
            Error::InvalidInput(format!(
                "{}: invalid number '{token}' for argument {}",
                self.command,
                index + 1
            ))
        })
    }

    fn point(&self, index: usize) -> Result<Point> {
        Ok(Point::new(self.number(index)?, self.number(index + 1)?))
    }

    /// `ID x0 y0 x1 y1 ... ALG` → coordinates and the algorithm tag.
    fn point_list(&self) -> Result<(Vec<Point>, &str)> {
        let Some((&algorithm, rest)) = self.tokens.split_last() else {
            return Err(Error::InvalidInput(format!("{} needs arguments", self.command)));
        };
        let coords = rest.get(1..).unwrap_or_default();
        if coords.len() % 2 != 0 {
            return Err(Error::InvalidInput(format!(
                "{}: odd number of coordinates ({})",
                self.command,
                coords.len()
            )));
        }
        let points = (0..coords.len() / 2)
            .map(|i| self.point(1 + 2 * i))
            .collect::<Result<Vec<_>>>()?;
        Ok((points, algorithm))
    }
}

/// Parse a single non-blank command line.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for unknown commands, wrong argument
/// counts or malformed numbers, [`Error::UnsupportedAlgorithm`] for unknown
/// algorithm tags.
pub fn parse_line(line: &str) -> Result<Command> {
    line.parse()
}

/// Parse a script, returning each command with its 1-based line number.
///
/// # Errors
///
/// Returns [`Error::ScriptParse`] for the first malformed line.
pub fn parse_numbered(source: &str) -> Result<Vec<(usize, Command)>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_line(line)
                .map(|command| (i + 1, command))
                .map_err(|e| Error::ScriptParse {
                    line: i + 1,
                    message: e.to_string(),
                })
        })
        .collect()
}

/// Parse a whole script, skipping blank lines.
///
/// # Errors
///
/// Returns [`Error::ScriptParse`] carrying the 1-based line number of the
/// first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    Ok(parse_numbered(source)?
        .into_iter()
        .map(|(_, command)| command)
        .collect())
}
