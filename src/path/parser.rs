//! Path-data mini-language parser.
//!
//! Grammar accepted (whitespace and commas separate tokens, both optional
//! between a command letter and a number):
//!
//! | Letter  | Operands per repetition | Segment        |
//! |---------|-------------------------|----------------|
//! | `M` `m` | x y                     | move           |
//! | `L` `l` | x y                     | line           |
//! | `H` `h` | x                       | horizontal line|
//! | `V` `v` | y                       | vertical line  |
//! | `C` `c` | x1 y1 x2 y2 x y         | cubic curve    |
//! | `Z` `z` | none                    | close subpath  |
//!
//! Operand groups may repeat without the letter. Extra pairs after a move are
//! lines (relative if the move was), as in SVG.
//!
//! # Recovery
//!
//! Parsing never fails outright:
//! - A token that is not a number or a known letter stops the parse; commands
//!   read before it are kept.
//! - An incomplete operand group (fewer numbers than the command needs) is
//!   dropped when the next letter or the end of input arrives.
//! - Drawing commands before the first move are dropped during resolution.

use heapless::Vec as OperandVec;
use log::{trace, warn};

use super::Vec2;
use crate::error::{RenderFault, Result};

/// Maximum operands in one command (`C`).
const MAX_OPERANDS: usize = 6;

// =============================================================================
// Commands
// =============================================================================

/// Command letter, independent of case.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLine,
    VerticalLine,
    CubicCurve,
    Close,
}

impl CommandKind {
    /// Map a letter to its command and relative flag (lowercase = relative).
    pub const fn from_letter(letter: u8) -> Option<(Self, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            b'M' => Self::MoveTo,
            b'L' => Self::LineTo,
            b'H' => Self::HorizontalLine,
            b'V' => Self::VerticalLine,
            b'C' => Self::CubicCurve,
            b'Z' => Self::Close,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    /// Number of operands consumed per repetition.
    pub const fn arity(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo => 2,
            Self::HorizontalLine | Self::VerticalLine => 1,
            Self::CubicCurve => 6,
            Self::Close => 0,
        }
    }
}

/// One command as written, before relative coordinates are resolved.
#[derive(Clone, PartialEq, Debug)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub relative: bool,
    pub operands: OperandVec<f32, MAX_OPERANDS>,
}

impl PathCommand {
    fn point(&self, i: usize) -> Vec2 { Vec2::new(self.operands[2 * i], self.operands[2 * i + 1]) }
}

// =============================================================================
// Resolved Geometry
// =============================================================================

/// A drawing segment in absolute coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Segment {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

/// Absolute segments plus the cursor left after the last one.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ParsedPath {
    segments: Vec<Segment>,
    current: Vec2,
}

impl ParsedPath {
    /// Resolve relative commands against a running current point.
    pub fn from_commands(commands: &[PathCommand]) -> Self {
        let mut path = Self::default();
        let mut subpath_start = Vec2::ZERO;
        let mut started = false;

        for command in commands {
            let origin = if command.relative { path.current } else { Vec2::ZERO };

            if command.kind != CommandKind::MoveTo && !started {
                trace!("dropping {:?} before the first move", command.kind);
                continue;
            }

            let segment = match command.kind {
                CommandKind::MoveTo => {
                    let to = origin + command.point(0);
                    subpath_start = to;
                    started = true;
                    Segment::MoveTo(to)
                }
                CommandKind::LineTo => Segment::LineTo(origin + command.point(0)),
                CommandKind::HorizontalLine => {
                    let x = origin.x + command.operands[0];
                    Segment::LineTo(Vec2::new(x, path.current.y))
                }
                CommandKind::VerticalLine => {
                    let y = origin.y + command.operands[0];
                    Segment::LineTo(Vec2::new(path.current.x, y))
                }
                CommandKind::CubicCurve => Segment::CubicTo {
                    ctrl1: origin + command.point(0),
                    ctrl2: origin + command.point(1),
                    to: origin + command.point(2),
                },
                CommandKind::Close => Segment::Close,
            };

            path.current = match segment {
                Segment::MoveTo(to) | Segment::LineTo(to) | Segment::CubicTo { to, .. } => to,
                Segment::Close => subpath_start,
            };
            path.segments.push(segment);
        }

        path
    }

    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Cursor after the last segment (used to resolve further relative data).
    pub const fn current_point(&self) -> Vec2 { self.current }

    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Whether any segment would put ink down (anything beyond bare moves).
    pub fn has_geometry(&self) -> bool { self.segments.iter().any(|s| !matches!(s, Segment::MoveTo(_))) }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Parse path data into resolved geometry. Never fails; see module docs.
pub fn parse(data: &str) -> ParsedPath {
    let (commands, fault) = parse_commands(data);
    if let Some(fault) = fault {
        warn!("{fault}; keeping {} command(s) read before it", commands.len());
    }
    ParsedPath::from_commands(&commands)
}

/// Parse path data into commands, reporting the fault that stopped the parse.
pub fn parse_commands(data: &str) -> (Vec<PathCommand>, Option<RenderFault>) {
    let mut parser = Parser {
        lexer: Lexer::new(data),
        commands: Vec::new(),
    };
    let fault = parser.run().err();
    (parser.commands, fault)
}

// =============================================================================
// Parser
// =============================================================================

struct Parser<'a> {
    lexer: Lexer<'a>,
    commands: Vec<PathCommand>,
}

impl Parser<'_> {
    fn run(&mut self) -> Result<()> {
        let mut active: Option<(CommandKind, bool)> = None;
        let mut pending: OperandVec<f32, MAX_OPERANDS> = OperandVec::new();

        while let Some(token) = self.lexer.next_token()? {
            match token {
                Token::Command(kind, relative) => {
                    if !pending.is_empty() {
                        trace!("dropping incomplete operand group {pending:?}");
                        pending.clear();
                    }
                    if kind == CommandKind::Close {
                        self.commands.push(PathCommand {
                            kind,
                            relative,
                            operands: OperandVec::new(),
                        });
                        active = None;
                    } else {
                        active = Some((kind, relative));
                    }
                }
                Token::Number(value) => {
                    let Some((kind, relative)) = active else {
                        trace!("ignoring operand {value} with no active command");
                        continue;
                    };
                    pending.push(value).ok();
                    if pending.len() == kind.arity() {
                        self.commands.push(PathCommand {
                            kind,
                            relative,
                            operands: core::mem::take(&mut pending),
                        });
                        // Implicit repeats after a move are lines.
                        if kind == CommandKind::MoveTo {
                            active = Some((CommandKind::LineTo, relative));
                        }
                    }
                }
            }
        }

        if !pending.is_empty() {
            trace!("dropping trailing operand group {pending:?}");
        }
        Ok(())
    }
}

// =============================================================================
// Lexer
// =============================================================================

#[derive(Clone, Copy, PartialEq, Debug)]
enum Token {
    Command(CommandKind, bool),
    Number(f32),
}

struct Lexer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(data: &'a str) -> Self { Self { data: data.as_bytes(), pos: 0 } }

    fn peek(&self) -> Option<u8> { self.data.get(self.pos).copied() }

    fn skip_separators(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace() || b == b',') {
            self.pos += 1;
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_separators();
        let Some(b) = self.peek() else { return Ok(None) };

        if b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E') {
            let start = self.pos;
            self.pos += 1;
            return CommandKind::from_letter(b)
                .map(|(kind, relative)| Some(Token::Command(kind, relative)))
                .ok_or_else(|| self.fault(start));
        }

        self.number().map(|value| Some(Token::Number(value)))
    }

    /// `[sign] digits [. digits] [(e|E) [sign] digits]`, at least one mantissa digit.
    fn number(&mut self) -> Result<f32> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let mut mantissa_digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            mantissa_digits += self.skip_digits();
        }
        if mantissa_digits == 0 {
            // Consume the offending byte so the fault names it.
            self.pos = self.pos.max(start + 1);
            return Err(self.fault(start));
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                return Err(self.fault(start));
            }
        }

        core::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| self.fault(start))
    }

    fn fault(&self, start: usize) -> RenderFault {
        let end = self.pos.max(start + 1).min(self.data.len());
        RenderFault::MalformedPathSegment {
            offset: start,
            token: String::from_utf8_lossy(&self.data[start..end]).into_owned(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn test_move_and_line_are_two_segments() {
        let path = parse("M0 0 L10 10");
        assert_eq!(path.segments(), &[Segment::MoveTo(v(0.0, 0.0)), Segment::LineTo(v(10.0, 10.0))]);
    }

    #[test]
    fn test_unpaired_trailing_operand_is_dropped() {
        let (commands, fault) = parse_commands("M0 0 L10 10 5");
        assert_eq!(fault, None, "A short trailing group is not an error");
        assert_eq!(commands.len(), 2);

        let path = parse("M0 0 L10 10 5");
        assert_eq!(path.segments(), &[Segment::MoveTo(v(0.0, 0.0)), Segment::LineTo(v(10.0, 10.0))]);
    }

    #[test]
    fn test_incomplete_group_before_next_letter_is_dropped() {
        let path = parse("M0 0 L10 10 5 Z");
        assert_eq!(
            path.segments(),
            &[Segment::MoveTo(v(0.0, 0.0)), Segment::LineTo(v(10.0, 10.0)), Segment::Close]
        );
    }

    #[test]
    fn test_commas_and_compact_separators() {
        let path = parse("M1,2L3-4");
        assert_eq!(path.segments(), &[Segment::MoveTo(v(1.0, 2.0)), Segment::LineTo(v(3.0, -4.0))]);
    }

    #[test]
    fn test_number_forms() {
        let path = parse("M+1.5e1 -.5 L1E-1 2.");
        assert_eq!(path.segments(), &[Segment::MoveTo(v(15.0, -0.5)), Segment::LineTo(v(0.1, 2.0))]);
    }

    #[test]
    fn test_adjacent_decimals_split() {
        // "1.5.5" is 1.5 followed by .5
        let path = parse("M1.5.5");
        assert_eq!(path.segments(), &[Segment::MoveTo(v(1.5, 0.5))]);
    }

    #[test]
    fn test_relative_commands_resolve_against_cursor() {
        let path = parse("m10 10 l5 0 v5 h-5 z");
        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(v(10.0, 10.0)),
                Segment::LineTo(v(15.0, 10.0)),
                Segment::LineTo(v(15.0, 15.0)),
                Segment::LineTo(v(10.0, 15.0)),
                Segment::Close,
            ]
        );
        assert_eq!(path.current_point(), v(10.0, 10.0), "Close returns to subpath start");
    }

    #[test]
    fn test_absolute_horizontal_and_vertical_keep_other_axis() {
        let path = parse("M2 3 H9 V7");
        assert_eq!(
            path.segments(),
            &[Segment::MoveTo(v(2.0, 3.0)), Segment::LineTo(v(9.0, 3.0)), Segment::LineTo(v(9.0, 7.0))]
        );
    }

    #[test]
    fn test_implicit_repeats() {
        let path = parse("M0 0 10 0 10 10 H0 5 V3");
        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(v(0.0, 0.0)),
                Segment::LineTo(v(10.0, 0.0)),
                Segment::LineTo(v(10.0, 10.0)),
                Segment::LineTo(v(0.0, 10.0)),
                Segment::LineTo(v(5.0, 10.0)),
                Segment::LineTo(v(5.0, 3.0)),
            ]
        );
    }

    #[test]
    fn test_relative_move_repeats_are_relative_lines() {
        let path = parse("m1 1 2 2");
        assert_eq!(path.segments(), &[Segment::MoveTo(v(1.0, 1.0)), Segment::LineTo(v(3.0, 3.0))]);
    }

    #[test]
    fn test_cubic_absolute_and_relative() {
        let path = parse("M0 0 C1 2 3 4 5 6 c1 1 2 2 3 3");
        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(v(0.0, 0.0)),
                Segment::CubicTo { ctrl1: v(1.0, 2.0), ctrl2: v(3.0, 4.0), to: v(5.0, 6.0) },
                Segment::CubicTo { ctrl1: v(6.0, 7.0), ctrl2: v(7.0, 8.0), to: v(8.0, 9.0) },
            ]
        );
    }

    #[test]
    fn test_segments_before_first_move_are_discarded() {
        let path = parse("L5 5 H3 M1 1 L2 2");
        assert_eq!(path.segments(), &[Segment::MoveTo(v(1.0, 1.0)), Segment::LineTo(v(2.0, 2.0))]);
    }

    #[test]
    fn test_malformed_number_keeps_prefix() {
        let (commands, fault) = parse_commands("M0 0 L10 10 L1e+ 4");
        assert_eq!(commands.len(), 2);
        assert!(matches!(fault, Some(RenderFault::MalformedPathSegment { offset: 13, .. })));

        let path = parse("M0 0 L10 10 L1e+ 4 L20 20");
        assert_eq!(path.segments().len(), 2, "Nothing after the bad token is read");
    }

    #[test]
    fn test_lone_sign_is_malformed() {
        let (commands, fault) = parse_commands("M0 0 L - 3");
        assert_eq!(commands.len(), 1);
        assert!(matches!(fault, Some(RenderFault::MalformedPathSegment { .. })));
    }

    #[test]
    fn test_unsupported_command_stops_parse() {
        let (commands, fault) = parse_commands("M0 0 L1 1 Q2 2 3 3");
        assert_eq!(commands.len(), 2);
        assert_eq!(
            fault,
            Some(RenderFault::MalformedPathSegment { offset: 10, token: "Q".into() })
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse("").is_empty());
        assert!(parse("  ,, ").is_empty());
        assert!(!parse("M1 1").has_geometry(), "A bare move draws nothing");
    }

    #[test]
    fn test_arity_table() {
        assert_eq!(CommandKind::MoveTo.arity(), 2);
        assert_eq!(CommandKind::HorizontalLine.arity(), 1);
        assert_eq!(CommandKind::CubicCurve.arity(), 6);
        assert_eq!(CommandKind::Close.arity(), 0);
        assert_eq!(CommandKind::from_letter(b'c'), Some((CommandKind::CubicCurve, true)));
        assert_eq!(CommandKind::from_letter(b'A'), None);
    }
}
