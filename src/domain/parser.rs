//! QLI(Galil DMC 부분집합) 텍스트를 명령 목록으로 파싱하는 모듈.

use thiserror::Error;
use tracing::debug;

use crate::domain::program::{Axis, AxisMap, Command, Located, Program};

/// 니들 출력 비트 기본값.
pub const DEFAULT_NEEDLE_BIT: u32 = 1;

/// 좌표에는 영향이 없지만 허용하는 Galil 명령.
const PASSTHROUGH_MNEMONICS: &[&str] = &[
    "AC", "AM", "BG", "DC", "LE", "LI", "LM", "MG", "MO", "SH", "SP", "ST", "VA", "VD", "VS",
    "VT", "WT",
];

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: unknown command `{text}`")]
    UnknownCommand { line: usize, text: String },

    #[error("line {line}: `{mnemonic}` expects {expected} argument(s)")]
    MissingArgument {
        line: usize,
        mnemonic: String,
        expected: usize,
    },

    #[error("line {line}: `{mnemonic}` takes at most {max} argument(s)")]
    TooManyArguments {
        line: usize,
        mnemonic: String,
        max: usize,
    },

    #[error("line {line}: invalid number `{text}`")]
    InvalidNumber { line: usize, text: String },

    #[error("line {line}: invalid vector axes `{text}`")]
    InvalidAxes { line: usize, text: String },
}

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// `SB`/`CB`가 니들 on/off로 해석되는 출력 비트 번호.
    pub needle_bit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            needle_bit: DEFAULT_NEEDLE_BIT,
        }
    }
}

/// 전체 프로그램 텍스트를 파싱한다.
pub fn parse_program(source: &str, options: &ParseOptions) -> Result<Program, ParseError> {
    let mut commands = Vec::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let line = idx + 1;
        for statement in split_statements(raw_line) {
            // REM/NO 이후는 줄 끝까지 주석이다.
            if is_remark(statement) {
                break;
            }
            if let Some(command) = parse_statement(statement, line, options)? {
                commands.push(Located {
                    line,
                    value: command,
                });
            }
        }
    }

    debug!(commands = commands.len(), "parsed qli program");
    Ok(Program::new(commands))
}

fn parse_statement(
    statement: &str,
    line: usize,
    options: &ParseOptions,
) -> Result<Option<Command>, ParseError> {
    let code = statement.trim();
    if code.is_empty() || code.starts_with('#') {
        return Ok(None);
    }

    if code.len() < 2 || !code.is_char_boundary(2) {
        return Err(ParseError::UnknownCommand {
            line,
            text: code.to_string(),
        });
    }
    let (head, rest) = code.split_at(2);
    let mnemonic = head.to_ascii_uppercase();
    let rest = rest.trim();

    let command = match mnemonic.as_str() {
        "VM" => Command::VectorMotion {
            axes: parse_axes(rest, line)?,
        },
        "VP" => {
            let [d1, d2] = numbers::<2>(&mnemonic, rest, line)?;
            Command::VectorPosition { d1, d2 }
        }
        "CR" => {
            let [radius, start_angle, angle_range] = numbers::<3>(&mnemonic, rest, line)?;
            Command::Circle {
                radius,
                start_angle,
                angle_range,
            }
        }
        "VE" => no_args(Command::VectorSequenceEnd, &mnemonic, rest, line)?,
        "CS" => no_args(Command::ClearSequence, &mnemonic, rest, line)?,
        "EN" => no_args(Command::End, &mnemonic, rest, line)?,
        "SB" | "CB" => {
            let [bit] = numbers::<1>(&mnemonic, rest, line)?;
            if bit == f64::from(options.needle_bit) {
                if mnemonic == "SB" {
                    Command::NeedleOn
                } else {
                    Command::NeedleOff
                }
            } else {
                Command::Other {
                    mnemonic,
                    args: split_args(rest),
                }
            }
        }
        m if PASSTHROUGH_MNEMONICS.contains(&m) => Command::Other {
            mnemonic,
            args: split_args(rest),
        },
        _ => {
            return Err(ParseError::UnknownCommand {
                line,
                text: code.to_string(),
            });
        }
    };

    Ok(Some(command))
}

/// 한 줄을 `;` 단위 문장으로 나눈다. 따옴표 밖의 `'`부터 줄 끝까지는 버린다.
fn split_statements(line: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (pos, ch) in line.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            ';' if !quoted => {
                statements.push(&line[start..pos]);
                start = pos + 1;
            }
            '\'' if !quoted => {
                statements.push(&line[start..pos]);
                return statements;
            }
            _ => {}
        }
    }
    statements.push(&line[start..]);
    statements
}

fn is_remark(statement: &str) -> bool {
    let head: String = statement.trim_start().chars().take(3).collect();
    let head = head.to_ascii_uppercase();
    head.starts_with("REM") || head.starts_with("NO")
}

fn parse_axes(rest: &str, line: usize) -> Result<AxisMap, ParseError> {
    let invalid = || ParseError::InvalidAxes {
        line,
        text: rest.to_string(),
    };

    // 접선 축(N)은 경로 모양에 영향이 없으므로 무시한다.
    let letters: Vec<char> = rest
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .filter(|c| !c.eq_ignore_ascii_case(&'N'))
        .collect();
    if letters.len() != 2 {
        return Err(invalid());
    }

    let first = Axis::from_letter(letters[0]).ok_or_else(invalid)?;
    let second = Axis::from_letter(letters[1]).ok_or_else(invalid)?;
    AxisMap::from_axes(first, second).ok_or_else(invalid)
}

fn numbers<const N: usize>(mnemonic: &str, rest: &str, line: usize) -> Result<[f64; N], ParseError> {
    let args = split_args(rest);
    if args.len() > N {
        return Err(ParseError::TooManyArguments {
            line,
            mnemonic: mnemonic.to_string(),
            max: N,
        });
    }

    let mut out = [0.0; N];
    for (slot, value) in out.iter_mut().enumerate() {
        let text = args
            .get(slot)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::MissingArgument {
                line,
                mnemonic: mnemonic.to_string(),
                expected: N,
            })?;
        *value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                line,
                text: text.clone(),
            })?;
    }
    Ok(out)
}

fn no_args(command: Command, mnemonic: &str, rest: &str, line: usize) -> Result<Command, ParseError> {
    if !rest.is_empty() {
        return Err(ParseError::TooManyArguments {
            line,
            mnemonic: mnemonic.to_string(),
            max: 0,
        });
    }
    Ok(command)
}

fn split_args(rest: &str) -> Vec<String> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(',').map(|s| s.trim().to_string()).collect()
}
