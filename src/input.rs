use std::{fmt, io::BufRead, num::ParseIntError};

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Empty,
    InvalidStone { token: String, source: ParseIntError },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(_) => write!(f, "failed to read input"),
            InputError::Empty => write!(f, "input contains no stones"),
            InputError::InvalidStone { token, .. } => write!(f, "invalid stone {token:?}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(error) => Some(error),
            InputError::Empty => None,
            InputError::InvalidStone { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        InputError::Io(error)
    }
}

pub fn parse_stones(line: &str) -> Result<Vec<u64>, InputError> {
    let stones = line
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| InputError::InvalidStone {
                token: token.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<u64>, _>>()?;

    if stones.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(stones)
}

/// Reads a single line of stones. Anything after the first line is ignored.
pub fn read_stones(mut reader: impl BufRead) -> Result<Vec<u64>, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Empty);
    }
    parse_stones(&line)
}

#[test]
fn test_parse_stones() {
    assert_eq!(parse_stones("125 17").unwrap(), vec![125, 17]);
    assert_eq!(parse_stones("  0\t1  2024 \n").unwrap(), vec![0, 1, 2024]);
    assert_eq!(
        parse_stones("18446744073709551615").unwrap(),
        vec![u64::MAX]
    );
}

#[test]
fn test_parse_rejects_bad_tokens() {
    for line in ["1 -2", "abc", "3 4.5", "18446744073709551616"] {
        match parse_stones(line) {
            Err(InputError::InvalidStone { .. }) => {}
            other => panic!("{line:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn test_empty_input() {
    assert!(matches!(parse_stones(""), Err(InputError::Empty)));
    assert!(matches!(parse_stones("   \n"), Err(InputError::Empty)));
    assert!(matches!(read_stones(&b""[..]), Err(InputError::Empty)));
}

#[test]
fn test_read_first_line_only() {
    let stones = read_stones(&b"125 17\n99 bad\n"[..]).unwrap();
    assert_eq!(stones, vec![125, 17]);

    // no trailing newline
    assert_eq!(read_stones(&b"7"[..]).unwrap(), vec![7]);
}

#[test]
fn test_read_invalid_utf8() {
    assert!(matches!(
        read_stones(&[0xff, 0xfe, b'\n'][..]),
        Err(InputError::Io(_))
    ));
}
