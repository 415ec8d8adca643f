//! Reading scene description streams.
//!
//! A vector on the stream is `( x y z )`: three reals between two single
//! character delimiter tokens, with arbitrary whitespace between tokens.
//! The delimiters also self-delimit, so `(0 0 0)` scans the same as
//! `( 0 0 0 )`. A triangle record is five consecutive vectors.
//!
//! Errors are never recovered here; the loader owning the stream decides
//! whether to skip, abort or log.

use std::io::BufRead;

use thiserror::Error;

use crate::geometry::{Triangle, Vector3};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stream ended in the middle of a vector")]
    Truncated,

    #[error("Expected delimiter {expected:?}, found {found:?}")]
    Delimiter {
        expected: &'static str,
        found: String,
    },

    #[error("Failed to parse number: {token:?}")]
    Number { token: String },
}

/// Scans the next whitespace-separated token off the stream.
/// `(` and `)` always form single-character tokens of their own.
fn next_token<R: BufRead>(reader: &mut R) -> Result<String, ReadError> {
    let mut token = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;

        for &byte in buf {
            if byte.is_ascii_whitespace() {
                used += 1;
                if token.is_empty() {
                    continue;
                }
                done = true;
                break;
            }

            if byte == b'(' || byte == b')' {
                if token.is_empty() {
                    token.push(byte);
                    used += 1;
                }
                done = true;
                break;
            }

            token.push(byte);
            used += 1;
        }

        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(ReadError::Truncated);
    }
    Ok(String::from_utf8_lossy(&token).into_owned())
}

fn expect_delimiter<R: BufRead>(reader: &mut R, expected: &'static str) -> Result<(), ReadError> {
    let found = next_token(reader)?;
    if found != expected {
        return Err(ReadError::Delimiter { expected, found });
    }
    Ok(())
}

fn read_real<R: BufRead>(reader: &mut R) -> Result<f64, ReadError> {
    let token = next_token(reader)?;
    token.parse().map_err(|_| ReadError::Number { token })
}

/// Reads a single vector from the stream.
pub fn read_vector<R: BufRead>(reader: &mut R) -> Result<Vector3, ReadError> {
    expect_delimiter(reader, "(")?;
    let x = read_real(reader)?;
    let y = read_real(reader)?;
    let z = read_real(reader)?;
    expect_delimiter(reader, ")")?;

    Ok(Vector3::new(x, y, z))
}

impl Triangle {
    /// Reads one triangle record off a scene stream: three vertices followed
    /// by the reflectivity and emitivity colors, five vectors in total.
    ///
    /// Either yields a fully constructed, clamped triangle, or fails without
    /// exposing a partial value.
    pub fn read<R: BufRead>(reader: &mut R) -> Result<Triangle, ReadError> {
        let vertices = [
            read_vector(reader)?,
            read_vector(reader)?,
            read_vector(reader)?,
        ];
        let reflectivity = read_vector(reader)?;
        let emitivity = read_vector(reader)?;

        Ok(Triangle::new(vertices, reflectivity, emitivity))
    }
}
