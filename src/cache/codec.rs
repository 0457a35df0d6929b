//! Columnar binary serialization of price series.
//!
//! Layout (little-endian): 4 magic bytes, u16 version, u32 row count,
//! then whole columns in order: timestamps as unix seconds (i64), open,
//! high, low, close, volume (f64).

use crate::models::price::{PriceBar, PriceSeries};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use chrono::{TimeZone, Utc};
use std::io::{Cursor, Read, Write};
use thiserror::Error;

const MAGIC: &[u8; 4] = b"EQSC";
const VERSION: u16 = 1;
const COLUMNS: usize = 6;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("truncated or malformed blob: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad magic bytes")]
    BadMagic,
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u16),
    #[error("blob length does not match row count")]
    LengthMismatch,
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}

pub fn encode(series: &PriceSeries) -> Result<Vec<u8>, CodecError> {
    let bars = series.bars();
    let mut buf = Vec::with_capacity(header_len() + bars.len() * COLUMNS * 8);

    buf.write_all(MAGIC)?;
    buf.write_u16::<LittleEndian>(VERSION)?;
    buf.write_u32::<LittleEndian>(bars.len() as u32)?;

    for bar in bars {
        buf.write_i64::<LittleEndian>(bar.timestamp.timestamp())?;
    }
    for bar in bars {
        buf.write_f64::<LittleEndian>(bar.open)?;
    }
    for bar in bars {
        buf.write_f64::<LittleEndian>(bar.high)?;
    }
    for bar in bars {
        buf.write_f64::<LittleEndian>(bar.low)?;
    }
    for bar in bars {
        buf.write_f64::<LittleEndian>(bar.close)?;
    }
    for bar in bars {
        buf.write_f64::<LittleEndian>(bar.volume)?;
    }

    Ok(buf)
}

pub fn decode(blob: &[u8]) -> Result<PriceSeries, CodecError> {
    let mut cursor = Cursor::new(blob);

    let mut magic = [0u8; 4];
    cursor.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(CodecError::BadMagic);
    }
    let version = cursor.read_u16::<LittleEndian>()?;
    if version != VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }

    let rows = cursor.read_u32::<LittleEndian>()? as usize;
    if blob.len() != header_len() + rows * COLUMNS * 8 {
        return Err(CodecError::LengthMismatch);
    }

    let mut timestamps = Vec::with_capacity(rows);
    for _ in 0..rows {
        let secs = cursor.read_i64::<LittleEndian>()?;
        let timestamp = Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or(CodecError::InvalidTimestamp(secs))?;
        timestamps.push(timestamp);
    }

    let open = read_column(&mut cursor, rows)?;
    let high = read_column(&mut cursor, rows)?;
    let low = read_column(&mut cursor, rows)?;
    let close = read_column(&mut cursor, rows)?;
    let volume = read_column(&mut cursor, rows)?;

    let bars = timestamps
        .into_iter()
        .enumerate()
        .map(|(i, timestamp)| PriceBar {
            timestamp,
            open: open[i],
            high: high[i],
            low: low[i],
            close: close[i],
            volume: volume[i],
        })
        .collect();

    Ok(PriceSeries::from_bars(bars))
}

fn read_column(cursor: &mut Cursor<&[u8]>, rows: usize) -> Result<Vec<f64>, CodecError> {
    let mut column = Vec::with_capacity(rows);
    for _ in 0..rows {
        column.push(cursor.read_f64::<LittleEndian>()?);
    }
    Ok(column)
}

const fn header_len() -> usize {
    MAGIC.len() + 2 + 4
}
